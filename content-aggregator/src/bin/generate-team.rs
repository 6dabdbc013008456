use content_aggregator::{generate, AggregatorConfig, TeamSource};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = AggregatorConfig::default();
    generate(&TeamSource::new(config.default_organization))?;
    Ok(())
}
