use content_aggregator::{generate, AggregatorConfig, PublicationsSource};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = AggregatorConfig::default();
    generate(&PublicationsSource::new(config.author_aliases))?;
    Ok(())
}
