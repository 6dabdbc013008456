use content_aggregator::{generate, ResearchSource};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    generate(&ResearchSource)?;
    Ok(())
}
