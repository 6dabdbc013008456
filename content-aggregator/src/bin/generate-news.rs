use content_aggregator::{generate, NewsSource};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    generate(&NewsSource)?;
    Ok(())
}
