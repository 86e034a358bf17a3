mod config;
mod fetch;
mod render;

use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use tracing::info;

const GLOBALS_TABLE: &str = "Globals";
const SECTIONS_TABLE: &str = "Sections";
const OUTPUT_PATH: &str = "public/index.html";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();

    // Credentials are validated before any network or filesystem work.
    let cfg = config::Config::from_env()?;
    let client = reqwest::Client::new();

    let globals = fetch::fetch_table(&client, &cfg, GLOBALS_TABLE, None).await?;
    let sections = fetch::fetch_table(&client, &cfg, SECTIONS_TABLE, None).await?;

    info!("Rendering {} section cards", sections.len());
    let html = render::render_site(&globals, &sections);

    // Single write at the end: either the complete document lands on disk
    // or nothing does.
    if let Some(dir) = Path::new(OUTPUT_PATH).parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory '{}'", dir.display()))?;
    }
    std::fs::write(OUTPUT_PATH, &html)
        .with_context(|| format!("Failed to write '{}'", OUTPUT_PATH))?;

    println!(
        "Wrote {} ({} bytes) in {:.1}s",
        OUTPUT_PATH,
        html.len(),
        t0.elapsed().as_secs_f64()
    );
    Ok(())
}
