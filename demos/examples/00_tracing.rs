use pokedex::{EntityId, Language};
use pokedex_demos::common::get_pokedex;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=info,pokedex=debug,pokedex_http=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let dex = get_pokedex()?;
    tracing::info!(upstream = dex.upstream_name(), "pokedex ready");

    // cold, then warm
    let _ = dex.get_detail(EntityId::new(1)?, Language::Es).await?;
    let _ = dex.get_detail(EntityId::new(1)?, Language::Es).await?;

    let _ = dex.page(0, 3, Language::En).await?;
    dex.evict_all().await;

    println!("done");
    Ok(())
}
