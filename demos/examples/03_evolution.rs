use pokedex::EntityId;
use pokedex_demos::common::{get_pokedex, language_arg};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let language = language_arg(1)?;
    let dex = get_pokedex()?;

    // eevee branches into several evolutions at once
    let eevee = dex.get_detail(EntityId::new(133)?, language).await?;
    let generations = dex
        .evolution(&eevee.species.evolution_chain_url, language)
        .await?;

    for (i, generation) in generations.iter().enumerate() {
        let names: Vec<&str> = generation.iter().map(|r| r.name.as_str()).collect();
        println!("stage {i}: {}", names.join(", "));
    }

    dex.evict_all().await;
    println!("cache cleared");
    Ok(())
}
