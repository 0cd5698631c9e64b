use pokedex::EntityId;
use pokedex_demos::common::{get_pokedex, language_arg};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let id: u32 = std::env::args()
        .nth(1)
        .map_or(Ok(1), |raw| raw.parse())?;
    let language = language_arg(2)?;
    let dex = get_pokedex()?;

    let view = dex.detail(EntityId::new(id)?, language).await?;
    let rec = &view.data;

    println!("#{} {}", rec.basic.id, rec.basic.name);
    if let Some(kg) = rec.basic.weight_kg {
        println!("  weight: {kg:.1} kg");
    }
    if let Some(m) = rec.height_m {
        println!("  height: {m:.1} m");
    }
    println!("  types: {}", rec.basic.type_names.join(", "));
    for ability in &rec.basic.ability_descriptions {
        println!("  ability: {ability}");
    }
    println!(
        "  flavor: {}",
        rec.species.flavor_text.as_deref().unwrap_or("-")
    );
    println!("  image: {}", rec.image_detail);
    for (i, generation) in view.evolution.iter().enumerate() {
        let names: Vec<&str> = generation.iter().map(|r| r.name.as_str()).collect();
        println!("  stage {i}: {}", names.join(" / "));
    }
    Ok(())
}
