use pokedex_demos::common::{get_pokedex, language_arg};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let language = language_arg(1)?;
    let dex = get_pokedex()?;

    let page = dex.page(0, 3, language).await?;
    println!("{} records upstream; first page:", page.total_count);
    for rec in &page.items {
        println!(
            "  #{:<4} {:<12} {}",
            rec.id,
            rec.name,
            rec.type_names.join("/")
        );
    }
    Ok(())
}
