//! Terminal front-end for the recipe roulette
//!
//! Usage: cargo run --example roulette -- tomato garlic basil
//!
//! Needs SPOONACULAR_API_KEY (or a roulette.toml) to reach the service.
//! Set RUST_LOG=debug to see the raw search and detail payloads.

use recipe_roulette::{RecipeFinder, RouletteSession, SearchOutcome};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut session = RouletteSession::new();
    for arg in std::env::args().skip(1) {
        session.set_draft(arg);
        if let Err(e) = session.add_draft() {
            eprintln!("Skipping: {}", e);
        }
    }

    if !session.can_search() {
        eprintln!("Usage: roulette <ingredient> [<ingredient>...]");
        std::process::exit(2);
    }

    println!("Ingredients: {}", session.ingredients().as_slice().join(", "));
    println!("Finding a random dish...\n");

    let finder = RecipeFinder::builder().build()?;
    match session.search(&finder).await {
        SearchOutcome::Found => {
            if let Some(recipe) = session.recipe() {
                println!("{}", recipe.to_text());
            }
        }
        SearchOutcome::Failed(error) => println!("{}", error.message()),
        SearchOutcome::Skipped => eprintln!("Search did not start"),
    }

    Ok(())
}
