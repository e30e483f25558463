//! Example: fetch a picture and a fact for every supported animal
//!
//! Run with: cargo run -p animalkit --example random_animals
//!
//! Talks to the live APIs, so results vary between runs.

use animalkit::{AnimalClient, SUPPORTED_ANIMALS};

#[tokio::main]
async fn main() {
    println!("AnimalKit {}", animalkit::VERSION);
    println!("=============\n");

    let client = match AnimalClient::new() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut failed = 0;

    for animal in SUPPORTED_ANIMALS {
        println!("{}", animal);

        match client.picture(animal).await {
            Ok(url) => println!("   picture: {}", url),
            Err(e) => {
                println!("   picture FAILED: {}", e);
                failed += 1;
            }
        }

        match client.fact(animal).await {
            Ok(fact) => println!("   fact:    {}", fact),
            Err(e) => {
                println!("   fact FAILED: {}", e);
                failed += 1;
            }
        }
        println!();
    }

    if failed > 0 {
        std::process::exit(1);
    }
}
