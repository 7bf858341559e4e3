//! Basket Demo
//!
//! Prices a basket from a fixture set.
//!
//! Use `-f` to load a fixture set by name
//! Use `-c` to supply a comma-separated list of product codes

use anyhow::Result;
use clap::Parser;

use hamper::{fixtures::Fixture, utils::DemoBasketArgs};

/// Basket Demo
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    let args = DemoBasketArgs::parse();

    let fixture = Fixture::from_set(&args.fixture)?;
    let mut basket = fixture.basket();

    for code in &args.codes {
        basket.add(code)?;
    }

    for item in basket.items() {
        println!("{}  {}  {}", item.code, item.name, item.price);
    }

    for offer in fixture.offers() {
        println!("Offer: {}", offer.description());
    }

    println!("Total: {}", basket.total());

    Ok(())
}
