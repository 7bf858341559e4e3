//! Utils

use clap::Parser;

/// Arguments for the basket demos
#[derive(Debug, Parser)]
pub struct DemoBasketArgs {
    /// Fixture set to use for the catalogue, delivery schedule & offers
    #[clap(short, long, default_value = "widgets")]
    pub fixture: String,

    /// Product codes to add to the basket
    #[clap(short, long, value_delimiter = ',')]
    pub codes: Vec<String>,
}
