//! Catalogue Fixtures

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    fixtures::FixtureError,
    products::{Catalogue, Product},
};

/// Wrapper for a catalogue in YAML
#[derive(Debug, Deserialize)]
pub struct CatalogueFixture {
    /// Products in catalogue order
    pub products: Vec<ProductFixture>,
}

/// Product fixture from YAML
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product code
    pub code: String,

    /// Product name
    pub name: String,

    /// Unit price as a decimal string (e.g. `"7.95"`)
    pub price: String,
}

impl TryFrom<ProductFixture> for Product {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let price = parse_amount(&fixture.price)?;

        Ok(Product::new(fixture.code, fixture.name, price))
    }
}

impl TryFrom<CatalogueFixture> for Catalogue {
    type Error = FixtureError;

    fn try_from(fixture: CatalogueFixture) -> Result<Self, Self::Error> {
        let products = fixture
            .products
            .into_iter()
            .map(Product::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Catalogue::new(products))
    }
}

/// Parse a decimal amount from a fixture string.
pub(crate) fn parse_amount(raw: &str) -> Result<Decimal, FixtureError> {
    raw.trim()
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(raw.to_string()))
}
