//! Fixtures
//!
//! YAML-backed configuration for catalogues, delivery schedules and offer
//! pipelines, loaded from `./fixtures/{catalogues,delivery,offers}/<name>.yml`.

use std::{fs, path::PathBuf};

use thiserror::Error;

use crate::{
    basket::Basket,
    delivery::DeliverySchedule,
    fixtures::{catalogue::CatalogueFixture, delivery::DeliveryFixture, offers::OffersFixture},
    offers::Offer,
    products::Catalogue,
};

pub mod catalogue;
pub mod delivery;
pub mod offers;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Percentage outside the `0.0..=1.0` range
    #[error("Invalid percentage: {0}")]
    InvalidPercentage(f64),
}

/// Loads catalogues, delivery schedules and offer pipelines from YAML files.
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    catalogue: Catalogue,
    delivery: DeliverySchedule,
    offers: Vec<Box<dyn Offer>>,
}

impl Fixture {
    /// Create a new empty fixture with the default base path.
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with a custom base path.
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            catalogue: Catalogue::default(),
            delivery: DeliverySchedule::default(),
            offers: Vec::new(),
        }
    }

    /// Load a catalogue from a YAML fixture file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a price
    /// is not a valid decimal amount.
    pub fn load_catalogue(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("catalogues").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: CatalogueFixture = serde_norway::from_str(&contents)?;

        self.catalogue = fixture.try_into()?;

        Ok(self)
    }

    /// Load a delivery schedule from a YAML fixture file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a
    /// threshold or charge is not a valid decimal amount.
    pub fn load_delivery(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("delivery").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: DeliveryFixture = serde_norway::from_str(&contents)?;

        self.delivery = fixture.try_into()?;

        Ok(self)
    }

    /// Load an offer pipeline from a YAML fixture file.
    ///
    /// Offers are kept in file order, which is also their application order.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if an offer
    /// configuration is invalid.
    pub fn load_offers(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("offers").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: OffersFixture = serde_norway::from_str(&contents)?;

        self.offers = fixture
            .offers
            .into_iter()
            .map(offers::OfferFixture::try_into_offer)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(self)
    }

    /// Load a complete fixture set (catalogue, delivery schedule and offers
    /// with the same name).
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture
            .load_catalogue(name)?
            .load_delivery(name)?
            .load_offers(name)?;

        Ok(fixture)
    }

    /// Get the loaded catalogue.
    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// Get the loaded delivery schedule.
    pub fn delivery(&self) -> &DeliverySchedule {
        &self.delivery
    }

    /// Get the loaded offers in application order.
    pub fn offers(&self) -> &[Box<dyn Offer>] {
        &self.offers
    }

    /// Create an empty basket over the loaded catalogue, delivery schedule
    /// and offers.
    #[must_use]
    pub fn basket(&self) -> Basket<'_> {
        Basket::new(&self.catalogue, &self.delivery, &self.offers)
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
