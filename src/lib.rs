//! Hamper
//!
//! Hamper is a small, deterministic basket pricing engine: a product catalogue,
//! a tiered delivery-charge schedule and an ordered pipeline of composable
//! discount offers.

pub mod basket;
pub mod delivery;
pub mod fixtures;
pub mod offers;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod utils;
