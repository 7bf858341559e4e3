//! Products

use rust_decimal::Decimal;

/// A catalogue entry.
///
/// Products are immutable once constructed; baskets hold shared references
/// into the catalogue and never mutate them.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Product code, unique within a catalogue
    pub code: String,

    /// Product name
    pub name: String,

    /// Unit price
    pub price: Decimal,
}

impl Product {
    /// Create a new product.
    pub fn new(code: impl Into<String>, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            price,
        }
    }
}

/// The fixed, ordered collection of purchasable products known to a basket.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    products: Vec<Product>,
}

impl Catalogue {
    /// Create a new catalogue with the given products.
    #[must_use]
    pub fn new(products: impl Into<Vec<Product>>) -> Self {
        Catalogue {
            products: products.into(),
        }
    }

    /// Look up a product by code.
    ///
    /// Codes are expected to be unique; if the catalogue does contain
    /// duplicates, the first entry wins.
    #[must_use]
    pub fn lookup(&self, code: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.code == code)
    }

    /// Iterate over the products in catalogue order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Get the number of products in the catalogue.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalogue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pence(minor: i64) -> Decimal {
        Decimal::new(minor, 2)
    }

    fn test_catalogue() -> Catalogue {
        Catalogue::new([
            Product::new("B01", "Blue Widget", pence(795)),
            Product::new("G01", "Green Widget", pence(2495)),
            Product::new("R01", "Red Widget", pence(3295)),
        ])
    }

    #[test]
    fn lookup_finds_product_by_code() {
        let catalogue = test_catalogue();

        let product = catalogue.lookup("G01");

        assert_eq!(product.map(|p| p.name.as_str()), Some("Green Widget"));
        assert_eq!(product.map(|p| p.price), Some(pence(2495)));
    }

    #[test]
    fn lookup_unknown_code_returns_none() {
        let catalogue = test_catalogue();

        assert!(catalogue.lookup("Z99").is_none());
    }

    #[test]
    fn lookup_duplicate_codes_returns_first_entry() {
        let catalogue = Catalogue::new([
            Product::new("B01", "Blue Widget", pence(795)),
            Product::new("B01", "Blue Widget (old price)", pence(895)),
        ]);

        let product = catalogue.lookup("B01");

        assert_eq!(product.map(|p| p.price), Some(pence(795)));
    }

    #[test]
    fn iter_returns_products_in_catalogue_order() {
        let catalogue = test_catalogue();

        let codes: Vec<&str> = catalogue.iter().map(|p| p.code.as_str()).collect();

        assert_eq!(codes, vec!["B01", "G01", "R01"]);
    }

    #[test]
    fn len_and_is_empty() {
        let catalogue = test_catalogue();
        let empty = Catalogue::default();

        assert_eq!(catalogue.len(), 3);
        assert!(!catalogue.is_empty());
        assert_eq!(empty.len(), 0);
        assert!(empty.is_empty());
    }
}
