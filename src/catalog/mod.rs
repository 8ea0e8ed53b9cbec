//! Static product catalog served by the responder.
//!
//! The fixture is immutable demo data; nothing in the system mutates it at
//! runtime. It exists only as a response payload.

use serde::{Deserialize, Serialize};

/// A single catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: u32,
}

fn product(id: u32, name: &str, category: &str, price: f64, stock: u32) -> Product {
    Product {
        id,
        name: name.to_string(),
        category: category.to_string(),
        price,
        stock,
    }
}

/// The full demo catalog (12 items).
pub fn fixture() -> Vec<Product> {
    vec![
        product(1, "Wireless Headphones", "Electronics", 89.99, 45),
        product(2, "Smart Watch", "Electronics", 199.99, 23),
        product(3, "Laptop Stand", "Accessories", 34.99, 67),
        product(4, "USB-C Hub", "Accessories", 49.99, 102),
        product(5, "Mechanical Keyboard", "Electronics", 129.99, 18),
        product(6, "Ergonomic Mouse", "Accessories", 39.99, 88),
        product(7, "Webcam HD", "Electronics", 79.99, 34),
        product(8, "Desk Lamp", "Furniture", 29.99, 56),
        product(9, "Monitor 27\"", "Electronics", 299.99, 12),
        product(10, "Cable Organizer", "Accessories", 14.99, 150),
        product(11, "Portable SSD 1TB", "Storage", 119.99, 41),
        product(12, "Bluetooth Speaker", "Audio", 59.99, 72),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_size() {
        assert_eq!(fixture().len(), 12);
    }

    #[test]
    fn test_fixture_ids_unique() {
        let items = fixture();
        let mut ids: Vec<u32> = items.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn test_product_json_shape() {
        let json = serde_json::to_value(&fixture()[0]).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Wireless Headphones");
        assert_eq!(json["category"], "Electronics");
        assert_eq!(json["price"], 89.99);
        assert_eq!(json["stock"], 45);
    }
}
