use crate::domain::common::{null_as_empty, Entity, EntityId};
use crate::shared::query::Searchable;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Scale model in the catalogue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: EntityId,
    pub product_code: String,
    pub product_name: String,
    /// Name of the owning product line
    pub product_line: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub product_vendor: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub product_scale: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub product_description: String,
    #[serde(default)]
    pub quantity_in_stock: i32,
    #[serde(default)]
    pub buy_price: Decimal,
    #[serde(default)]
    pub msrp: Decimal,
}

impl Product {
    /// CSS modifier of the stock badge: above 80 high, above 50 medium, else low
    pub fn stock_class(&self) -> &'static str {
        match self.quantity_in_stock {
            q if q > 80 => "stock--high",
            q if q > 50 => "stock--medium",
            _ => "stock--low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub product_code: String,
    pub product_name: String,
    pub product_line: String,
    pub product_vendor: String,
    pub product_scale: String,
    pub product_description: String,
    pub quantity_in_stock: i32,
    pub buy_price: Decimal,
    pub msrp: Decimal,
}

impl Entity for Product {
    type Payload = ProductPayload;

    const BASE_PATH: &'static str = "/products";

    fn id(&self) -> EntityId {
        self.id
    }

    fn entity_index() -> &'static str {
        "a002"
    }

    fn element_name() -> &'static str {
        "product"
    }

    fn list_name() -> &'static str {
        "Products"
    }
}

impl Searchable for Product {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.product_code.clone(),
            self.product_name.clone(),
            self.product_line.clone(),
            self.product_vendor.clone(),
        ]
    }

    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "productLine" => Some(self.product_line.clone()),
            "productVendor" => Some(self.product_vendor.clone()),
            "productScale" => Some(self.product_scale.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_backend_row() {
        let product: Product = serde_json::from_value(json!({
            "id": 1,
            "productCode": "S10_1678",
            "productName": "1969 Harley Davidson Ultimate Chopper",
            "productLine": "Motorcycles",
            "productVendor": "Min Lin Diecast",
            "productScale": "1:10",
            "productDescription": null,
            "quantityInStock": 7933,
            "buyPrice": 48.81,
            "msrp": 95.70
        }))
        .unwrap();

        assert_eq!(product.quantity_in_stock, 7933);
        assert_eq!(product.buy_price, Decimal::new(4881, 2));
        assert_eq!(product.msrp, Decimal::new(957, 1));
        assert_eq!(product.product_description, "");
        assert!(product.matches_search("harley min"));
        assert!(!product.matches_search("harley boats"));
        assert_eq!(product.stock_class(), "stock--high");
    }

    #[test]
    fn test_stock_thresholds() {
        let mut product: Product = serde_json::from_value(json!({
            "id": 2, "productCode": "S", "productName": "N", "productLine": "Ships"
        }))
        .unwrap();
        assert_eq!(product.quantity_in_stock, 0);
        assert_eq!(product.stock_class(), "stock--low");
        product.quantity_in_stock = 80;
        assert_eq!(product.stock_class(), "stock--medium");
        product.quantity_in_stock = 50;
        assert_eq!(product.stock_class(), "stock--low");
    }
}
