use crate::domain::common::{lenient_id_opt, null_as_empty, Entity, EntityId};
use crate::shared::query::Searchable;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: EntityId,
    pub customer_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub contact_first_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub contact_last_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub address_line1: String,
    #[serde(default)]
    pub address_line2: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub city: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub country: String,
    /// Employee id of the assigned sales representative
    #[serde(default, deserialize_with = "lenient_id_opt")]
    pub sales_rep_employee_number: Option<EntityId>,
    #[serde(default)]
    pub credit_limit: Option<Decimal>,
}

impl Customer {
    pub fn contact_name(&self) -> String {
        format!("{} {}", self.contact_first_name, self.contact_last_name)
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPayload {
    pub customer_name: String,
    pub contact_first_name: String,
    pub contact_last_name: String,
    pub phone: String,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: String,
    pub sales_rep_employee_number: Option<EntityId>,
    pub credit_limit: Option<Decimal>,
}

impl Entity for Customer {
    type Payload = CustomerPayload;

    const BASE_PATH: &'static str = "/customers";

    fn id(&self) -> EntityId {
        self.id
    }

    fn entity_index() -> &'static str {
        "a003"
    }

    fn element_name() -> &'static str {
        "customer"
    }

    fn list_name() -> &'static str {
        "Customers"
    }
}

impl Searchable for Customer {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.customer_name.clone(),
            self.contact_first_name.clone(),
            self.contact_last_name.clone(),
            self.city.clone(),
            self.country.clone(),
            self.id.to_string(),
        ]
    }

    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "country" => Some(self.country.clone()),
            "city" => Some(self.city.clone()),
            _ => None,
        }
    }
}

/// Name shown for an order's customer reference
pub fn customer_name(customers: &[Customer], id: EntityId) -> String {
    customers
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.customer_name.clone())
        .unwrap_or_else(|| "Unknown Customer".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: serde_json::Value) -> Customer {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_sales_rep_as_number_or_string() {
        let base = json!({
            "id": 112, "customerName": "Signal Gift Stores",
            "contactFirstName": "Jean", "contactLastName": "King",
            "phone": "7025551838", "addressLine1": "8489 Strong St.",
            "city": "Las Vegas", "country": "USA",
            "creditLimit": 71800.0
        });

        let mut as_text = base.clone();
        as_text["salesRepEmployeeNumber"] = json!("1166");
        assert_eq!(decode(as_text).sales_rep_employee_number, Some(1166));

        let mut as_number = base.clone();
        as_number["salesRepEmployeeNumber"] = json!(1166);
        assert_eq!(decode(as_number).sales_rep_employee_number, Some(1166));

        let mut blank = base.clone();
        blank["salesRepEmployeeNumber"] = json!("");
        let customer = decode(blank);
        assert_eq!(customer.sales_rep_employee_number, None);
        assert_eq!(customer.credit_limit, Some(Decimal::new(71800, 0)));
        assert_eq!(decode(base).sales_rep_employee_number, None);
    }

    #[test]
    fn test_search_covers_contact_and_id() {
        let customer = decode(json!({
            "id": 103, "customerName": "Atelier graphique",
            "contactFirstName": "Carine", "contactLastName": "Schmitt",
            "phone": "40.32.2555", "addressLine1": "54, rue Royale",
            "city": "Nantes", "country": "France"
        }));
        assert!(customer.matches_search("carine france"));
        assert!(customer.matches_search("103"));
        assert!(!customer.matches_search("royale"));
        assert_eq!(customer.contact_name(), "Carine Schmitt");

        let customers = vec![customer];
        assert_eq!(customer_name(&customers, 103), "Atelier graphique");
        assert_eq!(customer_name(&customers, 999), "Unknown Customer");
    }
}
