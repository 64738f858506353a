use crate::domain::common::{lenient_id, Entity, EntityId};
use crate::enums::order_status::OrderStatus;
use crate::shared::form::DATE_FORMAT;
use crate::shared::query::Searchable;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Customer order. Field names follow the backend's lowercase columns,
/// the camelCase spellings are accepted on input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: EntityId,
    #[serde(alias = "orderDate", deserialize_with = "iso_date")]
    pub orderdate: NaiveDate,
    #[serde(alias = "requiredDate", deserialize_with = "iso_date")]
    pub requireddate: NaiveDate,
    #[serde(default, alias = "shippedDate", deserialize_with = "iso_date_opt")]
    pub shippeddate: Option<NaiveDate>,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(alias = "customerNumber", deserialize_with = "lenient_id")]
    pub customernumber: EntityId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPayload {
    pub orderdate: NaiveDate,
    pub requireddate: NaiveDate,
    pub shippeddate: Option<NaiveDate>,
    pub status: OrderStatus,
    pub comments: Option<String>,
    pub customernumber: EntityId,
}

fn parse_iso<E: serde::de::Error>(raw: &str) -> Result<NaiveDate, E> {
    // timestamps ("2003-01-06T00:00:00") keep only their date part
    let date = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map_err(|e| E::custom(format!("invalid date '{}': {}", raw, e)))
}

fn iso_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    parse_iso(&String::deserialize(deserializer)?)
}

fn iso_date_opt<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => parse_iso(raw.trim()).map(Some),
        _ => Ok(None),
    }
}

impl Entity for Order {
    type Payload = OrderPayload;

    const BASE_PATH: &'static str = "/orders";

    fn id(&self) -> EntityId {
        self.id
    }

    fn entity_index() -> &'static str {
        "a004"
    }

    fn element_name() -> &'static str {
        "order"
    }

    fn list_name() -> &'static str {
        "Orders"
    }
}

impl Searchable for Order {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.status.label().to_string(),
            self.comments.clone().unwrap_or_default(),
            self.customernumber.to_string(),
        ]
    }

    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => Some(self.status.label().to_string()),
            "customernumber" => Some(self.customernumber.to_string()),
            _ => None,
        }
    }
}
