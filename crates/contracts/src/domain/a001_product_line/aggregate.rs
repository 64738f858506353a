use crate::domain::common::{null_as_empty, Entity, EntityId};
use crate::shared::query::Searchable;
use serde::{Deserialize, Serialize};

/// Product line (category of scale models)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductLine {
    pub id: EntityId,
    pub product_line: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub text_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl ProductLine {
    /// Client-only icon, never persisted
    pub fn icon(&self) -> &'static str {
        product_line_icon(&self.product_line)
    }
}

/// Picks an icon by keyword match on the line name; the first matching rule wins.
pub fn product_line_icon(name: &str) -> &'static str {
    const RULES: &[(&[&str], &str)] = &[
        (&["car", "classic"], "🚗"),
        (&["plane", "aircraft"], "✈️"),
        (&["ship", "boat"], "🚢"),
        (&["train", "locomotive"], "🚂"),
        (&["truck", "bus"], "🚛"),
        (&["motorcycle", "bike"], "🏍️"),
    ];

    let name = name.to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| name.contains(k)))
        .map(|(_, icon)| *icon)
        .unwrap_or("📦")
}

/// Body of create/update requests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductLinePayload {
    pub product_line: String,
    pub text_description: String,
}

impl Entity for ProductLine {
    type Payload = ProductLinePayload;

    const BASE_PATH: &'static str = "/productlines";

    fn id(&self) -> EntityId {
        self.id
    }

    fn entity_index() -> &'static str {
        "a001"
    }

    fn element_name() -> &'static str {
        "product line"
    }

    fn list_name() -> &'static str {
        "Product Lines"
    }
}

impl Searchable for ProductLine {
    fn search_fields(&self) -> Vec<String> {
        vec![self.product_line.clone(), self.text_description.clone()]
    }

    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "productLine" => Some(self.product_line.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_keywords() {
        assert_eq!(product_line_icon("Classic Cars"), "🚗");
        assert_eq!(product_line_icon("Vintage Cars"), "🚗");
        assert_eq!(product_line_icon("Planes"), "✈️");
        assert_eq!(product_line_icon("Ships"), "🚢");
        assert_eq!(product_line_icon("Boats"), "🚢");
        assert_eq!(product_line_icon("Trains"), "🚂");
        assert_eq!(product_line_icon("Trucks and Buses"), "🚛");
        assert_eq!(product_line_icon("Motorcycles"), "🏍️");
        assert_eq!(product_line_icon("Rockets"), "📦");
        assert_eq!(product_line_icon(""), "📦");
    }

    #[test]
    fn test_icon_is_not_serialized() {
        let line: ProductLine = serde_json::from_str(
            r#"{"id": 2, "productLine": "Planes", "textDescription": null, "htmlDescription": null, "image": null}"#,
        )
        .unwrap();
        assert_eq!(line.text_description, "");
        assert_eq!(line.icon(), "✈️");

        let json = serde_json::to_value(&line).unwrap();
        assert!(json.get("icon").is_none());
        assert!(json.get("image").is_none());
    }
}
