use serde::{Deserialize, Serialize};

/// Order lifecycle status as stored by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    #[serde(rename = "In Process")]
    InProcess,
    Shipped,
    Resolved,
    Cancelled,
    #[serde(rename = "On Hold")]
    OnHold,
    Disputed,
}

impl OrderStatus {
    /// Label exactly as the backend stores it
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::InProcess => "In Process",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Resolved => "Resolved",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::OnHold => "On Hold",
            OrderStatus::Disputed => "Disputed",
        }
    }

    /// CSS modifier for the status badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            OrderStatus::Shipped => "status--shipped",
            OrderStatus::InProcess => "status--in-process",
            OrderStatus::Cancelled => "status--cancelled",
            OrderStatus::Resolved => "status--resolved",
            OrderStatus::OnHold => "status--on-hold",
            OrderStatus::Disputed => "status--disputed",
        }
    }

    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::InProcess,
            OrderStatus::Shipped,
            OrderStatus::Resolved,
            OrderStatus::Cancelled,
            OrderStatus::OnHold,
            OrderStatus::Disputed,
        ]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::all().into_iter().find(|s| s.label() == label)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format_matches_labels() {
        for status in OrderStatus::all() {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.label()));
        }
    }

    #[test]
    fn test_from_label() {
        assert_eq!(OrderStatus::from_label("On Hold"), Some(OrderStatus::OnHold));
        assert_eq!(OrderStatus::from_label(" Shipped "), Some(OrderStatus::Shipped));
        assert_eq!(OrderStatus::from_label("shipped"), None);
        assert_eq!(OrderStatus::from_label(""), None);
    }
}
