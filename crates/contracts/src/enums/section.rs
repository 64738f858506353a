use serde::{Deserialize, Serialize};

/// Top-level sections reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    Products,
    Customers,
    Orders,
    Payments,
    Employees,
    Offices,
}

impl Section {
    /// Stable id used in the URL query
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Products => "products",
            Section::Customers => "customers",
            Section::Orders => "orders",
            Section::Payments => "payments",
            Section::Employees => "employees",
            Section::Offices => "offices",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Products => "Products",
            Section::Customers => "Customers",
            Section::Orders => "Orders",
            Section::Payments => "Payments",
            Section::Employees => "Employees",
            Section::Offices => "Offices",
        }
    }

    /// Icon key understood by the frontend icon set
    pub fn icon(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Products => "products",
            Section::Customers => "customers",
            Section::Orders => "orders",
            Section::Payments => "payments",
            Section::Employees => "employees",
            Section::Offices => "offices",
        }
    }

    pub fn all() -> Vec<Section> {
        vec![
            Section::Home,
            Section::Products,
            Section::Customers,
            Section::Orders,
            Section::Payments,
            Section::Employees,
            Section::Offices,
        ]
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.id() == id)
    }
}
