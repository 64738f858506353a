//! Shell navigation: which section is mounted and whether the sidebar is expanded.

use crate::enums::section::Section;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellState {
    pub active: Section,
    pub sidebar_open: bool,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            active: Section::Home,
            sidebar_open: true,
        }
    }
}

impl ShellState {
    /// Starts on the section named in the URL query, Home when absent or unknown
    pub fn restore(query: &SectionQuery) -> Self {
        Self {
            active: query.section(),
            ..Self::default()
        }
    }

    /// Returns `true` when the mounted view changes
    pub fn select(&mut self, section: Section) -> bool {
        if self.active == section {
            return false;
        }
        self.active = section;
        true
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn query(&self) -> SectionQuery {
        SectionQuery {
            section: Some(self.active.id().to_string()),
        }
    }
}

/// `?section=` part of the page URL
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
}

impl SectionQuery {
    pub fn section(&self) -> Section {
        self.section
            .as_deref()
            .and_then(Section::from_id)
            .unwrap_or_default()
    }
}

/// Sections without a dedicated view
pub fn is_placeholder(section: Section) -> bool {
    matches!(section, Section::Payments | Section::Offices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_and_toggle() {
        let mut shell = ShellState::default();
        assert!(shell.sidebar_open);
        assert!(!shell.select(Section::Home));
        assert!(shell.select(Section::Orders));
        assert_eq!(shell.active, Section::Orders);

        shell.toggle_sidebar();
        assert!(!shell.sidebar_open);
        shell.toggle_sidebar();
        assert!(shell.sidebar_open);
    }

    #[test]
    fn test_restore_from_query() {
        let query = SectionQuery {
            section: Some("customers".into()),
        };
        assert_eq!(ShellState::restore(&query).active, Section::Customers);

        let unknown = SectionQuery {
            section: Some("nope".into()),
        };
        assert_eq!(ShellState::restore(&unknown).active, Section::Home);
        assert_eq!(ShellState::restore(&SectionQuery::default()).active, Section::Home);

        let mut shell = ShellState::default();
        shell.select(Section::Offices);
        assert_eq!(shell.query().section.as_deref(), Some("offices"));
        assert!(is_placeholder(shell.active));
        assert!(!is_placeholder(Section::Employees));
    }
}
