//! Client-side search, filter and pagination over an in-memory collection.

use std::collections::{BTreeMap, BTreeSet};

/// Exposes the values a list view searches and filters by.
pub trait Searchable {
    /// Values of the whitelisted searchable fields
    fn search_fields(&self) -> Vec<String>;

    /// Value of a select-filter field, by JSON field name
    fn get_field_value(&self, field: &str) -> Option<String>;

    /// Every whitespace-delimited token must occur in at least one field
    fn matches_search(&self, term: &str) -> bool {
        let tokens: Vec<String> = term.split_whitespace().map(str::to_lowercase).collect();
        if tokens.is_empty() {
            return true;
        }
        let fields: Vec<String> = self
            .search_fields()
            .into_iter()
            .map(|f| f.to_lowercase())
            .collect();
        tokens
            .iter()
            .all(|token| fields.iter().any(|field| field.contains(token.as_str())))
    }

    /// Exact equality on every active filter; empty filter values are inactive
    fn matches_filters(&self, filters: &BTreeMap<String, String>) -> bool {
        filters
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .all(|(field, value)| self.get_field_value(field).as_deref() == Some(value.as_str()))
    }
}

/// `ceil(total / per_page)`; zero items give zero pages
pub fn total_pages(total_items: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        return 0;
    }
    total_items.div_ceil(items_per_page)
}

/// Clamps a 1-based page into `1..=max(1, total_pages)`
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// One page of the filtered collection
#[derive(Debug, Clone, PartialEq)]
pub struct Page<E> {
    pub items: Vec<E>,
    pub total_items: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub items_per_page: usize,
}

impl<E> Page<E> {
    /// 1-based index of the first item shown, 0 when empty
    pub fn first_index(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.current_page - 1) * self.items_per_page + 1
        }
    }

    /// 1-based index of the last item shown, 0 when empty
    pub fn last_index(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            self.first_index() + self.items.len() - 1
        }
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Search term, select filters and pagination of one list
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionQuery {
    pub search_term: String,
    pub filters: BTreeMap<String, String>,
    pub current_page: usize,
    pub items_per_page: usize,
}

impl CollectionQuery {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            search_term: String::new(),
            filters: BTreeMap::new(),
            current_page: 1,
            items_per_page: items_per_page.max(1),
        }
    }

    pub fn filter(&self, field: &str) -> &str {
        self.filters.get(field).map(String::as_str).unwrap_or("")
    }

    /// Items passing search and filters, in collection order
    pub fn filtered<'a, E: Searchable>(&self, items: &'a [E]) -> Vec<&'a E> {
        items
            .iter()
            .filter(|item| item.matches_search(&self.search_term))
            .filter(|item| item.matches_filters(&self.filters))
            .collect()
    }

    pub fn count<E: Searchable>(&self, items: &[E]) -> usize {
        self.filtered(items).len()
    }

    /// Slices the filtered set; the requested page is clamped first
    pub fn page<E: Searchable + Clone>(&self, items: &[E]) -> Page<E> {
        let filtered = self.filtered(items);
        let total_items = filtered.len();
        let pages = total_pages(total_items, self.items_per_page);
        let current_page = clamp_page(self.current_page, pages);
        let start = (current_page - 1) * self.items_per_page;

        Page {
            items: filtered
                .into_iter()
                .skip(start)
                .take(self.items_per_page)
                .cloned()
                .collect(),
            total_items,
            total_pages: pages,
            current_page,
            items_per_page: self.items_per_page,
        }
    }
}

/// Sorted distinct non-empty values of `field`, for select-filter options
pub fn distinct_values<E: Searchable>(items: &[E], field: &str) -> Vec<String> {
    items
        .iter()
        .filter_map(|item| item.get_field_value(field))
        .filter(|v| !v.trim().is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: usize,
        name: String,
        city: String,
        country: String,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<String> {
            vec![self.name.clone(), self.city.clone(), self.id.to_string()]
        }

        fn get_field_value(&self, field: &str) -> Option<String> {
            match field {
                "country" => Some(self.country.clone()),
                _ => None,
            }
        }
    }

    fn row(id: usize, name: &str, city: &str, country: &str) -> Row {
        Row {
            id,
            name: name.into(),
            city: city.into(),
            country: country.into(),
        }
    }

    fn numbered(n: usize) -> Vec<Row> {
        (1..=n).map(|i| row(i, &format!("Row {}", i), "Paris", "France")).collect()
    }

    #[test]
    fn test_tokens_and_across_or_within_fields() {
        let items = vec![
            row(1, "Atelier graphique", "Nantes", "France"),
            row(2, "Signal Gift Stores", "Las Vegas", "USA"),
            row(3, "Atelier Paris", "Paris", "France"),
        ];
        let mut query = CollectionQuery::new(10);

        query.search_term = "atelier nantes".into();
        let hits: Vec<usize> = query.filtered(&items).iter().map(|r| r.id).collect();
        assert_eq!(hits, vec![1]);

        query.search_term = "  ATELIER  ".into();
        assert_eq!(query.count(&items), 2);

        query.search_term = "atelier vegas".into();
        assert_eq!(query.count(&items), 0);

        query.search_term = "   ".into();
        assert_eq!(query.count(&items), 3);
    }

    #[test]
    fn test_filter_requires_exact_match() {
        let items = vec![
            row(1, "A", "Nantes", "France"),
            row(2, "B", "Las Vegas", "USA"),
            row(3, "C", "Lyon", "France"),
        ];
        let mut query = CollectionQuery::new(10);
        query.filters.insert("country".into(), "France".into());
        assert_eq!(query.count(&items), 2);

        query.filters.insert("country".into(), "Fra".into());
        assert_eq!(query.count(&items), 0);

        query.filters.insert("country".into(), String::new());
        assert_eq!(query.count(&items), 3);
    }

    #[test]
    fn test_pagination_23_items() {
        let items = numbered(23);
        let mut query = CollectionQuery::new(10);
        query.current_page = 3;

        let page = query.page(&items);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_items, 23);
        let ids: Vec<usize> = page.items.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![21, 22, 23]);
        assert_eq!((page.first_index(), page.last_index()), (21, 23));
        assert!(page.has_previous());
        assert!(!page.has_next());
    }

    #[test]
    fn test_page_is_clamped() {
        let items = numbered(5);
        let mut query = CollectionQuery::new(10);
        query.current_page = 4;
        assert_eq!(query.page(&items).current_page, 1);

        query.current_page = 0;
        assert_eq!(query.page(&items).current_page, 1);

        let empty: Vec<Row> = Vec::new();
        let page = query.page(&empty);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.first_index(), 0);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(clamp_page(3, 0), 1);
        assert_eq!(clamp_page(3, 2), 2);
    }

    #[test]
    fn test_distinct_values_sorted() {
        let items = vec![
            row(1, "A", "x", "USA"),
            row(2, "B", "x", "France"),
            row(3, "C", "x", "USA"),
            row(4, "D", "x", " "),
        ];
        assert_eq!(distinct_values(&items, "country"), vec!["France", "USA"]);
        assert!(distinct_values(&items, "city").is_empty());
    }
}
