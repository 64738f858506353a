//! State of one list view: the loaded collection plus its query.

use crate::domain::common::{Entity, EntityId};
use crate::shared::query::{clamp_page, distinct_values, total_pages, CollectionQuery, Page, Searchable};

#[derive(Debug, Clone, PartialEq)]
pub struct ListState<E> {
    pub items: Vec<E>,
    pub loading: bool,
    pub error: Option<String>,
    pub query: CollectionQuery,
}

impl<E: Entity + Searchable> ListState<E> {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            query: CollectionQuery::new(items_per_page),
        }
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// On failure the collection is left empty and the message kept for display
    pub fn finish_load(&mut self, result: Result<Vec<E>, String>) {
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(message) => {
                self.items.clear();
                self.error = Some(message);
            }
        }
        self.loading = false;
    }

    pub fn page(&self) -> Page<E> {
        self.query.page(&self.items)
    }

    pub fn filtered_count(&self) -> usize {
        self.query.count(&self.items)
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered_count(), self.query.items_per_page)
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.query.search_term = term.into();
        self.query.current_page = 1;
    }

    /// An empty value clears the filter
    pub fn set_filter(&mut self, field: &str, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.query.filters.remove(field);
        } else {
            self.query.filters.insert(field.to_string(), value);
        }
        self.query.current_page = 1;
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.query.current_page = clamp_page(page, self.total_pages());
    }

    pub fn find(&self, id: EntityId) -> Option<&E> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Drops the item and pulls the current page back into range
    pub fn remove(&mut self, id: EntityId) {
        self.items.retain(|item| item.id() != id);
        self.query.current_page = clamp_page(self.query.current_page, self.total_pages());
    }

    /// Replaces the item with the same id, or appends it when the id is new
    pub fn upsert(&mut self, entity: E) {
        match self.items.iter_mut().find(|item| item.id() == entity.id()) {
            Some(existing) => *existing = entity,
            None => self.items.push(entity),
        }
    }

    pub fn filter_options(&self, field: &str) -> Vec<String> {
        distinct_values(&self.items, field)
    }
}
