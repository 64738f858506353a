use contracts::enums::section::Section;
use contracts::shared::navigation::{SectionQuery, ShellState};
use leptos::prelude::Effect;
use leptos::prelude::*;
use web_sys::window;

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub shell: RwSignal<ShellState>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            shell: RwSignal::new(ShellState::default()),
        }
    }

    pub fn active(&self) -> Section {
        self.shell.with(|s| s.active)
    }

    pub fn sidebar_open(&self) -> bool {
        self.shell.with(|s| s.sidebar_open)
    }

    pub fn select_section(&self, section: Section) {
        let mut changed = false;
        self.shell.update(|s| changed = s.select(section));
        if changed {
            log::debug!("section: {}", section.id());
        }
    }

    pub fn toggle_sidebar(&self) {
        self.shell.update(ShellState::toggle_sidebar);
    }

    /// Restores the active section from `?section=` and keeps the URL in sync
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let query: SectionQuery =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        self.shell.set(ShellState::restore(&query));

        let this = *self;
        Effect::new(move |_| {
            let query = this.shell.with(ShellState::query);
            let query_string = serde_qs::to_string(&query).unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
