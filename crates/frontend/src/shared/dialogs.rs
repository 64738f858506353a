//! Browser implementations of the confirmation and notification seams.

use contracts::shared::dialogs::{Confirmation, Notifier};
use leptos::prelude::*;
use thaw::*;

/// `window.confirm`; a missing window counts as "no"
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConfirmation;

impl Confirmation for BrowserConfirmation {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

/// Blocking, dismiss-only error notice shown over the page
#[derive(Clone, Copy)]
pub struct NotificationService {
    current: RwSignal<Option<String>>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
        }
    }

    pub fn show(&self, message: impl Into<String>) {
        self.current.set(Some(message.into()));
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for NotificationService {
    fn error(&self, message: &str) {
        self.show(message);
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

/// Renders the current notice. Mounted once at the application root.
#[component]
pub fn NotificationHost() -> impl IntoView {
    let svc = use_notifications();

    view! {
        {move || svc.current.get().map(|message| {
            view! {
                <div class="modal-overlay notice-overlay" style="z-index: 2000;">
                    <div class="notice notice--error" role="alertdialog">
                        <h3 class="notice__title">"Error"</h3>
                        <p class="notice__message">{message}</p>
                        <Flex justify=FlexJustify::End>
                            <Button appearance=ButtonAppearance::Primary on_click=move |_| svc.dismiss()>
                                "OK"
                            </Button>
                        </Flex>
                    </div>
                </div>
            }
        })}
    }
}
