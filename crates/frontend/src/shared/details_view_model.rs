//! View model shared by the add/edit forms of every entity.

use crate::shared::components::list_page::Controller;
use crate::shared::dialogs::{use_notifications, NotificationService};
use crate::shared::modal_stack::{use_modal_stack, ModalHandle, ModalStackService};
use crate::shared::state_cell::SignalCell;
use contracts::domain::common::Entity;
use contracts::shared::form::{EntityForm, FormState};
use contracts::shared::query::Searchable;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

pub struct DetailsViewModel<F>
where
    F: EntityForm,
    F::Entity: Searchable,
{
    pub form: SignalCell<FormState<F>>,
    pub saving: RwSignal<bool>,
    controller: Controller<F::Entity>,
    notifications: NotificationService,
    handle: ModalHandle,
}

impl<F> Clone for DetailsViewModel<F>
where
    F: EntityForm,
    F::Entity: Searchable,
{
    fn clone(&self) -> Self {
        Self {
            form: self.form,
            saving: self.saving,
            controller: self.controller.clone(),
            notifications: self.notifications,
            handle: self.handle,
        }
    }
}

impl<F> DetailsViewModel<F>
where
    F: EntityForm,
    F::Entity: Searchable,
{
    pub fn new(
        state: FormState<F>,
        controller: Controller<F::Entity>,
        notifications: NotificationService,
        handle: ModalHandle,
    ) -> Self {
        Self {
            form: SignalCell::new(state),
            saving: RwSignal::new(false),
            controller,
            notifications,
            handle,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.form.signal().with_untracked(|f| f.mode.is_edit())
    }

    /// "Add New Order" / "Edit Order"
    pub fn title(&self) -> String {
        let element = title_case(<F::Entity as Entity>::element_name());
        if self.is_edit() {
            format!("Edit {}", element)
        } else {
            format!("Add New {}", element)
        }
    }

    pub fn submit_label(&self) -> String {
        if self.is_edit() {
            "Save Changes".to_string()
        } else {
            format!("Create {}", title_case(<F::Entity as Entity>::element_name()))
        }
    }

    /// Reactive text of one field
    pub fn value(&self, read: fn(&F) -> String) -> Signal<String> {
        let form = self.form.signal();
        Signal::derive(move || form.with(|s| read(&s.data)))
    }

    pub fn error(&self, field: &'static str) -> Signal<Option<String>> {
        let form = self.form.signal();
        Signal::derive(move || form.with(|s| s.error(field)))
    }

    /// Writes one field and clears its error
    pub fn setter(&self, field: &'static str, write: fn(&mut F, String)) -> Callback<String> {
        let form = self.form.signal();
        Callback::new(move |value: String| {
            form.update(|s| s.update_field(field, |data| write(data, value)));
        })
    }

    /// Validates, saves and closes the modal on success
    pub fn save_command(&self) {
        if self.saving.get_untracked() {
            return;
        }
        self.saving.set(true);

        let vm = self.clone();
        spawn_local(async move {
            let handle = vm.handle;
            vm.controller
                .submit(&vm.form, &vm.notifications, move |entity| {
                    log::info!("saved {} {}", <F::Entity as Entity>::element_name(), entity.id());
                    handle.close();
                })
                .await;
            vm.saving.set(false);
        });
    }

    /// Discards edits
    pub fn cancel_command(&self) {
        self.handle.close();
    }
}

/// Opens add/edit forms on the modal stack.
///
/// Create it during component setup, where the services are in context;
/// `open` then runs from event handlers.
#[derive(Clone, Copy)]
pub struct DetailsLauncher {
    modal_stack: ModalStackService,
    notifications: NotificationService,
}

impl DetailsLauncher {
    pub fn new() -> Self {
        Self {
            modal_stack: use_modal_stack(),
            notifications: use_notifications(),
        }
    }

    pub fn open<F, V>(&self, state: FormState<F>, controller: &Controller<F::Entity>, render: V)
    where
        F: EntityForm,
        F::Entity: Searchable,
        V: Fn(DetailsViewModel<F>) -> AnyView + Send + Sync + 'static,
    {
        let notifications = self.notifications;
        let controller = controller.clone();
        let modal_class = format!("{}-details-modal", <F::Entity as Entity>::entity_index());

        self.modal_stack.push(Some(modal_class), move |handle| {
            let vm = DetailsViewModel::new(state.clone(), controller.clone(), notifications, handle);
            render(vm)
        });
    }
}

fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::title_case;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("product line"), "Product Line");
        assert_eq!(title_case("order"), "Order");
    }
}
