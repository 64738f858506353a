//! Orchestration of a list view: loading, deleting and saving records.
//!
//! The controller never touches the DOM. It writes through a [`StateCell`]
//! and talks to the user through [`Confirmation`] and [`Notifier`], so the same
//! flow runs in the browser and in native tests.

use crate::domain::common::{Entity, EntityId};
use crate::shared::api::{EntityClient, HttpTransport};
use crate::shared::dialogs::{Confirmation, Notifier};
use crate::shared::form::{EntityForm, FormMode, FormState};
use crate::shared::list_state::ListState;
use crate::shared::query::Searchable;
use crate::shared::state_cell::StateCell;
use std::marker::PhantomData;

#[derive(Clone)]
pub struct ListController<E, T, C> {
    client: EntityClient<E, T>,
    state: C,
    _entity: PhantomData<fn() -> E>,
}

impl<E, T, C> ListController<E, T, C>
where
    E: Entity + Searchable,
    T: HttpTransport + Clone,
    C: StateCell<ListState<E>>,
{
    pub fn new(client: EntityClient<E, T>, state: C) -> Self {
        Self {
            client,
            state,
            _entity: PhantomData,
        }
    }

    pub fn state(&self) -> &C {
        &self.state
    }

    pub fn client(&self) -> &EntityClient<E, T> {
        &self.client
    }

    /// Fetches the whole collection. A failure is kept as the page error.
    pub async fn load(&self) {
        self.state.update(ListState::begin_load);

        let result = self.client.get_all().await.map_err(|e| {
            log::error!("Failed to load {}: {}", E::list_name(), e);
            e.to_string()
        });
        if let Ok(items) = &result {
            log::debug!("loaded {} {}", items.len(), E::list_name());
        }

        self.state.update(|s| s.finish_load(result));
    }

    /// Issues exactly one new `get_all`
    pub async fn retry(&self) {
        self.load().await;
    }

    /// Asks for confirmation, deletes on the backend, then drops the item locally.
    ///
    /// Returns `true` when the item was removed.
    pub async fn delete(&self, id: EntityId, confirm: &dyn Confirmation, notifier: &dyn Notifier) -> bool {
        let question = format!("Are you sure you want to delete this {}?", E::element_name());
        if !confirm.confirm(&question) {
            return false;
        }

        match self.client.delete(id).await {
            Ok(()) => {
                self.state.update(|s| s.remove(id));
                true
            }
            Err(e) => {
                log::error!("Error deleting {} {}: {}", E::element_name(), id, e);
                notifier.error(&format!("Error deleting {}: {}", E::element_name(), e));
                false
            }
        }
    }

    /// Creates or updates and splices the backend's answer into the collection.
    ///
    /// `on_done` runs with the saved record only on success. `None` means the
    /// save failed and the user has been notified.
    pub async fn save(
        &self,
        mode: FormMode,
        payload: &E::Payload,
        notifier: &dyn Notifier,
        on_done: impl FnOnce(&E),
    ) -> Option<E> {
        let result = match mode {
            FormMode::Add => self.client.create(payload).await,
            FormMode::Edit(id) => self.client.update(id, payload).await,
        };

        match result {
            Ok(saved) => {
                self.state.update(|s| s.upsert(saved.clone()));
                on_done(&saved);
                Some(saved)
            }
            Err(e) => {
                let message = format!("Error {} {}: {}", mode.action_verb(), E::element_name(), e);
                log::error!("{}", message);
                notifier.error(&message);
                None
            }
        }
    }

    /// Validates the form and saves it. Invalid forms never reach the network.
    pub async fn submit<F, FC>(
        &self,
        form: &FC,
        notifier: &dyn Notifier,
        on_done: impl FnOnce(&E),
    ) -> Option<E>
    where
        F: EntityForm<Entity = E>,
        FC: StateCell<FormState<F>>,
    {
        let mut payload = None;
        form.update(|f| payload = f.submit());
        let payload = payload?;
        let mode = form.with(|f| f.mode);
        self.save(mode, &payload, notifier, on_done).await
    }
}

/// Loads a reference collection for selectors and name columns.
///
/// Failures are logged and yield an empty list.
pub async fn load_lookup<L, T>(client: &EntityClient<L, T>) -> Vec<L>
where
    L: Entity,
    T: HttpTransport + Clone,
{
    match client.get_all().await {
        Ok(items) => items,
        Err(e) => {
            log::warn!("Failed to load {} lookup: {}", L::list_name(), e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product_line::aggregate::ProductLine;
    use crate::domain::a001_product_line::form::ProductLineForm;
    use crate::domain::a004_order::aggregate::Order;
    use crate::domain::a004_order::form::OrderForm;
    use crate::domain::a005_employee::aggregate::Employee;
    use crate::shared::api::testing::MockTransport;
    use crate::shared::api::{ApiClient, Method};
    use crate::shared::dialogs::testing::Recorder;
    use crate::shared::modal_phase::{ModalEvent, ModalPhase};
    use chrono::NaiveDate;
    use serde_json::json;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    const BASE: &str = "http://localhost:8080/api";

    type Controller<E> = ListController<E, MockTransport, Rc<RefCell<ListState<E>>>>;

    fn controller<E: Entity + Searchable>(mock: &MockTransport) -> Controller<E> {
        let api = ApiClient::new(mock.clone(), BASE);
        ListController::new(api.entity::<E>(), Rc::new(RefCell::new(ListState::new(10))))
    }

    fn lines_json(n: i64) -> serde_json::Value {
        serde_json::Value::Array(
            (1..=n)
                .map(|i| json!({"id": i, "productLine": format!("Line {}", i), "textDescription": "d"}))
                .collect(),
        )
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    fn open_modal() -> Cell<ModalPhase> {
        Cell::new(ModalPhase::Closed.next(ModalEvent::Open).next(ModalEvent::TransitionEnd))
    }

    fn close(modal: &Cell<ModalPhase>) -> impl FnOnce(&ProductLine) + '_ {
        move |_| modal.set(modal.get().next(ModalEvent::Close))
    }

    fn boats_form() -> RefCell<FormState<ProductLineForm>> {
        let form = RefCell::new(FormState::<ProductLineForm>::for_add(today()));
        form.update(|f| {
            f.update_field("productLine", |d| d.product_line = "Boats".into());
            f.update_field("textDescription", |d| d.text_description = "Sail".into());
        });
        form
    }

    #[tokio::test]
    async fn test_create_appends_backend_record_and_closes_modal() {
        let mock = MockTransport::new();
        let lines = controller::<ProductLine>(&mock);
        mock.respond_json(200, lines_json(2));
        lines.load().await;

        let modal = open_modal();
        let form = boats_form();

        mock.respond_json(200, json!({"id": 8, "productLine": "Boats", "textDescription": "Sail"}));
        let notifier = Recorder::default();
        let saved = lines.submit(&form, &notifier, close(&modal)).await;

        assert_eq!(saved.map(|l| l.id), Some(8));
        assert_eq!(modal.get(), ModalPhase::Closing);
        let state = lines.state().get();
        assert_eq!(state.items.len(), 3);
        assert_eq!(state.items[2].id, 8);
        assert_eq!(mock.count(Method::Post), 1);
        assert!(notifier.errors.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_completion_runs_after_list_is_updated() {
        let mock = MockTransport::new();
        let lines = controller::<ProductLine>(&mock);
        let form = boats_form();

        mock.respond_json(200, json!({"id": 8, "productLine": "Boats", "textDescription": "Sail"}));
        let seen = Cell::new(None);
        lines
            .submit(&form, &Recorder::default(), |line| {
                seen.set(Some((line.id, lines.state().with(|s| s.find(line.id).is_some()))));
            })
            .await;

        assert_eq!(seen.get(), Some((8, true)));
    }

    #[tokio::test]
    async fn test_failed_create_keeps_modal_open() {
        let mock = MockTransport::new();
        let lines = controller::<ProductLine>(&mock);
        let modal = open_modal();
        let form = boats_form();

        mock.respond_text(500, "duplicate");
        let saved = lines.submit(&form, &Recorder::default(), close(&modal)).await;

        assert!(saved.is_none());
        assert_eq!(modal.get(), ModalPhase::Open);
    }

    #[tokio::test]
    async fn test_invalid_form_makes_no_request() {
        let mock = MockTransport::new();
        let orders = controller::<Order>(&mock);
        let form = RefCell::new(FormState::<OrderForm>::for_add(today()));
        form.update(|f| {
            f.update_field("requireddate", |d| d.requireddate = "2024-01-01".into());
            f.update_field("customernumber", |d| d.customernumber = "103".into());
        });

        let modal = Cell::new(ModalPhase::Open);
        let saved = orders
            .submit(&form, &Recorder::default(), |_| modal.set(ModalPhase::Closing))
            .await;

        assert!(saved.is_none());
        assert_eq!(modal.get(), ModalPhase::Open);
        assert!(mock.requests().is_empty());
        assert_eq!(
            form.borrow().error("requireddate").as_deref(),
            Some("Required date must be after order date")
        );
    }

    #[tokio::test]
    async fn test_update_replaces_in_place() {
        let mock = MockTransport::new();
        let lines = controller::<ProductLine>(&mock);
        mock.respond_json(200, lines_json(3));
        lines.load().await;

        let existing = lines.state().with(|s| s.items[1].clone());
        let form = RefCell::new(FormState::<ProductLineForm>::for_edit(&existing));
        form.update(|f| f.update_field("textDescription", |d| d.text_description = "new".into()));

        mock.respond_json(200, json!({"id": 2, "productLine": "Line 2", "textDescription": "new"}));
        lines.submit(&form, &Recorder::default(), |_| {}).await;

        let requests = mock.requests();
        assert_eq!(requests[1].method, Method::Put);
        assert_eq!(requests[1].url, format!("{}/productlines/2", BASE));
        let state = lines.state().get();
        assert_eq!(state.items.len(), 3);
        assert_eq!(state.items[1].text_description, "new");
    }

    #[tokio::test]
    async fn test_failed_save_notifies_and_keeps_form() {
        let mock = MockTransport::new();
        let lines = controller::<ProductLine>(&mock);
        let form = RefCell::new(FormState::<ProductLineForm>::for_add(today()));
        form.update(|f| {
            f.data.product_line = "Boats".into();
            f.data.text_description = "Sail".into();
        });

        mock.respond_text(500, "duplicate");
        let notifier = Recorder::default();
        assert!(lines.submit(&form, &notifier, |_| {}).await.is_none());

        assert_eq!(
            notifier.errors.borrow().as_slice(),
            ["Error creating product line: Server Error: 500 - duplicate"]
        );
        assert_eq!(form.borrow().data.product_line, "Boats");
        assert!(lines.state().with(|s| s.items.is_empty()));
    }

    #[tokio::test]
    async fn test_delete_confirmed_issues_one_request() {
        let mock = MockTransport::new();
        let lines = controller::<ProductLine>(&mock);
        mock.respond_json(200, lines_json(21));
        lines.load().await;
        lines.state().update(|s| s.go_to_page(3));

        mock.respond_empty(204);
        let dialogs = Recorder::answering(true);
        assert!(lines.delete(21, &dialogs, &dialogs).await);

        assert_eq!(mock.count(Method::Delete), 1);
        assert_eq!(mock.requests()[1].url, format!("{}/productlines/21", BASE));
        assert_eq!(
            dialogs.questions.borrow().as_slice(),
            ["Are you sure you want to delete this product line?"]
        );
        let state = lines.state().get();
        assert!(state.find(21).is_none());
        assert_eq!(state.query.current_page, 2);
        assert_eq!(mock.count(Method::Get), 1);
    }

    #[tokio::test]
    async fn test_delete_declined_makes_no_request() {
        let mock = MockTransport::new();
        let lines = controller::<ProductLine>(&mock);
        mock.respond_json(200, lines_json(2));
        lines.load().await;

        let dialogs = Recorder::answering(false);
        assert!(!lines.delete(1, &dialogs, &dialogs).await);

        assert_eq!(mock.count(Method::Delete), 0);
        assert_eq!(lines.state().with(|s| s.items.len()), 2);
    }

    #[tokio::test]
    async fn test_delete_failure_leaves_state() {
        let mock = MockTransport::new();
        let lines = controller::<ProductLine>(&mock);
        mock.respond_json(200, lines_json(2));
        lines.load().await;

        mock.fail_network();
        let dialogs = Recorder::answering(true);
        assert!(!lines.delete(1, &dialogs, &dialogs).await);

        assert_eq!(lines.state().with(|s| s.items.len()), 2);
        let errors = dialogs.errors.borrow();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("Error deleting product line: Network Error"));
    }

    #[tokio::test]
    async fn test_fetch_failure_then_retry() {
        let mock = MockTransport::new();
        let lines = controller::<ProductLine>(&mock);

        mock.fail_network();
        lines.load().await;
        let state = lines.state().get();
        assert!(state.items.is_empty());
        assert!(!state.loading);
        assert_eq!(
            state.error.as_deref(),
            Some("Network Error: Unable to connect to server at http://localhost:8080/api. Make sure the backend is running.")
        );

        mock.respond_json(200, lines_json(3));
        lines.retry().await;
        assert_eq!(mock.count(Method::Get), 2);
        let state = lines.state().get();
        assert_eq!(state.items.len(), 3);
        assert_eq!(state.error, None);
    }

    #[tokio::test]
    async fn test_lookup_failure_is_non_fatal() {
        let mock = MockTransport::new();
        let api = ApiClient::new(mock.clone(), BASE);
        mock.respond_text(503, "down");

        let employees = load_lookup(&api.entity::<Employee>()).await;
        assert!(employees.is_empty());
        assert_eq!(mock.requests()[0].url, format!("{}/employees", BASE));
    }
}
