//! Pieces every entity list is built from: the controller handle, the
//! load/error banner, pagination and delete wiring.

use crate::shared::api_utils::{api_client, page_size, GlooTransport};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::dialogs::{BrowserConfirmation, NotificationService};
use crate::shared::icons::icon;
use crate::shared::state_cell::SignalCell;
use contracts::domain::common::{Entity, EntityId};
use contracts::shared::list_controller::{load_lookup, ListController};
use contracts::shared::list_state::ListState;
use contracts::shared::query::{Page, Searchable};
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

pub type Controller<E> = ListController<E, GlooTransport, SignalCell<ListState<E>>>;

/// Creates the controller of one list view and starts the initial fetch.
///
/// Call from component setup; every mount fetches again.
pub fn use_list_controller<E: Entity + Searchable>() -> Controller<E> {
    let api = api_client();
    let controller = ListController::new(
        api.entity::<E>(),
        SignalCell::new(ListState::new(page_size())),
    );
    reload(&controller);
    controller
}

pub fn reload<E: Entity + Searchable>(controller: &Controller<E>) {
    let controller = controller.clone();
    spawn_local(async move { controller.load().await });
}

/// Reference collection of another entity (selector options, name columns).
///
/// Stays empty when the fetch fails; the failure is only logged.
pub fn use_lookup<L: Entity>() -> RwSignal<Vec<L>> {
    let api = api_client();
    let items = RwSignal::new(Vec::new());
    spawn_local(async move {
        items.set(load_lookup(&api.entity::<L>()).await);
    });
    items
}

/// Reactive current page of the list
pub fn page_signal<E: Entity + Searchable>(controller: &Controller<E>) -> Memo<Page<E>>
where
    E: PartialEq,
{
    let state = controller.state().signal();
    Memo::new(move |_| state.with(|s| s.page()))
}

/// Confirms, deletes and reports failures through the notification overlay
pub fn delete_item<E: Entity + Searchable>(
    controller: &Controller<E>,
    notifications: NotificationService,
    id: EntityId,
) {
    let controller = controller.clone();
    spawn_local(async move {
        controller
            .delete(id, &BrowserConfirmation, &notifications)
            .await;
    });
}

/// Spinner while loading, error banner with a retry button after a failed fetch
#[component]
pub fn LoadStatus<E: Entity + Searchable>(controller: Controller<E>) -> impl IntoView {
    let state = controller.state().signal();
    let loading = move || state.with(|s| s.loading);
    let error = move || state.with(|s| s.error.clone());

    view! {
        <Show when=loading>
            <div class="list-loading">
                <Spinner label=format!("Loading {}...", E::list_name().to_lowercase()) />
            </div>
        </Show>
        {move || error().map(|message| {
            let controller = controller.clone();
            view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{format!("Error loading {}: {}", E::list_name().to_lowercase(), message)}</span>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| {
                            let controller = controller.clone();
                            spawn_local(async move { controller.retry().await });
                        }
                    >
                        {icon("refresh")}
                        " Retry"
                    </Button>
                </div>
            }
        })}
    }
}

/// Pagination bound to the list's query
#[component]
pub fn ListPagination<E: Entity + Searchable + PartialEq>(controller: Controller<E>) -> impl IntoView {
    let page = page_signal(&controller);
    let state = controller.state().signal();

    view! {
        <PaginationControls
            current_page=Signal::derive(move || page.with(|p| p.current_page))
            total_pages=Signal::derive(move || page.with(|p| p.total_pages))
            total_count=Signal::derive(move || page.with(|p| p.total_items))
            range=Signal::derive(move || page.with(|p| (p.first_index(), p.last_index())))
            on_page_change=Callback::new(move |p| state.update(|s| s.go_to_page(p)))
        />
    }
}

/// Edit and delete buttons of one table row
#[component]
pub fn RowActions(
    id: EntityId,
    on_edit: Callback<EntityId>,
    on_delete: Callback<EntityId>,
) -> impl IntoView {
    view! {
        <td class="table__cell table__cell--actions">
            <button class="button button--ghost" title="Edit" on:click=move |_| on_edit.run(id)>
                {icon("edit")}
            </button>
            <button class="button button--ghost button--danger" title="Delete" on:click=move |_| on_delete.run(id)>
                {icon("delete")}
            </button>
        </td>
    }
}

/// Row shown when the filtered page is empty
pub fn empty_message(search_term: &str, element_plural: &str) -> String {
    if search_term.trim().is_empty() {
        format!("No {} found", element_plural)
    } else {
        format!("No {} found matching \"{}\"", element_plural, search_term.trim())
    }
}
