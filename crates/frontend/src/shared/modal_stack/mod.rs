use crate::shared::modal_frame::ModalFrame;
use contracts::shared::modal_phase::{ModalEvent, ModalPhase};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

/// Duration of the enter and leave transitions, matching the stylesheet
pub const TRANSITION_MS: u32 = 200;

#[derive(Clone)]
struct ModalEntry {
    id: u64,
    builder: Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>,
    modal_class: Option<String>,
}

/// Lets a modal close itself from its own event handlers.
#[derive(Clone, Copy)]
pub struct ModalHandle {
    id: u64,
    svc: ModalStackService,
}

impl ModalHandle {
    pub fn close(&self) {
        self.svc.close(self.id);
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

/// Stack of open modals.
///
/// Entries stay mounted while their phase is anything but `Closed`; the phase
/// map is kept apart from the entries so a phase change does not rebuild the
/// modal's content.
#[derive(Clone, Copy)]
pub struct ModalStackService {
    stack: RwSignal<Vec<ModalEntry>>,
    phases: RwSignal<HashMap<u64, ModalPhase>>,
    next_id: RwSignal<u64>,
}

impl ModalStackService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
            phases: RwSignal::new(HashMap::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn is_open(&self) -> bool {
        !self.stack.with(Vec::is_empty)
    }

    pub fn phase(&self, id: u64) -> ModalPhase {
        self.phases
            .with(|p| p.get(&id).copied())
            .unwrap_or(ModalPhase::Closed)
    }

    /// Applies one event and returns the new phase. Reaching `Closed` unmounts.
    fn dispatch(&self, id: u64, event: ModalEvent) -> ModalPhase {
        let next = self.phase_untracked(id).next(event);
        if next.is_mounted() {
            self.phases.update(|p| {
                p.insert(id, next);
            });
        } else {
            self.phases.update(|p| {
                p.remove(&id);
            });
            self.stack.update(|s| s.retain(|e| e.id != id));
        }
        next
    }

    fn phase_untracked(&self, id: u64) -> ModalPhase {
        self.phases
            .with_untracked(|p| p.get(&id).copied())
            .unwrap_or(ModalPhase::Closed)
    }

    fn finish_transition(&self, id: u64) {
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(TRANSITION_MS).await;
            svc.dispatch(id, ModalEvent::TransitionEnd);
        });
    }

    /// Push a new modal onto the stack.
    ///
    /// `builder` receives a `ModalHandle` so the modal can close itself.
    pub fn push<F>(&self, modal_class: Option<String>, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        let handle = ModalHandle { id, svc: *self };
        let builder = Arc::new(builder) as Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>;

        self.stack.update(|s| {
            s.push(ModalEntry {
                id,
                builder,
                modal_class,
            });
        });
        self.dispatch(id, ModalEvent::Open);
        self.finish_transition(id);

        handle
    }

    /// Starts the leave transition; the entry is unmounted when it ends
    pub fn close(&self, id: u64) {
        if self.dispatch(id, ModalEvent::Close) == ModalPhase::Closing {
            self.finish_transition(id);
        }
    }

    /// Closes the topmost modal that is not already leaving
    pub fn close_top(&self) {
        let target = self.stack.with_untracked(|s| {
            self.phases
                .with_untracked(|p| topmost_closable(s.iter().map(|e| e.id), p))
        });
        if let Some(id) = target {
            self.close(id);
        }
    }
}

fn topmost_closable<I>(ids: I, phases: &HashMap<u64, ModalPhase>) -> Option<u64>
where
    I: DoubleEndedIterator<Item = u64>,
{
    ids.rev().find(|id| {
        matches!(
            phases.get(id),
            Some(ModalPhase::Opening) | Some(ModalPhase::Open)
        )
    })
}

impl Default for ModalStackService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_modal_stack() -> ModalStackService {
    use_context::<ModalStackService>()
        .expect("ModalStackService not provided in context (provide it in app root)")
}

/// Renders the modal stack at the application root.
///
/// Must be mounted exactly once.
#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_modal_stack();

    // Escape closes only the topmost modal
    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" {
                    svc.close_top();
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            // ModalHost lives as long as the app
            closure.forget();
        }
    });

    view! {
        <Show when=move || svc.is_open()>
            <For
                each=move || {
                    svc.stack
                        .get()
                        .into_iter()
                        .enumerate()
                        .collect::<Vec<(usize, ModalEntry)>>()
                }
                key=|(_, entry)| entry.id
                children=move |(idx, entry)| {
                    let id = entry.id;
                    let handle = ModalHandle { id, svc };
                    let content = (entry.builder)(handle);

                    view! {
                        <ModalFrame
                            z_index=1000 + idx as i32
                            on_close=Callback::new(move |_| svc.close(id))
                            phase=Signal::derive(move || svc.phase(id))
                            modal_class=entry.modal_class.clone().unwrap_or_default()
                        >
                            {content}
                        </ModalFrame>
                    }
                }
            />
        </Show>
    }
}
