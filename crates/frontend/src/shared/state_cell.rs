use contracts::shared::state_cell::StateCell;
use leptos::prelude::*;

/// Lets the shared controllers write into a reactive signal.
///
/// Reads are untracked: the controller never subscribes, the views do.
pub struct SignalCell<S: Send + Sync + 'static>(pub RwSignal<S>);

impl<S: Send + Sync + 'static> Clone for SignalCell<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Send + Sync + 'static> Copy for SignalCell<S> {}

impl<S: Send + Sync + 'static> SignalCell<S> {
    pub fn new(value: S) -> Self {
        Self(RwSignal::new(value))
    }

    pub fn signal(&self) -> RwSignal<S> {
        self.0
    }
}

impl<S: Send + Sync + 'static> StateCell<S> for SignalCell<S> {
    fn with<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        self.0.with_untracked(f)
    }

    fn update(&self, f: impl FnOnce(&mut S)) {
        self.0.update(f)
    }
}
