use std::cell::RefCell;
use std::rc::Rc;

/// Shared mutable slot the list controller writes its state through.
///
/// The UI implements it over a reactive signal; tests use a `RefCell`.
pub trait StateCell<S> {
    fn with<R>(&self, f: impl FnOnce(&S) -> R) -> R;

    fn update(&self, f: impl FnOnce(&mut S));

    fn get(&self) -> S
    where
        S: Clone,
    {
        self.with(S::clone)
    }
}

impl<S> StateCell<S> for RefCell<S> {
    fn with<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.borrow())
    }

    fn update(&self, f: impl FnOnce(&mut S)) {
        f(&mut self.borrow_mut())
    }
}

impl<S, C: StateCell<S>> StateCell<S> for Rc<C> {
    fn with<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        self.as_ref().with(f)
    }

    fn update(&self, f: impl FnOnce(&mut S)) {
        self.as_ref().update(f)
    }
}
