//! Registry-driven navigation.
//!
//! A [`ViewRegistry`] is a static list of destinations. A [`Navigator`] is a
//! two-state dispatcher over one registry: `Idle` (show home, usually a
//! [`Selector`]) or `Showing(id)`. Navigators nest: a screen shown by one
//! navigator can own another whose [`Escape`] leads back to the first, so
//! `back()` pops within the inner dispatcher while it shows something and
//! pops out of it once it is idle.

pub mod dispatcher;
pub mod registry;
pub mod selector;

pub use dispatcher::*;
pub use registry::*;
pub use selector::*;

/// Back-dispatcher
///
/// The runner calls `handle()`; every `Dispatch` installs its navigator while
/// composing, so the innermost dispatcher on screen wins.
pub mod back {
    use std::{cell::RefCell, rc::Rc};

    use crate::{BackOutcome, Navigator};

    type Handler = Rc<dyn Fn() -> bool>;

    thread_local! {
        static H: RefCell<Option<Handler>> = const { RefCell::new(None) };
    }

    pub fn set(handler: Option<Handler>) {
        H.with(|h| *h.borrow_mut() = handler);
    }

    pub fn install(nav: &Navigator) {
        let nav = nav.clone();
        set(Some(Rc::new(move || nav.back() != BackOutcome::Ignored)));
    }

    /// Returns whether anything moved.
    pub fn handle() -> bool {
        let handler = H.with(|h| h.borrow().clone());
        match handler {
            Some(handler) => handler(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests;
