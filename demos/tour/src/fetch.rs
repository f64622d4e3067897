use std::cell::RefCell;
use std::rc::Rc;

use primer_core::remember_with_key;
use primer_net::{NetError, Request};

/// Request state remembered by a screen: the last data, the last error and
/// the call in flight. The screen calls [`Fetch::poll`] while composing;
/// the backend wakes the runner when a call ends.
pub struct Fetch<T> {
    data: RefCell<Option<T>>,
    error: RefCell<Option<String>>,
    pending: RefCell<Option<Request<T>>>,
}

pub fn remember_fetch<T: Clone + 'static>(key: &str) -> Rc<Fetch<T>> {
    remember_with_key(format!("fetch:{key}"), Fetch::new)
}

impl<T: Clone + 'static> Fetch<T> {
    pub fn new() -> Self {
        Self {
            data: RefCell::new(None),
            error: RefCell::new(None),
            pending: RefCell::new(None),
        }
    }

    pub fn start(&self, request: Request<T>) {
        *self.error.borrow_mut() = None;
        *self.pending.borrow_mut() = Some(request);
    }

    /// Picks up a finished call. Returns it so screens can react once.
    pub fn poll(&self) -> Option<Result<T, NetError>> {
        let result = self.pending.borrow().as_ref().and_then(Request::try_take)?;
        *self.pending.borrow_mut() = None;
        match &result {
            Ok(data) => *self.data.borrow_mut() = Some(data.clone()),
            Err(e) => *self.error.borrow_mut() = Some(format!("Error: {e}")),
        }
        Some(result)
    }

    pub fn loading(&self) -> bool {
        self.pending
            .borrow()
            .as_ref()
            .is_some_and(Request::is_pending)
    }

    pub fn data(&self) -> Option<T> {
        self.data.borrow().clone()
    }

    pub fn set_data(&self, data: Option<T>) {
        *self.data.borrow_mut() = data;
    }

    pub fn error(&self) -> Option<String> {
        self.error.borrow().clone()
    }

    pub fn set_error(&self, message: impl Into<String>) {
        *self.error.borrow_mut() = Some(message.into());
    }

    pub fn clear_error(&self) {
        *self.error.borrow_mut() = None;
    }

    /// Forgets data and error. A call in flight is dropped.
    pub fn clear(&self) {
        *self.data.borrow_mut() = None;
        *self.error.borrow_mut() = None;
        *self.pending.borrow_mut() = None;
    }
}

impl<T: Clone + 'static> Default for Fetch<T> {
    fn default() -> Self {
        Self::new()
    }
}
