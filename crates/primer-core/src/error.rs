#![allow(non_snake_case)]
use crate::View;
use std::cell::Cell;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Once;

thread_local! {
    static BOUNDARY_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Panics caught by a boundary go to the log instead of stderr, so they do
/// not scribble over the painted frame. Others reach the previous hook.
fn install_boundary_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            if BOUNDARY_DEPTH.with(Cell::get) > 0 {
                log::debug!("panic inside an error boundary: {info}");
            } else {
                previous(info);
            }
        }));
    });
}

struct Guarded;

impl Guarded {
    fn enter() -> Self {
        BOUNDARY_DEPTH.with(|d| d.set(d.get() + 1));
        Guarded
    }
}

impl Drop for Guarded {
    fn drop(&mut self) {
        BOUNDARY_DEPTH.with(|d| d.set(d.get().saturating_sub(1)));
    }
}

#[cfg(test)]
pub(crate) fn boundary_depth() -> usize {
    BOUNDARY_DEPTH.with(Cell::get)
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("no `{type_name}` was provided to this part of the tree")]
    MissingLocal { type_name: &'static str },
}

pub struct ErrorInfo {
    pub message: String,
    pub component: String,
}

/// Composes `content`, or `fallback` if composing it panics.
pub fn ErrorBoundary(
    component: impl Into<String>,
    fallback: impl FnOnce(ErrorInfo) -> View,
    content: impl FnOnce() -> View,
) -> View {
    install_boundary_hook();
    let caught = {
        let _guard = Guarded::enter();
        catch_unwind(AssertUnwindSafe(content))
    };
    match caught {
        Ok(view) => view,
        Err(err) => {
            let message = if let Some(s) = err.downcast_ref::<String>() {
                s.clone()
            } else if let Some(s) = err.downcast_ref::<&str>() {
                s.to_string()
            } else {
                "Unknown panic".to_string()
            };
            let component = component.into();
            log::error!("{component} failed to compose: {message}");

            fallback(ErrorInfo { message, component })
        }
    }
}
