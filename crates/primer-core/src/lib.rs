//! # State, Scopes, and Frames
//!
//! Primer rebuilds its view tree on every frame from plain functions. State
//! that must survive between frames lives in keyed slots owned by a `Scope`:
//!
//! - `Signal<T>`: cloneable handle to a mutable value.
//! - `remember_with_key`: slot storage bound to the current scope.
//! - `scoped_effect` / `disposable_effect`: side effects with cleanup.
//! - `with_local` / `local`: values provided to a subtree (context).
//!
//! ## Signals
//!
//! ```rust
//! use primer_core::*;
//!
//! let count = signal(0);
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! ```
//!
//! ## Remembered state
//!
//! ```rust
//! use primer_core::*;
//!
//! let scope = Scope::new();
//! let a = scope.run(|| remember_with_key("count", || signal(0)));
//! a.set(5);
//! let b = scope.run(|| remember_with_key("count", || signal(0)));
//! assert_eq!(b.get(), 5);
//! ```
//!
//! Slots are dropped when their scope is disposed. Navigation gives every
//! shown screen its own scope, so leaving a screen forgets its state and runs
//! its cleanups.

pub mod effects;
pub mod effects_ext;
pub mod error;
pub mod locals;
pub mod prelude;
pub mod runtime;
pub mod scope;
pub mod semantics;
pub mod signal;
pub mod state;
pub mod view;
pub mod waker;

pub use effects::*;
pub use effects_ext::*;
pub use error::*;
pub use locals::*;
pub use prelude::*;
pub use runtime::*;
pub use semantics::*;
pub use signal::*;
pub use state::*;
pub use view::*;
pub use waker::*;
