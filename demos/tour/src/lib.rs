#![allow(non_snake_case)]
//! A console tour of UI state concepts: local state, derived values,
//! effects with cleanup, context, reducers, lifecycle, async data and
//! nested navigation.
//!
//! Every demo is an entry of [`DEMOS`]; [`Tour`] builds the root the console
//! runner composes each frame.

pub mod app;
pub mod demos;
pub mod fetch;

pub use app::{DEMOS, DemoPage, Tour, TourRoot, WithBackend};
