#![allow(non_snake_case)]
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use primer_core::*;
use primer_ui::{Column, ErrorText, Header, Note, ViewExt};

use crate::{ViewEntry, ViewRegistry, back};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationState {
    /// Nothing selected; the dispatcher shows its home (the selector at the
    /// top level).
    Idle,
    Showing(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackOutcome {
    /// Was showing an entry, now idle.
    Popped,
    /// Was idle; the escape callback ran.
    Escaped,
    /// Was idle with nowhere to escape to.
    Ignored,
}

#[derive(Clone, Debug)]
pub enum Resolution {
    Home,
    Entry(&'static ViewEntry),
    Unresolved(String),
}

/// Where `back()` goes from `Idle`.
#[derive(Clone)]
pub struct Escape(Rc<dyn Fn()>);

impl Escape {
    pub fn new(f: impl Fn() + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Escape into `parent`'s back. Holds the parent weakly: the parent's
    /// entry scope owns this navigator.
    pub fn to(parent: &Navigator) -> Self {
        let parent = Rc::downgrade(&parent.inner);
        Self(Rc::new(move || {
            if let Some(inner) = Weak::upgrade(&parent) {
                Navigator { inner }.back();
            }
        }))
    }

    fn call(&self) {
        (self.0)()
    }
}

struct Inner {
    name: String,
    registry: ViewRegistry,
    escape: Option<Escape>,
    state: RefCell<DispatchState>,
}

struct DispatchState {
    current: NavigationState,
    // Present exactly while `current` is `Showing`.
    entry_scope: Option<Scope>,
}

/// Handle to one dispatcher: its registry, its navigation state and the
/// scope of the entry it is showing.
#[derive(Clone)]
pub struct Navigator {
    inner: Rc<Inner>,
}

impl Navigator {
    pub fn new(name: impl Into<String>, registry: ViewRegistry, escape: Option<Escape>) -> Self {
        Self {
            inner: Rc::new(Inner {
                name: name.into(),
                registry,
                escape,
                state: RefCell::new(DispatchState {
                    current: NavigationState::Idle,
                    entry_scope: None,
                }),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn registry(&self) -> ViewRegistry {
        self.inner.registry
    }

    pub fn state(&self) -> NavigationState {
        self.inner.state.borrow().current.clone()
    }

    pub fn current(&self) -> Option<String> {
        match self.state() {
            NavigationState::Idle => None,
            NavigationState::Showing(id) => Some(id),
        }
    }

    pub fn is_idle(&self) -> bool {
        self.inner.state.borrow().current == NavigationState::Idle
    }

    /// `Idle -> Showing(id)`. Rejected while already showing something.
    /// Unregistered ids are accepted and resolve to the fallback view.
    pub fn navigate(&self, id: &str) -> bool {
        let mut st = self.inner.state.borrow_mut();
        if let NavigationState::Showing(cur) = &st.current {
            log::debug!(
                "{}: navigate('{id}') ignored while showing '{cur}'",
                self.inner.name
            );
            return false;
        }
        if !self.inner.registry.contains(id) {
            log::warn!("{}: '{id}' is not registered; showing fallback", self.inner.name);
        }
        st.current = NavigationState::Showing(id.to_string());
        st.entry_scope = Some(Scope::new());
        log::debug!("{}: idle -> {id}", self.inner.name);
        true
    }

    /// Pops within this dispatcher, or escapes out of it when idle.
    pub fn back(&self) -> BackOutcome {
        let popped = {
            let mut st = self.inner.state.borrow_mut();
            match std::mem::replace(&mut st.current, NavigationState::Idle) {
                NavigationState::Showing(id) => Some((id, st.entry_scope.take())),
                NavigationState::Idle => None,
            }
        };

        match popped {
            Some((id, scope)) => {
                log::debug!("{}: {id} -> idle", self.inner.name);
                // Cleanups may touch other navigators; no borrow is held here.
                if let Some(scope) = scope {
                    scope.dispose();
                }
                BackOutcome::Popped
            }
            None => match &self.inner.escape {
                Some(escape) => {
                    log::debug!("{}: idle, escaping to parent", self.inner.name);
                    escape.call();
                    BackOutcome::Escaped
                }
                None => BackOutcome::Ignored,
            },
        }
    }

    pub fn resolve(&self) -> Resolution {
        match &self.inner.state.borrow().current {
            NavigationState::Idle => Resolution::Home,
            NavigationState::Showing(id) => match self.inner.registry.find(id) {
                Some(entry) => Resolution::Entry(entry),
                None => Resolution::Unresolved(id.clone()),
            },
        }
    }

    fn entry_scope(&self) -> Scope {
        let mut st = self.inner.state.borrow_mut();
        st.entry_scope.get_or_insert_with(Scope::new).clone()
    }
}

impl std::fmt::Debug for Navigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigator")
            .field("name", &self.inner.name)
            .field("state", &self.state())
            .field("entries", &self.inner.registry.len())
            .finish()
    }
}

/// Keeps a navigator in the current scope under `key`. `escape` is only used
/// the first time.
pub fn remember_navigator(key: &str, registry: ViewRegistry, escape: Option<Escape>) -> Navigator {
    remember_with_key(format!("nav:{key}"), || Navigator::new(key, registry, escape))
        .as_ref()
        .clone()
}

/// Composes whatever `nav` currently shows: `home` when idle, the resolved
/// entry (in its own scope) when showing, the fallback otherwise.
pub fn Dispatch(nav: &Navigator, home: impl FnOnce(&Navigator) -> View) -> View {
    back::install(nav);

    match nav.resolve() {
        Resolution::Home => home(nav),
        Resolution::Entry(entry) => {
            let scope = nav.entry_scope();
            scope.run(|| {
                ErrorBoundary(
                    entry.id,
                    |info| ErrorScreen(nav, entry.title, &info),
                    || (entry.render)(nav),
                )
            })
        }
        Resolution::Unresolved(id) => Fallback(nav, &id),
    }
}

/// Placeholder for an id no registry entry matches.
pub fn Fallback(nav: &Navigator, id: &str) -> View {
    let nav = nav.clone();
    Column().child((
        Header(id, move || {
            nav.back();
        }),
        Note("Please select a demo."),
    ))
}

fn ErrorScreen(nav: &Navigator, title: &str, info: &ErrorInfo) -> View {
    let nav = nav.clone();
    Column().child((
        Header(title, move || {
            nav.back();
        }),
        ErrorText(format!("This screen failed to render: {}", info.message)),
    ))
}
