use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::scope::{Scope, current_scope};
use crate::{Callback, View, semantics::Role};

thread_local! {
    pub static COMPOSER: RefCell<Composer> = RefCell::new(Composer::default());
}

/// Slot storage used when composing outside of any scope (tests, tools).
#[derive(Default)]
pub struct Composer {
    pub keyed_slots: HashMap<String, Box<dyn Any>>,
}

/// Key-based remember. Slots belong to the current scope when there is one.
pub fn remember_with_key<T: 'static>(key: impl Into<String>, init: impl FnOnce() -> T) -> Rc<T> {
    if let Some(scope) = current_scope() {
        return scope.remember(key, init);
    }

    let key = key.into();
    let existing = COMPOSER.with(|c| {
        let c = c.borrow();
        match c.keyed_slots.get(&key) {
            Some(b) => match b.downcast_ref::<Rc<T>>() {
                Some(rc) => Some(rc.clone()),
                None => {
                    log::warn!(
                        "remember_with_key: key '{}' reused with a different type; replacing.",
                        key
                    );
                    None
                }
            },
            None => None,
        }
    });
    if let Some(rc) = existing {
        return rc;
    }

    let rc: Rc<T> = Rc::new(init());
    COMPOSER.with(|c| {
        c.borrow_mut()
            .keyed_slots
            .insert(key, Box::new(rc.clone()))
    });
    rc
}

/// Output of composition for a tick: painted lines plus the
/// interactive regions, numbered in paint order.
#[derive(Clone, Default)]
pub struct Frame {
    pub lines: Vec<String>,
    pub hit_regions: Vec<HitRegion>,
}

impl Frame {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Region by its 1-based number.
    pub fn region(&self, number: usize) -> Option<&HitRegion> {
        self.hit_regions.iter().find(|h| h.number == number)
    }

    /// First enabled region whose label matches exactly.
    pub fn find(&self, role: Role, label: &str) -> Option<&HitRegion> {
        self.hit_regions
            .iter()
            .find(|h| h.role == role && h.label == label)
    }
}

impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("lines", &self.lines)
            .field("hit_regions", &self.hit_regions.len())
            .finish()
    }
}

#[derive(Clone)]
pub struct HitRegion {
    pub number: usize,
    pub role: Role,
    pub label: String,
    pub enabled: bool,
    pub on_click: Option<Callback>,
    pub on_text_change: Option<Rc<dyn Fn(String)>>,
}

impl std::fmt::Debug for HitRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HitRegion")
            .field("number", &self.number)
            .field("role", &self.role)
            .field("label", &self.label)
            .field("enabled", &self.enabled)
            .finish()
    }
}

/// Drives composition. Owns the root scope so root-level state persists
/// from frame to frame.
pub struct Scheduler {
    root: Scope,
    frames: u64,
    pub width: usize,
}

impl Scheduler {
    pub fn new(width: usize) -> Self {
        Self {
            root: Scope::new(),
            frames: 0,
            width,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn compose<F>(&mut self, mut build_root: F, paint: impl Fn(&View, usize) -> Frame) -> Frame
    where
        F: FnMut(&mut Scheduler) -> View,
    {
        self.frames += 1;
        let root = self.root.clone();
        let view = root.run(|| build_root(self));
        paint(&view, self.width)
    }

    /// Tears down all remembered state, running every pending cleanup.
    pub fn shutdown(self) {
        self.root.dispose();
    }
}
