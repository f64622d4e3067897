#![allow(non_snake_case)]
use std::rc::Rc;

use primer_core::View;
use primer_ui::{Button, Column, Note, Title, ViewExt};

use crate::{Navigator, ViewRegistry};

/// Lists a registry and reports the chosen id upward. Owns no state.
#[derive(Clone)]
pub struct Selector {
    registry: ViewRegistry,
    on_navigate: Rc<dyn Fn(&str)>,
}

impl Selector {
    pub fn new(registry: ViewRegistry, on_navigate: impl Fn(&str) + 'static) -> Self {
        Self {
            registry,
            on_navigate: Rc::new(on_navigate),
        }
    }

    /// Selector whose choices drive `nav`.
    pub fn for_navigator(nav: &Navigator) -> Self {
        let target = nav.clone();
        Self::new(nav.registry(), move |id| {
            target.navigate(id);
        })
    }

    /// Forwards `id` only if the registry knows it.
    pub fn select(&self, id: &str) -> bool {
        if !self.registry.contains(id) {
            log::debug!("selector: ignoring unknown id '{id}'");
            return false;
        }
        (self.on_navigate)(id);
        true
    }

    pub fn view(&self, title: &str, subtitle: Option<&str>) -> View {
        let rows: Vec<View> = self
            .registry
            .list()
            .iter()
            .map(|entry| {
                let me = self.clone();
                let id = entry.id;
                Button(entry.title, move || {
                    me.select(id);
                })
            })
            .collect();

        Column().child((Title(title), subtitle.map(|s| Note(s)), rows))
    }
}

/// Selector screen for `nav`'s own registry.
pub fn SelectorScreen(nav: &Navigator, title: &str, subtitle: Option<&str>) -> View {
    Selector::for_navigator(nav).view(title, subtitle)
}
