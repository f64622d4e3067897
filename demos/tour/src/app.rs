use primer_core::*;
use primer_navigation::*;
use primer_net::Backend;
use primer_ui::*;

use crate::demos::{
    AsyncDemo, HooksDemo, LanguageFeaturesDemo, LifecycleDemo, NavigationDemo, PropsVsStateDemo,
    StateManagementDemo,
};

view_registry! {
    pub static DEMOS = [
        ViewEntry::new("hooks", "Hooks", HooksDemo),
        ViewEntry::new("props-state", "Props vs State", PropsVsStateDemo),
        ViewEntry::new("state-management", "State Management", StateManagementDemo),
        ViewEntry::new("lifecycle", "Component Lifecycle", LifecycleDemo),
        ViewEntry::new("async", "Async Data", AsyncDemo),
        ViewEntry::new("navigation", "Navigation", NavigationDemo),
        ViewEntry::new("language-features", "Rust Language Features", LanguageFeaturesDemo),
    ];
}

/// Root for the runner. The backend and the waker are provided to every
/// screen as composition locals.
pub fn Tour(backend: Option<Backend>, waker: FrameWaker) -> impl FnMut(&mut Scheduler) -> View {
    move |_| {
        with_local(waker.clone(), || match backend.clone() {
            Some(backend) => with_local(backend, TourRoot),
            None => TourRoot(),
        })
    }
}

/// The top-level dispatcher over [`DEMOS`].
pub fn TourRoot() -> View {
    let nav = remember_navigator("tour", DEMOS, None);
    Dispatch(&nav, |n| {
        SelectorScreen(
            n,
            "Primer Tour",
            Some("Pick a demo. Each one starts fresh when you open it."),
        )
    })
}

/// Frame shared by demo screens: a header titled after the entry `nav` is
/// showing, with a back button, above `content`.
pub fn DemoPage(nav: &Navigator, content: impl IntoChildren) -> View {
    let title = nav
        .current()
        .and_then(|id| nav.registry().find(&id))
        .map(|entry| entry.title)
        .unwrap_or_default();
    let back = nav.clone();
    Column().child((
        Header(title, move || {
            back.back();
        }),
        content,
    ))
}

/// Screens that talk to the API. Without a backend the page explains
/// what is missing instead.
pub fn WithBackend(nav: &Navigator, body: impl FnOnce(Backend) -> View) -> View {
    match local::<Backend>() {
        Ok(backend) => body(backend),
        Err(e) => {
            log::warn!("{}: {e}", nav.name());
            DemoPage(nav, ErrorText(e.to_string()))
        }
    }
}
