use primer_core::*;
use primer_navigation::*;
use primer_ui::*;

use crate::DemoPage;
use crate::demos::api::ApiDemo;

view_registry! {
    pub static TOPICS = [ViewEntry::new("api-demo", "API Demo", ApiDemo)];
}

/// A dispatcher inside a tour stop. Back from its home leaves the demo.
pub fn NavigationDemo(nav: &Navigator) -> View {
    let topics = remember_navigator("navigation", TOPICS, Some(Escape::to(nav)));
    Dispatch(&topics, |inner| {
        DemoPage(
            nav,
            (
                Selector::for_navigator(inner).view(
                    "Navigation Concepts",
                    Some("GET, POST, PUT and DELETE against a real API, with loading and error states"),
                ),
                Section("Stack navigation").child(Bullets(&[
                    "Navigate between screens",
                    "Pass parameters",
                    "Handle back navigation",
                ])),
                Section("Tab navigation").child(Bullets(&[
                    "Bottom tabs",
                    "Top tabs",
                    "Tab badges",
                ])),
                Section("Drawer navigation").child(Bullets(&[
                    "Side drawer menu",
                    "Custom drawer content",
                    "Drawer gestures",
                ])),
                Section("Navigation patterns").child(Bullets(&[
                    "Deep linking",
                    "Authentication flow",
                    "Modal presentations",
                ])),
            ),
        )
    })
}
