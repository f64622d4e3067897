use std::cell::RefCell;
use std::rc::Rc;

use primer_core::*;
use primer_ui::{Button, Column, Text, ViewExt, paint};

use crate::*;

fn plain_a(_: &Navigator) -> View {
    Text("screen A")
}

fn plain_b(_: &Navigator) -> View {
    Text("screen B")
}

fn plain_x(_: &Navigator) -> View {
    Text("screen X")
}

fn counter(_: &Navigator) -> View {
    let count = remember_with_key("count", || signal(0));
    let c = count.clone();
    Column().child((
        Text(format!("count={}", count.get())),
        Button("inc", move || c.update(|v| *v += 1)),
    ))
}

fn outer_with_nested(nav: &Navigator) -> View {
    let inner = remember_navigator("inner", SUB, Some(Escape::to(nav)));
    Dispatch(&inner, |n| SelectorScreen(n, "Inner", None))
}

fn broken(_: &Navigator) -> View {
    panic!("no data")
}

const AB_ENTRIES: &[ViewEntry] = &[
    ViewEntry::new("A", "Alpha", plain_a),
    ViewEntry::new("B", "Beta", plain_b),
];
static AB: ViewRegistry = ViewRegistry::new(AB_ENTRIES);

const OUTER_ENTRIES: &[ViewEntry] = &[
    ViewEntry::new("outer1", "Outer one", outer_with_nested),
    ViewEntry::new("counter", "Counter", counter),
    ViewEntry::new("broken", "Broken", broken),
];
static OUTER: ViewRegistry = ViewRegistry::new(OUTER_ENTRIES);

const SUB_ENTRIES: &[ViewEntry] = &[ViewEntry::new("X", "Ex", plain_x)];
static SUB: ViewRegistry = ViewRegistry::new(SUB_ENTRIES);

fn frame(sched: &mut Scheduler, nav: &Navigator) -> Frame {
    back::set(None);
    let nav = nav.clone();
    sched.compose(
        move |_| Dispatch(&nav, |n| SelectorScreen(n, "Demos", None)),
        paint,
    )
}

fn click(frame: &Frame, label: &str) {
    let region = frame
        .find(Role::Button, label)
        .unwrap_or_else(|| panic!("no button '{label}' in:\n{}", frame.text()));
    (region.on_click.as_ref().expect("button without handler"))();
}

#[test]
fn navigate_from_idle_shows_every_registered_id() {
    for id in OUTER.ids() {
        let nav = Navigator::new("root", OUTER, None);
        assert!(nav.navigate(id));
        assert_eq!(nav.state(), NavigationState::Showing(id.to_string()));
    }
}

#[test]
fn back_always_returns_top_level_to_idle() {
    let nav = Navigator::new("root", AB, None);
    assert_eq!(nav.back(), BackOutcome::Ignored);
    assert!(nav.is_idle());

    for id in AB.ids().chain(["nope"]) {
        nav.navigate(id);
        assert_eq!(nav.back(), BackOutcome::Popped);
        assert_eq!(nav.state(), NavigationState::Idle);
    }
}

#[test]
fn scenario_navigate_b_then_back() {
    let nav = Navigator::new("root", AB, None);
    assert_eq!(nav.state(), NavigationState::Idle);
    nav.navigate("B");
    assert_eq!(nav.state(), NavigationState::Showing("B".into()));
    nav.back();
    assert_eq!(nav.state(), NavigationState::Idle);
}

#[test]
fn navigate_while_showing_is_rejected() {
    let nav = Navigator::new("root", AB, None);
    assert!(nav.navigate("A"));
    assert!(!nav.navigate("B"));
    assert_eq!(nav.current().as_deref(), Some("A"));
}

#[test]
fn unknown_id_resolves_to_fallback() {
    let nav = Navigator::new("root", AB, None);
    nav.navigate("unknown");
    assert!(matches!(nav.resolve(), Resolution::Unresolved(ref id) if id == "unknown"));

    let mut sched = Scheduler::new(40);
    let f = frame(&mut sched, &nav);
    assert!(f.text().contains("Please select a demo."), "{}", f.text());

    click(&f, "← Back");
    assert!(nav.is_idle());
}

#[test]
fn registries_have_unique_ids() {
    assert!(has_unique_ids(AB.list()));
    assert!(has_unique_ids(OUTER.list()));

    const DUPES: &[ViewEntry] = &[
        ViewEntry::new("A", "Alpha", plain_a),
        ViewEntry::new("A", "Alpha again", plain_b),
    ];
    assert!(!has_unique_ids(DUPES));
}

#[test]
fn nested_idle_back_delegates_to_parent() {
    let outer = Navigator::new("outer", OUTER, None);
    outer.navigate("outer1");
    let nested = Navigator::new("nested", SUB, Some(Escape::to(&outer)));

    assert_eq!(nested.back(), BackOutcome::Escaped);
    assert_eq!(outer.state(), NavigationState::Idle);
}

#[test]
fn nested_showing_back_pops_within() {
    let outer = Navigator::new("outer", OUTER, None);
    outer.navigate("outer1");
    let nested = Navigator::new("nested", SUB, Some(Escape::to(&outer)));
    nested.navigate("X");

    assert_eq!(nested.back(), BackOutcome::Popped);
    assert!(nested.is_idle());
    assert_eq!(outer.current().as_deref(), Some("outer1"));
}

#[test]
fn escape_to_dropped_parent_is_harmless() {
    let nested = {
        let outer = Navigator::new("outer", OUTER, None);
        Navigator::new("nested", SUB, Some(Escape::to(&outer)))
    };
    assert_eq!(nested.back(), BackOutcome::Escaped);
}

#[test]
fn composed_nested_dispatcher_round_trip() {
    let root = Navigator::new("root", OUTER, None);
    let mut sched = Scheduler::new(60);

    let f = frame(&mut sched, &root);
    click(&f, "Outer one");
    let f = frame(&mut sched, &root);
    assert!(f.text().contains("Inner"), "{}", f.text());

    click(&f, "Ex");
    let f = frame(&mut sched, &root);
    assert!(f.text().contains("screen X"));

    // innermost dispatcher pops first, then the idle one escapes outward
    assert!(back::handle());
    let f = frame(&mut sched, &root);
    assert!(f.text().contains("Inner"));
    assert_eq!(root.current().as_deref(), Some("outer1"));

    assert!(back::handle());
    let f = frame(&mut sched, &root);
    assert!(root.is_idle());
    assert!(f.text().contains("Demos"));

    // top level idle: nothing left to pop
    assert!(!back::handle());
}

#[test]
fn leaving_an_entry_forgets_its_state() {
    let root = Navigator::new("root", OUTER, None);
    let mut sched = Scheduler::new(60);

    click(&frame(&mut sched, &root), "Counter");
    click(&frame(&mut sched, &root), "inc");
    click(&frame(&mut sched, &root), "inc");
    assert!(frame(&mut sched, &root).text().contains("count=2"));

    root.back();
    root.navigate("counter");
    assert!(frame(&mut sched, &root).text().contains("count=0"));
}

#[test]
fn nested_state_is_dropped_with_its_parent_entry() {
    let root = Navigator::new("root", OUTER, None);
    let mut sched = Scheduler::new(60);

    click(&frame(&mut sched, &root), "Outer one");
    click(&frame(&mut sched, &root), "Ex");
    assert!(frame(&mut sched, &root).text().contains("screen X"));

    root.back();
    root.navigate("outer1");
    let f = frame(&mut sched, &root);
    assert!(!f.text().contains("screen X"));
    assert!(f.text().contains("Inner"));
}

#[test]
fn panicking_entry_renders_error_screen() {
    let root = Navigator::new("root", OUTER, None);
    root.navigate("broken");
    let mut sched = Scheduler::new(60);
    let f = frame(&mut sched, &root);
    assert!(f.text().contains("failed to render: no data"), "{}", f.text());
}

#[test]
fn selector_only_forwards_registered_ids() {
    let seen = Rc::new(RefCell::new(Vec::<String>::new()));
    let sel = Selector::new(AB, {
        let seen = seen.clone();
        move |id| seen.borrow_mut().push(id.to_string())
    });

    assert!(sel.select("B"));
    assert!(!sel.select("unknown"));
    assert_eq!(*seen.borrow(), vec!["B".to_string()]);
}

#[test]
fn selector_lists_titles_in_order() {
    let nav = Navigator::new("root", AB, None);
    let f = paint(&SelectorScreen(&nav, "Demos", Some("Pick one")), 40);
    assert_eq!(
        f.lines,
        vec!["Demos", "=====", "› Pick one", "[1] Alpha", "[2] Beta"]
    );
}
