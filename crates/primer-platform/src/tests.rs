use std::cell::Cell;
use std::rc::Rc;

use primer_core::*;
use primer_navigation::*;
use primer_ui::*;

use crate::*;

fn greet(_: &Navigator) -> View {
    let name = remember_with_key("name", || signal(String::new()));
    let n = name.clone();
    Column().child((
        TextField("Name", name.get(), move |s| n.set(s)),
        Text(format!("Hello, {}!", name.get())),
        Button("Disabled", || {}).enabled(false),
    ))
}

fn nested(nav: &Navigator) -> View {
    let inner = remember_navigator("inner", INNER, Some(Escape::to(nav)));
    Dispatch(&inner, |n| SelectorScreen(n, "Inner", None))
}

fn leaf(nav: &Navigator) -> View {
    let nav = nav.clone();
    Header("Leaf", move || {
        nav.back();
    })
}

view_registry! {
    static OUTER = [
        ViewEntry::new("greet", "Greet", greet),
        ViewEntry::new("nested", "Nested", nested),
    ];
}

view_registry! {
    static INNER = [ViewEntry::new("leaf", "Leaf", leaf)];
}

fn app() -> Harness {
    Harness::with_width(40, |_| {
        let nav = remember_navigator("root", OUTER, None);
        Dispatch(&nav, |n| SelectorScreen(n, "Demos", None))
    })
}

#[test]
fn test_click_and_type() {
    let mut h = app();
    h.click("Greet").unwrap();
    h.type_into("Name", "Ada").unwrap();
    assert!(h.contains("[1] Name: Ada_"), "{}", h.text());
    assert!(h.contains("Hello, Ada!"));
}

#[test]
fn test_back_walks_out_of_nested_dispatchers() {
    let mut h = app();
    h.click("Nested").unwrap();
    h.click("Leaf").unwrap();
    assert!(h.contains("[1] ← Back  Leaf"), "{}", h.text());

    assert!(h.back());
    assert!(h.contains("Inner"), "{}", h.text());
    assert!(h.back());
    assert!(h.contains("Demos"), "{}", h.text());
    assert!(!h.back());
}

#[test]
fn test_errors_are_reported_not_panicked() {
    let mut h = app();
    assert!(matches!(h.click("Missing"), Err(PlatformError::NotFound { .. })));
    assert!(matches!(h.send("9"), Err(PlatformError::NoSuchRegion(9))));
    assert!(matches!(h.send("1 text"), Err(PlatformError::NotATextField(1))));

    h.click("Greet").unwrap();
    assert!(matches!(h.send("1"), Err(PlatformError::NotAButton(1))));
    assert!(matches!(h.send("2"), Err(PlatformError::Disabled(2))));
    assert!(matches!(h.send("nope"), Err(PlatformError::UnknownCommand(_))));
}

#[test]
fn test_send_drives_the_same_commands() {
    let mut h = app();
    h.send("1").unwrap();
    h.send("1 Grace").unwrap();
    assert!(h.contains("Hello, Grace!"));
    h.send("1 \"\"").unwrap();
    assert!(h.contains("Hello, !"), "{}", h.text());
    h.send("b").unwrap();
    assert!(h.contains("Demos"));
}

#[test]
fn test_shutdown_runs_cleanups() {
    let cleaned = Rc::new(Cell::new(false));
    let flag = cleaned.clone();
    let h = Harness::new(move |_| {
        let flag = flag.clone();
        scoped_effect(move || on_unmount(move || flag.set(true)));
        Text("x")
    });
    assert!(!cleaned.get());
    h.shutdown();
    assert!(cleaned.get());
}

#[test]
fn test_wait_for_recomposes_on_wake() {
    let (waker, wakes) = FrameWaker::channel();
    let ready = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(false));
    let seen = ready.clone();
    let mut h = Harness::new(move |_| {
        if seen.load(std::sync::atomic::Ordering::SeqCst) {
            Text("loaded")
        } else {
            Spinner("loading")
        }
    });
    assert!(h.contains("… loading"));

    let flag = ready.clone();
    let worker = std::thread::spawn(move || {
        std::thread::sleep(std::time::Duration::from_millis(20));
        flag.store(true, std::sync::atomic::Ordering::SeqCst);
        waker.wake();
    });
    assert!(h.wait_for(&wakes, "loaded", std::time::Duration::from_secs(5)));
    worker.join().unwrap();
}
