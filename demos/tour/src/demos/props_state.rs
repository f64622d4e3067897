use chrono::Local;
use primer_core::*;
use primer_navigation::Navigator;
use primer_ui::*;

use crate::DemoPage;

pub fn PropsVsStateDemo(nav: &Navigator) -> View {
    let parent = remember_with_key("parent", || signal("Hello from Parent!".to_string()));
    let reported = remember_with_key("reported", || signal("Child State Value".to_string()));

    let child = {
        let reported = reported.clone();
        ChildComponent(&parent.get(), move |value| reported.set(value))
    };

    DemoPage(
        nav,
        (
            Section("Parent component").child((
                TextField("Parent state", parent.get(), {
                    let parent = parent.clone();
                    move |s| parent.set(s)
                }),
                Button("Update Parent State", {
                    let parent = parent.clone();
                    move || parent.set("Parent State Updated!".into())
                }),
                Note(format!("Last report from child: {}", reported.get())),
            )),
            child,
            Section("Props").child(Bullets(&[
                "Passed down from parent",
                "Read-only in child",
                "Changes trigger re-render",
                "Used for communication",
            ])),
            Section("State").child(Bullets(&[
                "Managed by component",
                "Can be modified",
                "Changes trigger re-render",
                "Used for internal data",
            ])),
            Section("Try it").child(Bullets(&[
                "Change the parent state above",
                "Notice how it reaches the child component",
                "Update the child state independently",
                "Props flow down, state stays local",
            ])),
        ),
    )
}

/// Receives the parent's state as a prop and reports its own changes back.
fn ChildComponent(parent_message: &str, on_child_state_change: impl Fn(String) + 'static) -> View {
    let child_state = remember_with_key("child:state", || {
        signal("Initial Child State".to_string())
    });

    let update = {
        let child_state = child_state.clone();
        move || {
            let value = format!("Child updated at {}", Local::now().format("%H:%M:%S"));
            child_state.set(value.clone());
            on_child_state_change(value);
        }
    };

    Section("Child component").child((
        Text(format!("Props from parent: {parent_message}")),
        Text(format!("Child state: {}", child_state.get())),
        Button("Update Child State", update),
        Note("Parent State → Props → Child Component"),
        Note("Child State → Local to Child Component"),
    ))
}
