#![allow(non_snake_case)]
//! Widgets and the text painter.

pub mod paint;
pub mod wrap;

pub use paint::paint;

use std::rc::Rc;

use primer_core::*;

pub fn Column() -> View {
    View::new(ViewKind::Column)
}

pub fn Row() -> View {
    View::new(ViewKind::Row)
}

/// Titled group; children are painted indented under the title rule.
pub fn Section(title: impl Into<String>) -> View {
    View::new(ViewKind::Section {
        title: title.into(),
    })
}

pub fn Text(text: impl Into<String>) -> View {
    styled(text, TextStyle::Body)
}

pub fn Title(text: impl Into<String>) -> View {
    styled(text, TextStyle::Title)
}

pub fn Note(text: impl Into<String>) -> View {
    styled(text, TextStyle::Note)
}

pub fn ErrorText(text: impl Into<String>) -> View {
    styled(text, TextStyle::Error)
}

pub fn SuccessText(text: impl Into<String>) -> View {
    styled(text, TextStyle::Success)
}

fn styled(text: impl Into<String>, style: TextStyle) -> View {
    View::new(ViewKind::Text {
        text: text.into(),
        style,
    })
}

/// Bulleted lines, one `Note` per item.
pub fn Bullets(items: &[&str]) -> View {
    Column().with_children(items.iter().map(|i| Note(format!("• {i}"))).collect())
}

pub fn Button(text: impl Into<String>, on_click: impl Fn() + 'static) -> View {
    View::new(ViewKind::Button {
        text: text.into(),
        on_click: Some(Rc::new(on_click)),
        enabled: true,
    })
}

pub fn TextField(
    hint: impl Into<String>,
    value: impl Into<String>,
    on_change: impl Fn(String) + 'static,
) -> View {
    View::new(ViewKind::TextField {
        hint: hint.into(),
        value: value.into(),
        on_change: Some(Rc::new(on_change)),
    })
}

pub fn Spinner(label: impl Into<String>) -> View {
    View::new(ViewKind::Spinner {
        label: label.into(),
    })
}

pub fn Divider() -> View {
    View::new(ViewKind::Divider)
}

/// Screen header: a back button followed by the screen title.
pub fn Header(title: impl Into<String>, on_back: impl Fn() + 'static) -> View {
    Column().child((
        Row().child((Button("← Back", on_back), Text(title))),
        Divider(),
    ))
}

pub trait ViewExt: Sized {
    fn child(self, children: impl IntoChildren) -> Self;
    /// Only meaningful for buttons; other views are returned unchanged.
    fn enabled(self, enabled: bool) -> Self;
}

impl ViewExt for View {
    fn child(self, children: impl IntoChildren) -> Self {
        let mut kids = self.children;
        kids.extend(children.into_children());
        View {
            kind: self.kind,
            children: kids,
        }
    }

    fn enabled(mut self, on: bool) -> Self {
        if let ViewKind::Button { enabled, .. } = &mut self.kind {
            *enabled = on;
        }
        self
    }
}

pub trait IntoChildren {
    fn into_children(self) -> Vec<View>;
}

impl IntoChildren for View {
    fn into_children(self) -> Vec<View> {
        vec![self]
    }
}

impl IntoChildren for Option<View> {
    fn into_children(self) -> Vec<View> {
        self.into_iter().collect()
    }
}

impl IntoChildren for Vec<View> {
    fn into_children(self) -> Vec<View> {
        self
    }
}

impl<const N: usize> IntoChildren for [View; N] {
    fn into_children(self) -> Vec<View> {
        self.into()
    }
}

// Tuple implementations
macro_rules! impl_into_children_tuple {
    ($($idx:tt $t:ident),+) => {
        impl<$($t: IntoChildren),+> IntoChildren for ($($t,)+) {
            fn into_children(self) -> Vec<View> {
                let mut v = Vec::new();
                $(v.extend(self.$idx.into_children());)+
                v
            }
        }
    };
}

impl_into_children_tuple!(0 A, 1 B);
impl_into_children_tuple!(0 A, 1 B, 2 C);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H);
