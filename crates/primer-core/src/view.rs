use std::rc::Rc;

pub type Callback = Rc<dyn Fn()>;
pub type TextCallback = Rc<dyn Fn(String)>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextStyle {
    #[default]
    Body,
    Title,
    Note,
    Error,
    Success,
}

#[derive(Clone)]
pub enum ViewKind {
    Column,
    Row,
    Section {
        title: String,
    },
    Text {
        text: String,
        style: TextStyle,
    },
    Button {
        text: String,
        on_click: Option<Callback>,
        enabled: bool,
    },
    TextField {
        hint: String,
        value: String,
        on_change: Option<TextCallback>,
    },
    Spinner {
        label: String,
    },
    Divider,
}

impl std::fmt::Debug for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewKind::Column => write!(f, "Column"),
            ViewKind::Row => write!(f, "Row"),
            ViewKind::Section { title } => f.debug_struct("Section").field("title", title).finish(),
            ViewKind::Text { text, style } => f
                .debug_struct("Text")
                .field("text", text)
                .field("style", style)
                .finish(),
            ViewKind::Button { text, enabled, .. } => f
                .debug_struct("Button")
                .field("text", text)
                .field("enabled", enabled)
                .field("on_click", &"<callback>")
                .finish(),
            ViewKind::TextField { hint, value, .. } => f
                .debug_struct("TextField")
                .field("hint", hint)
                .field("value", value)
                .finish(),
            ViewKind::Spinner { label } => f.debug_struct("Spinner").field("label", label).finish(),
            ViewKind::Divider => write!(f, "Divider"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct View {
    pub kind: ViewKind,
    pub children: Vec<View>,
}

impl View {
    pub fn new(kind: ViewKind) -> Self {
        View {
            kind,
            children: vec![],
        }
    }

    pub fn with_children(mut self, kids: Vec<View>) -> Self {
        self.children = kids;
        self
    }

    pub fn push(mut self, kid: View) -> Self {
        self.children.push(kid);
        self
    }

    /// All text reachable from this view, depth first. Handy in tests.
    pub fn texts(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_texts(&mut out);
        out
    }

    fn collect_texts(&self, out: &mut Vec<String>) {
        match &self.kind {
            ViewKind::Section { title } => out.push(title.clone()),
            ViewKind::Text { text, .. } => out.push(text.clone()),
            ViewKind::Button { text, .. } => out.push(text.clone()),
            ViewKind::Spinner { label } => out.push(label.clone()),
            _ => {}
        }
        for c in &self.children {
            c.collect_texts(out);
        }
    }
}
