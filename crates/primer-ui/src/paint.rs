use primer_core::*;

use crate::wrap::{display_width, wrap};

/// Paints `root` into numbered text lines no wider than `width` (where the
/// content allows). Buttons and text fields become hit regions, numbered in
/// paint order starting at 1.
pub fn paint(root: &View, width: usize) -> Frame {
    let mut p = Painter {
        width: width.max(20),
        frame: Frame::default(),
    };
    p.view(root, 0);
    p.frame
}

struct Painter {
    width: usize,
    frame: Frame,
}

impl Painter {
    fn avail(&self, indent: usize) -> usize {
        self.width.saturating_sub(indent).max(8)
    }

    fn push(&mut self, indent: usize, line: impl AsRef<str>) {
        self.frame
            .lines
            .push(format!("{}{}", " ".repeat(indent), line.as_ref()));
    }

    fn push_wrapped(&mut self, indent: usize, first: &str, rest: &str, text: &str) {
        let avail = self.avail(indent + display_width(first));
        for (i, line) in wrap(text, avail).into_iter().enumerate() {
            let prefix = if i == 0 { first } else { rest };
            self.push(indent, format!("{prefix}{line}"));
        }
    }

    fn view(&mut self, v: &View, indent: usize) {
        match &v.kind {
            ViewKind::Column => {
                for c in &v.children {
                    self.view(c, indent);
                }
            }
            ViewKind::Row => self.row(v, indent),
            ViewKind::Section { title } => {
                let head = format!("── {title} ");
                let fill = self.avail(indent).saturating_sub(display_width(&head));
                self.push(indent, format!("{head}{}", "─".repeat(fill)));
                for c in &v.children {
                    self.view(c, indent + 2);
                }
            }
            ViewKind::Text { text, style } => self.text_block(text, *style, indent),
            ViewKind::Divider => {
                let n = self.avail(indent);
                self.push(indent, "─".repeat(n));
            }
            ViewKind::Button { .. } | ViewKind::TextField { .. } | ViewKind::Spinner { .. } => {
                if let Some(token) = self.inline(v) {
                    let avail = self.avail(indent);
                    for line in wrap(&token, avail) {
                        self.push(indent, line);
                    }
                }
            }
        }
    }

    fn text_block(&mut self, text: &str, style: TextStyle, indent: usize) {
        match style {
            TextStyle::Body => self.push_wrapped(indent, "", "", text),
            TextStyle::Title => {
                let lines = wrap(text, self.avail(indent));
                let underline = lines.iter().map(|l| display_width(l)).max().unwrap_or(0);
                for l in lines {
                    self.push(indent, l);
                }
                self.push(indent, "=".repeat(underline));
            }
            TextStyle::Note => self.push_wrapped(indent, "› ", "  ", text),
            TextStyle::Error => self.push_wrapped(indent, "! ", "  ", text),
            TextStyle::Success => self.push_wrapped(indent, "✓ ", "  ", text),
        }
    }

    fn row(&mut self, v: &View, indent: usize) {
        let all_inline = v.children.iter().all(|c| {
            c.children.is_empty()
                && matches!(
                    c.kind,
                    ViewKind::Text { .. }
                        | ViewKind::Button { .. }
                        | ViewKind::TextField { .. }
                        | ViewKind::Spinner { .. }
                )
        });
        if !all_inline {
            for c in &v.children {
                self.view(c, indent);
            }
            return;
        }

        let tokens: Vec<String> = v.children.iter().filter_map(|c| self.inline(c)).collect();
        let joined = tokens.join("  ");
        let avail = self.avail(indent);
        if display_width(&joined) <= avail {
            self.push(indent, joined);
        } else {
            for t in tokens {
                for line in wrap(&t, avail) {
                    self.push(indent, line);
                }
            }
        }
    }

    /// One-line form of a leaf view; registers hit regions.
    fn inline(&mut self, v: &View) -> Option<String> {
        match &v.kind {
            ViewKind::Text { text, style } => Some(match style {
                TextStyle::Body | TextStyle::Title => text.clone(),
                TextStyle::Note => format!("› {text}"),
                TextStyle::Error => format!("! {text}"),
                TextStyle::Success => format!("✓ {text}"),
            }),
            ViewKind::Button {
                text,
                on_click,
                enabled,
            } => {
                let n = self.register(HitRegion {
                    number: 0,
                    role: Role::Button,
                    label: text.clone(),
                    enabled: *enabled,
                    on_click: on_click.clone(),
                    on_text_change: None,
                });
                Some(if *enabled {
                    format!("[{n}] {text}")
                } else {
                    format!("[{n}] {text} (disabled)")
                })
            }
            ViewKind::TextField {
                hint,
                value,
                on_change,
            } => {
                let n = self.register(HitRegion {
                    number: 0,
                    role: Role::TextField,
                    label: hint.clone(),
                    enabled: true,
                    on_click: None,
                    on_text_change: on_change.clone(),
                });
                Some(format!("[{n}] {hint}: {value}_"))
            }
            ViewKind::Spinner { label } => Some(format!("… {label}")),
            _ => None,
        }
    }

    fn register(&mut self, mut region: HitRegion) -> usize {
        let n = self.frame.hit_regions.len() + 1;
        region.number = n;
        self.frame.hit_regions.push(region);
        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_paint_counter_screen() {
        let v = Column().child((
            Title("Hooks"),
            Row().child((Button("-", || {}), Text("Count: 1"), Button("+", || {}))),
            Note("Cleanup runs on unmount"),
        ));
        let frame = paint(&v, 40);
        insta::assert_snapshot!(frame.text(), @r"
        Hooks
        =====
        [1] -  Count: 1  [2] +
        › Cleanup runs on unmount
        ");
        assert_eq!(frame.hit_regions.len(), 2);
        assert_eq!(frame.region(2).map(|r| r.label.as_str()), Some("+"));
    }

    #[test]
    fn test_section_indents_children() {
        let v = Section("Users").child(Text("none"));
        let frame = paint(&v, 20);
        assert_eq!(frame.lines, vec!["── Users ───────────", "  none"]);
    }

    #[test]
    fn test_regions_call_back() {
        let clicks = Rc::new(Cell::new(0));
        let typed = Rc::new(std::cell::RefCell::new(String::new()));
        let v = Column().child((
            TextField("Name", "Jo", {
                let typed = typed.clone();
                move |s| *typed.borrow_mut() = s
            }),
            Button("Save", {
                let clicks = clicks.clone();
                move || clicks.set(clicks.get() + 1)
            })
            .enabled(false),
        ));
        let frame = paint(&v, 40);
        assert_eq!(frame.lines, vec!["[1] Name: Jo_", "[2] Save (disabled)"]);

        let field = frame.find(Role::TextField, "Name").expect("field");
        (field.on_text_change.as_ref().expect("handler"))("Jane".into());
        assert_eq!(*typed.borrow(), "Jane");

        let save = frame.find(Role::Button, "Save").expect("button");
        assert!(!save.enabled);
        (save.on_click.as_ref().expect("handler"))();
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn test_wide_row_stacks() {
        let v = Row().child((
            Button("Fetch Users (async/await)", || {}),
            Button("Fetch Posts (Promises)", || {}),
        ));
        let frame = paint(&v, 30);
        assert_eq!(
            frame.lines,
            vec!["[1] Fetch Users (async/await)", "[2] Fetch Posts (Promises)"]
        );
    }

    #[test]
    fn test_header_has_back_button() {
        let v = Header("API Demo", || {});
        let frame = paint(&v, 24);
        assert_eq!(frame.lines[0], "[1] ← Back  API Demo");
        assert_eq!(frame.lines[1], "─".repeat(24));
    }
}
