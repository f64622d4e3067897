use primer_core::View;

use crate::Navigator;

/// Renders one destination. Receives the navigator that is showing it.
pub type RenderFn = fn(&Navigator) -> View;

#[derive(Clone, Copy)]
pub struct ViewEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub render: RenderFn,
}

impl ViewEntry {
    pub const fn new(id: &'static str, title: &'static str, render: RenderFn) -> Self {
        Self { id, title, render }
    }
}

impl std::fmt::Debug for ViewEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewEntry")
            .field("id", &self.id)
            .field("title", &self.title)
            .finish()
    }
}

/// Static, ordered table of destinations.
///
/// Build it in a `static` so the id check below runs at compile time:
///
/// ```rust
/// use primer_navigation::{Navigator, ViewEntry, ViewRegistry};
/// use primer_core::View;
///
/// fn about(_: &Navigator) -> View {
///     primer_ui::Text("about")
/// }
///
/// const ENTRIES: &[ViewEntry] = &[ViewEntry::new("about", "About", about)];
/// static PAGES: ViewRegistry = ViewRegistry::new(ENTRIES);
/// assert_eq!(PAGES.list()[0].title, "About");
/// ```
///
/// A duplicate id is rejected while the static is evaluated:
///
/// ```compile_fail
/// use primer_navigation::{Navigator, ViewEntry, ViewRegistry};
/// use primer_core::View;
///
/// fn page(_: &Navigator) -> View {
///     primer_ui::Text("page")
/// }
///
/// const ENTRIES: &[ViewEntry] = &[
///     ViewEntry::new("a", "A", page),
///     ViewEntry::new("a", "A again", page),
/// ];
/// static PAGES: ViewRegistry = ViewRegistry::new(ENTRIES);
/// ```
///
/// [`view_registry!`] does both steps in one declaration.
#[derive(Clone, Copy, Debug)]
pub struct ViewRegistry {
    entries: &'static [ViewEntry],
}

impl ViewRegistry {
    pub const fn new(entries: &'static [ViewEntry]) -> Self {
        assert!(has_unique_ids(entries), "view registry contains a duplicate id");
        Self { entries }
    }

    pub const fn empty() -> Self {
        Self { entries: &[] }
    }

    pub fn list(&self) -> &'static [ViewEntry] {
        self.entries
    }

    /// Exact-match lookup.
    pub fn find(&self, id: &str) -> Option<&'static ViewEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|e| e.id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub const fn has_unique_ids(entries: &[ViewEntry]) -> bool {
    let mut i = 0;
    while i < entries.len() {
        let mut j = i + 1;
        while j < entries.len() {
            if str_eq(entries[i].id, entries[j].id) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Declares a registry `static`; a duplicate id fails the build.
///
/// ```rust
/// use primer_navigation::{Navigator, ViewEntry, view_registry};
/// use primer_core::View;
///
/// fn home(_: &Navigator) -> View {
///     primer_ui::Text("home")
/// }
///
/// view_registry! {
///     static PAGES = [ViewEntry::new("home", "Home", home)];
/// }
/// assert!(PAGES.contains("home"));
/// ```
#[macro_export]
macro_rules! view_registry {
    ($vis:vis static $name:ident = [$($entry:expr),* $(,)?];) => {
        $vis static $name: $crate::ViewRegistry = {
            const ENTRIES: &[$crate::ViewEntry] = &[$($entry),*];
            $crate::ViewRegistry::new(ENTRIES)
        };
    };
}
