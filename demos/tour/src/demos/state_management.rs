use primer_core::*;
use primer_navigation::Navigator;
use primer_ui::*;

use crate::DemoPage;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub age: u32,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "John Doe".into(),
            email: "john@example.com".into(),
            age: 25,
        }
    }
}

/// Shared profile handed to a subtree through a composition local.
#[derive(Clone, Default)]
pub struct UserContext {
    user: Signal<Profile>,
}

impl UserContext {
    pub fn user(&self) -> Profile {
        self.user.get()
    }

    pub fn update(&self, f: impl FnOnce(&mut Profile)) {
        self.user.update(f);
    }

    pub fn reset(&self) {
        self.user.set(Profile::default());
    }
}

fn use_user() -> Result<UserContext, CoreError> {
    local::<UserContext>()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    fn keeps(self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !todo.completed,
            Filter::Completed => todo.completed,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoState {
    pub todos: Vec<Todo>,
    pub filter: Filter,
    next_id: u64,
}

impl TodoState {
    pub fn visible(&self) -> impl Iterator<Item = &Todo> {
        self.todos.iter().filter(|t| self.filter.keeps(t))
    }

    pub fn active(&self) -> usize {
        self.todos.iter().filter(|t| !t.completed).count()
    }

    pub fn completed(&self) -> usize {
        self.todos.len() - self.active()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TodoAction {
    Add(String),
    Toggle(u64),
    Delete(u64),
    SetFilter(Filter),
    ClearCompleted,
}

pub struct TodoReducer;

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;

    fn initial_state() -> TodoState {
        TodoState::default()
    }

    fn reduce(state: &TodoState, action: TodoAction) -> TodoState {
        let mut next = state.clone();
        match action {
            TodoAction::Add(text) => {
                let text = text.trim();
                if !text.is_empty() {
                    next.next_id += 1;
                    next.todos.push(Todo {
                        id: next.next_id,
                        text: text.to_string(),
                        completed: false,
                    });
                }
            }
            TodoAction::Toggle(id) => {
                if let Some(todo) = next.todos.iter_mut().find(|t| t.id == id) {
                    todo.completed = !todo.completed;
                }
            }
            TodoAction::Delete(id) => next.todos.retain(|t| t.id != id),
            TodoAction::SetFilter(filter) => next.filter = filter,
            TodoAction::ClearCompleted => next.todos.retain(|t| !t.completed),
        }
        next
    }
}

pub fn StateManagementDemo(nav: &Navigator) -> View {
    let context = remember_with_key("user-context", UserContext::default);
    let provided = with_local((*context).clone(), || {
        Section("Context").child((UserProfile(), UserEditor()))
    });

    DemoPage(
        nav,
        (
            provided,
            Section("Outside the provider").child(UserProfile()),
            Section("Reducer").child(TodoApp()),
            Section("State management patterns").child(Bullets(&[
                "Context: shared state without passing it through every view",
                "Reducer: complex state changes as actions",
                "Local state for simple values",
            ])),
        ),
    )
}

fn UserProfile() -> View {
    match use_user() {
        Ok(ctx) => {
            let user = ctx.user();
            Column().child((
                Text(format!("Name: {}", user.name)),
                Text(format!("Email: {}", user.email)),
                Text(format!("Age: {}", user.age)),
            ))
        }
        Err(e) => ErrorText(e.to_string()),
    }
}

fn UserEditor() -> View {
    let ctx = match use_user() {
        Ok(ctx) => ctx,
        Err(e) => return ErrorText(e.to_string()),
    };
    let current = ctx.user();
    let name = remember_with_key("editor:name", || signal(current.name.clone()));
    let email = remember_with_key("editor:email", || signal(current.email.clone()));
    let age = remember_with_key("editor:age", || signal(current.age.to_string()));
    let notice = remember_with_key("editor:notice", || signal(None::<String>));

    let save = {
        let (ctx, name, email, age, notice) = (
            ctx.clone(),
            name.clone(),
            email.clone(),
            age.clone(),
            notice.clone(),
        );
        move || {
            let age = age.get().trim().parse().unwrap_or(0);
            ctx.update(|u| {
                u.name = name.get();
                u.email = email.get();
                u.age = age;
            });
            log::info!("profile saved");
            notice.set(Some("User updated successfully!".into()));
        }
    };
    let reset = {
        let notice = notice.clone();
        move || {
            ctx.reset();
            notice.set(None);
        }
    };

    Column().child((
        TextField("Name", name.get(), {
            let name = name.clone();
            move |s| name.set(s)
        }),
        TextField("Email", email.get(), {
            let email = email.clone();
            move |s| email.set(s)
        }),
        TextField("Age", age.get(), {
            let age = age.clone();
            move |s| age.set(s)
        }),
        Row().child((Button("Save", save), Button("Reset", reset))),
        notice.get().map(|n| SuccessText(n)),
    ))
}

fn TodoApp() -> View {
    let store = remember_reducer::<TodoReducer>("todos");
    let draft = remember_with_key("todo:draft", || signal(String::new()));
    let state = store.state();

    let add = {
        let (store, draft) = (store.clone(), draft.clone());
        move || {
            let text = draft.get();
            if !text.trim().is_empty() {
                store.dispatch(TodoAction::Add(text));
                draft.set(String::new());
            }
        }
    };

    let filters: Vec<View> = Filter::ALL
        .iter()
        .map(|&f| {
            let store = store.clone();
            Button(f.label(), move || store.dispatch(TodoAction::SetFilter(f)))
        })
        .collect();

    let rows: Vec<View> = state
        .visible()
        .map(|todo| {
            let (toggle, delete) = (store.clone(), store.clone());
            let id = todo.id;
            let mark = if todo.completed { "[x]" } else { "[ ]" };
            Row().child((
                Button(format!("{mark} {}", todo.text), move || {
                    toggle.dispatch(TodoAction::Toggle(id))
                }),
                Button(format!("Delete #{id}"), move || {
                    delete.dispatch(TodoAction::Delete(id))
                }),
            ))
        })
        .collect();

    let clear = (state.completed() > 0).then(|| {
        let store = store.clone();
        Button("Clear Completed", move || {
            store.dispatch(TodoAction::ClearCompleted)
        })
    });

    Column().child((
        Row().child((
            TextField("Add a new todo", draft.get(), {
                let draft = draft.clone();
                move |s| draft.set(s)
            }),
            Button("Add", add),
        )),
        Row().child(filters),
        Note(format!("Showing: {}", state.filter.label())),
        rows,
        clear,
        Text(format!(
            "Total: {} | Active: {} | Completed: {}",
            state.todos.len(),
            state.active(),
            state.completed()
        )),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(actions: impl IntoIterator<Item = TodoAction>) -> TodoState {
        actions
            .into_iter()
            .fold(TodoReducer::initial_state(), |s, a| TodoReducer::reduce(&s, a))
    }

    #[test]
    fn test_add_toggle_and_counts() {
        let state = run([
            TodoAction::Add("milk".into()),
            TodoAction::Add("  ".into()),
            TodoAction::Add("eggs".into()),
            TodoAction::Toggle(1),
        ]);
        assert_eq!(state.todos.len(), 2);
        assert_eq!((state.active(), state.completed()), (1, 1));
    }

    #[test]
    fn test_filters_and_clear_completed() {
        let mut state = run([
            TodoAction::Add("a".into()),
            TodoAction::Add("b".into()),
            TodoAction::Toggle(2),
            TodoAction::SetFilter(Filter::Completed),
        ]);
        let visible: Vec<_> = state.visible().map(|t| t.text.as_str()).collect();
        assert_eq!(visible, ["b"]);

        state = TodoReducer::reduce(&state, TodoAction::ClearCompleted);
        assert_eq!(state.visible().count(), 0);
        assert_eq!(state.todos.len(), 1);
    }

    #[test]
    fn test_ids_stay_unique_after_delete() {
        let state = run([
            TodoAction::Add("a".into()),
            TodoAction::Delete(1),
            TodoAction::Add("b".into()),
        ]);
        assert_eq!(state.todos[0].id, 2);
    }

    #[test]
    fn test_profile_outside_provider_reports_missing_context() {
        let view = UserProfile();
        let text = view.texts().join("\n");
        assert!(text.contains("UserContext"), "{text}");
        assert!(text.contains("was provided"), "{text}");
    }
}
