//! The API demo: a third dispatcher level, one screen per HTTP verb.

mod create_post;
mod delete_item;
mod fetch_users;
mod update_user;

pub use create_post::{CreatePostScreen, PostDraft, validate_post};
pub use delete_item::DeleteItemScreen;
pub use fetch_users::FetchUsersScreen;
pub use update_user::{UpdateUserScreen, validate_user};

use primer_core::*;
use primer_navigation::*;
use primer_ui::*;

use crate::DemoPage;

view_registry! {
    pub static API_SCREENS = [
        ViewEntry::new("fetch-users", "GET Request", FetchUsersScreen),
        ViewEntry::new("create-post", "POST Request", CreatePostScreen),
        ViewEntry::new("update-user", "PUT Request", UpdateUserScreen),
        ViewEntry::new("delete-item", "DELETE Request", DeleteItemScreen),
    ];
}

fn highlights(id: &str) -> &'static [&'static str] {
    match id {
        "fetch-users" => &["Fetch data from the API", "Loading states", "Error handling"],
        "create-post" => &["Create new data", "Form submission", "Response handling"],
        "update-user" => &["Update existing data", "Form validation", "Optimistic updates"],
        "delete-item" => &["Remove data", "Confirmation", "List updates"],
        _ => &[],
    }
}

pub fn ApiDemo(nav: &Navigator) -> View {
    let screens = remember_navigator("api", API_SCREENS, Some(Escape::to(nav)));
    Dispatch(&screens, |inner| {
        let selector = Selector::for_navigator(inner);
        let sections: Vec<View> = inner
            .registry()
            .list()
            .iter()
            .map(|entry| {
                let selector = selector.clone();
                let id = entry.id;
                Section(entry.title).child((
                    Bullets(highlights(id)),
                    Button(format!("Open {}", entry.title), move || {
                        selector.select(id);
                    }),
                ))
            })
            .collect();

        DemoPage(
            nav,
            (
                Note("Each screen talks to the JSON test API with one HTTP verb."),
                sections,
            ),
        )
    })
}
