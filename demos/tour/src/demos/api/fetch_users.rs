use primer_core::*;
use primer_navigation::Navigator;
use primer_net::{Backend, User};
use primer_ui::*;

use crate::fetch::remember_fetch;
use crate::{DemoPage, WithBackend};

pub fn FetchUsersScreen(nav: &Navigator) -> View {
    WithBackend(nav, |backend| FetchUsers(nav, backend))
}

fn FetchUsers(nav: &Navigator, backend: Backend) -> View {
    let users = remember_fetch::<Vec<User>>("users");
    users.poll();
    let loading = users.loading();

    let fetch = {
        let users = users.clone();
        move || {
            users.start(backend.request("GET /users", |client| async move {
                client.users().await
            }))
        }
    };
    let clear = {
        let users = users.clone();
        move || users.clear()
    };

    let error = users.error().map(|message| {
        Column().child((
            ErrorText(message),
            Note("Failed to fetch users. Please try again."),
        ))
    });

    let list = users.data().filter(|u| !u.is_empty()).map(|list| {
        let rows: Vec<View> = list
            .iter()
            .map(|u| {
                Column().child((
                    Text(u.name.clone()),
                    Note(u.email.clone()),
                    Note(u.phone.clone()),
                ))
            })
            .collect();
        Section(format!("Users ({})", list.len())).child(rows)
    });

    DemoPage(
        nav,
        (
            Note("Fetches user data from the JSON test API with a GET request."),
            Row().child((
                Button(if loading { "Loading..." } else { "Fetch Users" }, fetch)
                    .enabled(!loading),
                Button("Clear", clear),
            )),
            loading.then(|| Spinner("Loading users...")),
            error,
            list,
        ),
    )
}
