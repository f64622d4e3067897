use primer_core::*;
use primer_navigation::Navigator;
use primer_net::{Backend, Post, Request, User};
use primer_ui::*;

use crate::fetch::remember_fetch;
use crate::{DemoPage, WithBackend};

/// Posts shown before the "... and N more posts" line.
pub const POST_PREVIEW: usize = 5;

/// First `max` characters of `body`, with an ellipsis.
pub fn excerpt(body: &str, max: usize) -> String {
    let head: String = body.chars().take(max).collect();
    format!("{head}...")
}

fn fetch_users(backend: &Backend) -> Request<Vec<User>> {
    backend.request("fetch users", |client| async move { client.users().await })
}

fn fetch_posts(backend: &Backend) -> Request<Vec<Post>> {
    backend.request("fetch posts", |client| async move { client.posts().await })
}

/// Both lists at once; fails if either call fails.
fn fetch_all(backend: &Backend) -> Request<(Vec<User>, Vec<Post>)> {
    backend.request("fetch all", |client| async move {
        tokio::try_join!(client.users(), client.posts())
    })
}

pub fn AsyncDemo(nav: &Navigator) -> View {
    WithBackend(nav, |backend| AsyncScreen(nav, backend))
}

fn AsyncScreen(nav: &Navigator, backend: Backend) -> View {
    let users = remember_fetch::<Vec<User>>("users");
    let posts = remember_fetch::<Vec<Post>>("posts");
    let all = remember_fetch::<(Vec<User>, Vec<Post>)>("all");

    {
        let (all, backend) = (all.clone(), backend.clone());
        launched_effect!((), move || all.start(fetch_all(&backend)));
    }

    if let Some(Ok((u, p))) = all.poll() {
        users.set_data(Some(u));
        posts.set_data(Some(p));
    }
    users.poll();
    posts.poll();

    let loading = users.loading() || posts.loading() || all.loading();
    let error = all.error().or_else(|| users.error()).or_else(|| posts.error());

    let refetch_all = {
        let (users, posts, all, backend) =
            (users.clone(), posts.clone(), all.clone(), backend.clone());
        move || {
            users.clear_error();
            posts.clear_error();
            all.start(fetch_all(&backend));
        }
    };

    let error_view = error.map(|message| {
        Column().child((ErrorText(message), Button("Retry", refetch_all.clone())))
    });

    let user_list = users.data().unwrap_or_default();
    let post_list = posts.data().unwrap_or_default();

    let user_rows: Vec<View> = user_list
        .iter()
        .map(|u| {
            Column().child((
                Text(u.name.clone()),
                Note(format!("{}  {}", u.email, u.phone)),
            ))
        })
        .collect();

    let mut post_rows: Vec<View> = post_list
        .iter()
        .take(POST_PREVIEW)
        .map(|p| Column().child((Text(p.title.clone()), Note(excerpt(&p.body, 100)))))
        .collect();
    if post_list.len() > POST_PREVIEW {
        post_rows.push(Note(format!(
            "... and {} more posts",
            post_list.len() - POST_PREVIEW
        )));
    }

    DemoPage(
        nav,
        (
            loading.then(|| Spinner("Loading...")),
            error_view,
            Row().child((
                Button("Fetch Users", {
                    let (users, backend) = (users.clone(), backend.clone());
                    move || users.start(fetch_users(&backend))
                }),
                Button("Fetch Posts", {
                    let (posts, backend) = (posts.clone(), backend.clone());
                    move || posts.start(fetch_posts(&backend))
                }),
                Button("Fetch All", refetch_all),
            )),
            Section(format!("Users ({})", user_list.len())).child(user_rows),
            Section(format!("Posts ({})", post_list.len())).child(post_rows),
            Section("Async patterns").child(Bullets(&[
                "async/await for readable request code",
                "try_join! for parallel requests",
                "Errors surface as values, with a retry",
                "A spinner while anything is loading",
            ])),
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_counts_characters() {
        assert_eq!(excerpt("héllo world", 5), "héllo...");
        assert_eq!(excerpt("hi", 100), "hi...");
    }
}
