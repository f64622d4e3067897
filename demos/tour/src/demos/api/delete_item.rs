use std::cell::RefCell;

use primer_core::*;
use primer_navigation::Navigator;
use primer_net::{Backend, Post, Request};
use primer_ui::*;

use crate::demos::async_data::POST_PREVIEW;
use crate::fetch::remember_fetch;
use crate::{DemoPage, WithBackend};

fn load_posts(backend: &Backend) -> Request<Vec<Post>> {
    backend.request("GET /posts", |client| async move { client.posts().await })
}

pub fn DeleteItemScreen(nav: &Navigator) -> View {
    WithBackend(nav, |backend| DeleteItem(nav, backend))
}

fn DeleteItem(nav: &Navigator, backend: Backend) -> View {
    let posts = remember_fetch::<Vec<Post>>("posts");
    let deletion = remember_fetch::<()>("delete");
    let confirming = remember_with_key("confirming", || signal(None::<u32>));
    let notice = remember_with_key("notice", || signal(None::<String>));
    // Removed optimistically, with the index it had, until the server answers.
    let removed = remember_with_key("removed", || RefCell::new(None::<(usize, Post)>));

    {
        let (posts, backend) = (posts.clone(), backend.clone());
        launched_effect!((), move || posts.start(load_posts(&backend)));
    }
    posts.poll();

    match deletion.poll() {
        Some(Ok(())) => {
            if let Some((_, post)) = removed.borrow_mut().take() {
                notice.set(Some(format!("Post #{} deleted", post.id)));
            }
        }
        Some(Err(e)) => {
            let restore = removed.borrow_mut().take();
            if let Some((index, post)) = restore {
                log::warn!("delete of #{} failed, restoring: {e}", post.id);
                let mut list = posts.data().unwrap_or_default();
                list.insert(index.min(list.len()), post);
                posts.set_data(Some(list));
            }
        }
        None => {}
    }
    let busy = deletion.loading();

    let confirm_delete = {
        let (posts, deletion, confirming, notice, removed) = (
            posts.clone(),
            deletion.clone(),
            confirming.clone(),
            notice.clone(),
            removed.clone(),
        );
        let backend = backend.clone();
        move || {
            let Some(id) = confirming.get() else {
                return;
            };
            confirming.set(None);
            notice.set(None);
            let mut list = posts.data().unwrap_or_default();
            if let Some(index) = list.iter().position(|p| p.id == id) {
                let post = list.remove(index);
                posts.set_data(Some(list));
                *removed.borrow_mut() = Some((index, post));
            }
            deletion.start(backend.request("DELETE /posts", move |client| async move {
                client.delete_post(id).await
            }));
        }
    };

    let list = posts.data().unwrap_or_default();
    let mut rows: Vec<View> = list
        .iter()
        .take(POST_PREVIEW)
        .map(|post| {
            let confirming = confirming.clone();
            let id = post.id;
            Row().child((
                Text(format!("#{id} {}", post.title)),
                Button(format!("Delete #{id}"), move || confirming.set(Some(id))).enabled(!busy),
            ))
        })
        .collect();
    if list.len() > POST_PREVIEW {
        rows.push(Note(format!("... and {} more posts", list.len() - POST_PREVIEW)));
    }

    let confirmation = confirming.get().map(|id| {
        Section("Confirm").child((
            Text(format!("Delete post #{id}? This cannot be undone.")),
            Row().child((
                Button("Confirm Delete", confirm_delete),
                Button("Cancel", {
                    let confirming = confirming.clone();
                    move || confirming.set(None)
                }),
            )),
        ))
    });

    DemoPage(
        nav,
        (
            Note("Deletes a post with a DELETE request. The row disappears at once and comes back if the request fails."),
            Button("Reload", {
                let posts = posts.clone();
                move || posts.start(load_posts(&backend))
            }),
            (posts.loading() || busy).then(|| Spinner("Working...")),
            confirmation,
            posts.error().map(|e| ErrorText(e)),
            deletion.error().map(|e| ErrorText(e)),
            notice.get().map(|n| SuccessText(n)),
            Section(format!("Posts ({})", list.len())).child(rows),
        ),
    )
}
