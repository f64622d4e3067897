use primer_core::*;
use primer_navigation::Navigator;
use primer_net::{Backend, NewPost, Post};
use primer_ui::*;

use crate::fetch::remember_fetch;
use crate::{DemoPage, WithBackend};

/// Form contents as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub body: String,
    pub user_id: String,
}

pub fn validate_post(draft: &PostDraft) -> Result<NewPost, String> {
    let title = draft.title.trim();
    if title.is_empty() {
        return Err("Title is required".into());
    }
    let body = draft.body.trim();
    if body.is_empty() {
        return Err("Body is required".into());
    }
    let user_id = match draft.user_id.trim().parse::<u32>() {
        Ok(id) if id > 0 => id,
        _ => return Err("User ID must be a positive number".into()),
    };
    Ok(NewPost {
        title: title.to_string(),
        body: body.to_string(),
        user_id,
    })
}

pub fn CreatePostScreen(nav: &Navigator) -> View {
    WithBackend(nav, |backend| CreatePost(nav, backend))
}

fn CreatePost(nav: &Navigator, backend: Backend) -> View {
    let draft = remember_with_key("draft", || {
        signal(PostDraft {
            user_id: "1".into(),
            ..PostDraft::default()
        })
    });
    let problem = remember_with_key("problem", || signal(None::<String>));
    let created = remember_fetch::<Post>("created");

    if let Some(Ok(post)) = created.poll() {
        log::info!("created post {}", post.id);
        draft.set(PostDraft {
            user_id: post.user_id.to_string(),
            ..PostDraft::default()
        });
    }
    let loading = created.loading();

    let submit = {
        let (draft, problem, created) = (draft.clone(), problem.clone(), created.clone());
        move || match validate_post(&draft.get()) {
            Ok(post) => {
                problem.set(None);
                created.start(backend.request("POST /posts", move |client| async move {
                    client.create_post(&post).await
                }));
            }
            Err(message) => problem.set(Some(message)),
        }
    };

    let field = |hint: &str, value: String, set: fn(&mut PostDraft, String)| {
        let draft = draft.clone();
        TextField(hint, value, move |s| draft.update(|d| set(d, s)))
    };
    let current = draft.get();

    let result = created.data().map(|post| {
        Section("Server response").child((
            SuccessText(format!("Post created with id {}", post.id)),
            Text(post.title),
            Note(post.body),
        ))
    });

    DemoPage(
        nav,
        (
            Note("Creates a post with a POST request and shows what the server returns."),
            field("Title", current.title, |d, s| d.title = s),
            field("Body", current.body, |d, s| d.body = s),
            field("User ID", current.user_id, |d, s| d.user_id = s),
            Button(if loading { "Creating..." } else { "Create Post" }, submit).enabled(!loading),
            problem.get().map(|p| ErrorText(p)),
            created.error().map(|e| ErrorText(e)),
            result,
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, body: &str, user_id: &str) -> PostDraft {
        PostDraft {
            title: title.into(),
            body: body.into(),
            user_id: user_id.into(),
        }
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(validate_post(&draft(" ", "b", "1")), Err("Title is required".into()));
        assert_eq!(validate_post(&draft("t", "", "1")), Err("Body is required".into()));
        assert_eq!(
            validate_post(&draft("t", "b", "zero")),
            Err("User ID must be a positive number".into())
        );
        assert_eq!(
            validate_post(&draft("t", "b", "0")),
            Err("User ID must be a positive number".into())
        );
    }

    #[test]
    fn test_valid_draft_is_trimmed() {
        let post = validate_post(&draft(" Hello ", " world ", " 3 ")).unwrap();
        assert_eq!(post.title, "Hello");
        assert_eq!(post.body, "world");
        assert_eq!(post.user_id, 3);
    }
}
