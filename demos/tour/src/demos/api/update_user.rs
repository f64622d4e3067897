use std::cell::RefCell;

use primer_core::*;
use primer_navigation::Navigator;
use primer_net::{Backend, User, UserUpdate};
use primer_ui::*;

use crate::fetch::remember_fetch;
use crate::{DemoPage, WithBackend};

pub fn validate_user(id: &str, name: &str, email: &str) -> Result<UserUpdate, String> {
    let id = match id.trim().parse::<u32>() {
        Ok(id) if id > 0 => id,
        _ => return Err("User ID must be a positive number".into()),
    };
    let name = name.trim();
    if name.is_empty() {
        return Err("Name is required".into());
    }
    let email = email.trim();
    if !email.contains('@') {
        return Err("Enter a valid email address".into());
    }
    Ok(UserUpdate {
        id,
        name: name.to_string(),
        email: email.to_string(),
    })
}

pub fn UpdateUserScreen(nav: &Navigator) -> View {
    WithBackend(nav, |backend| UpdateUser(nav, backend))
}

fn UpdateUser(nav: &Navigator, backend: Backend) -> View {
    let id = remember_with_key("id", || signal("1".to_string()));
    let name = remember_with_key("name", || signal("Leanne Graham".to_string()));
    let email = remember_with_key("email", || signal("Sincere@april.biz".to_string()));
    let problem = remember_with_key("problem", || signal(None::<String>));
    // What the screen shows as the user's record, possibly ahead of the server.
    let shown = remember_with_key("shown", || signal(None::<User>));
    let before = remember_with_key("before", || RefCell::new(None::<Option<User>>));
    let saved = remember_fetch::<User>("saved");

    match saved.poll() {
        Some(Ok(user)) => {
            log::info!("user {} updated", user.id);
            before.borrow_mut().take();
            shown.set(Some(user));
        }
        Some(Err(e)) => {
            log::warn!("update failed, rolling back: {e}");
            if let Some(previous) = before.borrow_mut().take() {
                shown.set(previous);
            }
        }
        None => {}
    }
    let pending = saved.loading();

    let submit = {
        let (id, name, email, problem, shown, before, saved) = (
            id.clone(),
            name.clone(),
            email.clone(),
            problem.clone(),
            shown.clone(),
            before.clone(),
            saved.clone(),
        );
        move || match validate_user(&id.get(), &name.get(), &email.get()) {
            Ok(update) => {
                problem.set(None);
                *before.borrow_mut() = Some(shown.get());
                shown.set(Some(User {
                    id: update.id,
                    name: update.name.clone(),
                    email: update.email.clone(),
                    phone: String::new(),
                    website: String::new(),
                }));
                saved.start(backend.request("PUT /users", move |client| async move {
                    client.update_user(&update).await
                }));
            }
            Err(message) => problem.set(Some(message)),
        }
    };

    let record = shown.get().map(|user| {
        Section("User record").child((
            Text(format!("#{} {}", user.id, user.name)),
            Note(user.email),
            if pending {
                Note("Shown before the server confirmed it")
            } else {
                SuccessText("Saved on the server")
            },
        ))
    });

    DemoPage(
        nav,
        (
            Note("Updates a user with a PUT request. The change shows immediately and is rolled back if the request fails."),
            TextField("User ID", id.get(), {
                let id = id.clone();
                move |s| id.set(s)
            }),
            TextField("Name", name.get(), {
                let name = name.clone();
                move |s| name.set(s)
            }),
            TextField("Email", email.get(), {
                let email = email.clone();
                move |s| email.set(s)
            }),
            Button(if pending { "Saving..." } else { "Update User" }, submit).enabled(!pending),
            problem.get().map(|p| ErrorText(p)),
            saved.error().map(|e| ErrorText(e)),
            record,
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_user() {
        assert!(validate_user("1", "Ann", "ann@example.com").is_ok());
        assert_eq!(
            validate_user("x", "Ann", "a@b").unwrap_err(),
            "User ID must be a positive number"
        );
        assert_eq!(validate_user("2", " ", "a@b").unwrap_err(), "Name is required");
        assert_eq!(
            validate_user("2", "Ann", "nope").unwrap_err(),
            "Enter a valid email address"
        );
    }
}
