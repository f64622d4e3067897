use std::cell::Cell;

use primer_core::*;
use primer_navigation::Navigator;
use primer_ui::*;

use crate::DemoPage;

/// Sum of `0..count * 1_000_000`, the deliberately "expensive" value.
pub fn expensive_sum(count: i64) -> u128 {
    if count <= 0 {
        return 0;
    }
    let n = count as u128 * 1_000_000;
    n * (n - 1) / 2
}

pub fn HooksDemo(nav: &Navigator) -> View {
    let count = remember_with_key("count", || signal(0i64));
    let name = remember_with_key("name", || signal(String::new()));
    let users = remember_with_key("users", || signal(Vec::<String>::new()));
    let notice = remember_with_key("notice", || signal(None::<String>));
    let effect_log = remember_with_key("effect-log", || signal(Vec::<String>::new()));
    let calculations = remember_with_key("calculations", || Cell::new(0u32));

    disposable_effect("mount", (), |_| {
        log::info!("hooks demo mounted");
        on_unmount(|| log::info!("hooks demo will unmount"))
    });

    {
        let effect_log = effect_log.clone();
        disposable_effect("count", count.get(), move |c| {
            log::info!("count changed: {c}");
            effect_log.update(|l| l.push(format!("effect: count = {c}")));
            let c = *c;
            on_unmount(move || {
                log::debug!("cleanup for count {c}");
                effect_log.update(|l| l.push(format!("cleanup: count = {c}")));
            })
        });
    }

    let expensive = remember_memo("expensive", count.get(), |c| {
        log::debug!("calculating expensive value for {c}");
        calculations.set(calculations.get() + 1);
        expensive_sum(*c)
    });

    let add_user = {
        let name = name.clone();
        let users = users.clone();
        move || {
            let trimmed = name.get().trim().to_string();
            if !trimmed.is_empty() {
                users.update(|u| u.push(trimmed));
                name.set(String::new());
            }
        }
    };

    let counter = {
        let (dec, inc, reset) = (count.clone(), count.clone(), count.clone());
        Row().child((
            Button("-", move || dec.update(|v| *v -= 1)),
            Text(format!("Counter: {}", count.get())),
            Button("+", move || inc.update(|v| *v += 1)),
            Button("Reset", move || reset.set(0)),
        ))
    };

    let user_rows: Vec<View> = users
        .get()
        .into_iter()
        .enumerate()
        .map(|(i, user)| {
            let users = users.clone();
            Row().child((
                Text(user),
                Button("Remove", move || {
                    users.update(|u| {
                        if i < u.len() {
                            u.remove(i);
                        }
                    })
                }),
            ))
        })
        .collect();
    let user_count = user_rows.len();

    let log_lines: Vec<View> = effect_log
        .get()
        .iter()
        .rev()
        .take(4)
        .rev()
        .map(|l| Note(l.clone()))
        .collect();

    DemoPage(
        nav,
        (
            Section("useState").child((
                counter,
                TextField("Enter user name", name.get(), {
                    let name = name.clone();
                    move |s| name.set(s)
                }),
                Button("Add User", add_user.clone()),
            )),
            Section("useMemo").child((
                Text(format!("Expensive calculation result: {expensive}")),
                Note(format!(
                    "Only recalculated when the counter changes ({} so far)",
                    calculations.get()
                )),
            )),
            Section("Memoized vs regular callbacks").child((
                Row().child((
                    Button("Memoized Add", add_user),
                    Button("Regular Function", {
                        let notice = notice.clone();
                        move || {
                            notice.set(Some(
                                "This function is recreated on every render".into(),
                            ))
                        }
                    }),
                )),
                notice.get().map(|n| SuccessText(n)),
                Note("Memoized callbacks are only recreated when their dependencies change"),
            )),
            Section(format!("Users List ({user_count})")).child(if user_rows.is_empty() {
                vec![Note("No users yet")]
            } else {
                user_rows
            }),
            Section("Effects").child((
                Bullets(&[
                    "The first effect runs whenever the counter changes",
                    "The second runs only on mount and unmount",
                    "Cleanups run before the next effect and on leaving",
                ]),
                log_lines,
            )),
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expensive_sum_matches_loop() {
        assert_eq!(expensive_sum(0), 0);
        assert_eq!(expensive_sum(-3), 0);
        let looped: u128 = (0..1_000_000u128).sum();
        assert_eq!(expensive_sum(1), looped);
    }
}
