use crate::{Dispose, on_unmount, remember_with_key, scoped_effect};
use std::cell::RefCell;

/// Runs `effect` whenever `deps` change, cleaning up the previous run first.
/// The last cleanup runs when the owning scope is disposed.
pub fn disposable_effect<K: PartialEq + Clone + 'static>(
    key: &str,
    deps: K,
    effect: impl FnOnce(&K) -> Dispose,
) {
    let last_deps = remember_with_key(format!("effect:{key}:deps"), || RefCell::new(None::<K>));
    let cleanup_slot =
        remember_with_key(format!("effect:{key}:cleanup"), || RefCell::new(None::<Dispose>));
    let installed = remember_with_key(format!("effect:{key}:installed"), || RefCell::new(false));

    if !*installed.borrow() {
        *installed.borrow_mut() = true;
        let cleanup_slot = cleanup_slot.clone();
        scoped_effect(move || {
            on_unmount(move || {
                let d = cleanup_slot.borrow_mut().take();
                if let Some(d) = d {
                    d.run();
                }
            })
        });
    }

    let changed = last_deps.borrow().as_ref() != Some(&deps);
    if changed {
        let previous = cleanup_slot.borrow_mut().take();
        if let Some(d) = previous {
            d.run();
        }

        let d = effect(&deps);
        *last_deps.borrow_mut() = Some(deps);
        *cleanup_slot.borrow_mut() = Some(d);
    }
}

/// Keyed by a per-callsite id string. Runs `effect` once per distinct `key`.
pub fn launched_effect_internal<K: PartialEq + Clone + 'static>(
    callsite: &'static str,
    key: K,
    effect: impl FnOnce(),
) {
    let last_key = remember_with_key(format!("launched:{callsite}"), || RefCell::new(None::<K>));

    let run = {
        let mut last = last_key.borrow_mut();
        if last.as_ref() != Some(&key) {
            *last = Some(key);
            true
        } else {
            false
        }
    };
    // doesn't cancel on unmount
    if run {
        effect();
    }
}

#[macro_export]
macro_rules! launched_effect {
    ($key:expr, $effect:expr) => {
        $crate::effects_ext::launched_effect_internal(
            concat!(module_path!(), ":", line!(), ":", column!()),
            $key,
            $effect,
        )
    };
}
