//! # Composition locals
//!
//! Values provided to a subtree without threading them through every
//! function, the way context works in other UI toolkits. A local is keyed by
//! its type; the innermost `with_local` wins:
//!
//! ```rust
//! use primer_core::*;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Accent(&'static str);
//!
//! with_local(Accent("blue"), || {
//!     assert_eq!(local::<Accent>().unwrap(), Accent("blue"));
//!     with_local(Accent("red"), || {
//!         assert_eq!(local::<Accent>().unwrap(), Accent("red"));
//!     });
//! });
//! assert!(local::<Accent>().is_err());
//! ```
//!
//! Locals only exist while composing. Callbacks that run later must capture
//! what they need at composition time.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;

use crate::CoreError;

thread_local! {
    static LOCALS_STACK: RefCell<Vec<HashMap<TypeId, Box<dyn Any>>>> = const { RefCell::new(Vec::new()) };
}

pub fn with_local<T: Clone + 'static, R>(value: T, f: impl FnOnce() -> R) -> R {
    with_locals_frame(|| {
        set_local_boxed(TypeId::of::<T>(), Box::new(value));
        f()
    })
}

pub fn local<T: Clone + 'static>() -> Result<T, CoreError> {
    LOCALS_STACK.with(|st| {
        for frame in st.borrow().iter().rev() {
            if let Some(v) = frame.get(&TypeId::of::<T>())
                && let Some(t) = v.downcast_ref::<T>()
            {
                return Ok(t.clone());
            }
        }
        Err(CoreError::MissingLocal {
            type_name: std::any::type_name::<T>(),
        })
    })
}

pub fn local_or_default<T: Clone + Default + 'static>() -> T {
    local::<T>().unwrap_or_default()
}

fn with_locals_frame<R>(f: impl FnOnce() -> R) -> R {
    // Non-panicking frame guard (ensures pop on unwind)
    struct Guard;
    impl Drop for Guard {
        fn drop(&mut self) {
            LOCALS_STACK.with(|st| {
                st.borrow_mut().pop();
            });
        }
    }
    LOCALS_STACK.with(|st| st.borrow_mut().push(HashMap::new()));
    let _guard = Guard;
    f()
}

fn set_local_boxed(t: TypeId, v: Box<dyn Any>) {
    LOCALS_STACK.with(|st| {
        if let Some(top) = st.borrow_mut().last_mut() {
            top.insert(t, v);
        }
    });
}
