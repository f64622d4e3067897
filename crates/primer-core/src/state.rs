use std::cell::RefCell;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::{Signal, remember_with_key, signal};

/// State holder pattern: state changes only through `reduce`.
pub trait Reducer: 'static {
    type State: Clone + 'static;
    type Action;

    fn initial_state() -> Self::State;
    fn reduce(state: &Self::State, action: Self::Action) -> Self::State;
}

pub struct Store<R: Reducer> {
    state: Signal<R::State>,
    _reducer: PhantomData<R>,
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            _reducer: PhantomData,
        }
    }
}

impl<R: Reducer> Store<R> {
    pub fn new() -> Self {
        Self {
            state: signal(R::initial_state()),
            _reducer: PhantomData,
        }
    }

    pub fn state(&self) -> R::State {
        self.state.get()
    }

    pub fn dispatch(&self, action: R::Action) {
        let next = self.state.with(|s| R::reduce(s, action));
        self.state.set(next);
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}

pub fn remember_reducer<R: Reducer>(key: &str) -> Rc<Store<R>> {
    remember_with_key(format!("reducer:{key}"), Store::<R>::new)
}

/// Cached value, recomputed only when its dependencies change.
pub struct DerivedState<K, T> {
    cached: RefCell<Option<(K, T)>>,
}

impl<K: PartialEq, T: Clone> DerivedState<K, T> {
    pub fn new() -> Self {
        Self {
            cached: RefCell::new(None),
        }
    }

    pub fn get(&self, deps: K, compute: impl FnOnce(&K) -> T) -> T {
        if let Some((k, v)) = self.cached.borrow().as_ref()
            && *k == deps
        {
            return v.clone();
        }
        let v = compute(&deps);
        *self.cached.borrow_mut() = Some((deps, v.clone()));
        v
    }
}

impl<K: PartialEq, T: Clone> Default for DerivedState<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

pub fn remember_memo<K: PartialEq + 'static, T: Clone + 'static>(
    key: &str,
    deps: K,
    compute: impl FnOnce(&K) -> T,
) -> T {
    let memo = remember_with_key(format!("memo:{key}"), DerivedState::<K, T>::new);
    memo.get(deps, compute)
}
