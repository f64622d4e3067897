use std::cell::RefCell;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use crossbeam_channel::{after, bounded, select, tick};
use primer_core::*;
use primer_navigation::Navigator;
use primer_ui::*;

use crate::DemoPage;

/// How fast the child's timer ticks and how long its fake load takes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LifecycleTiming {
    pub tick: Duration,
    pub load: Duration,
}

impl Default for LifecycleTiming {
    fn default() -> Self {
        Self {
            tick: Duration::from_secs(1),
            load: Duration::from_secs(2),
        }
    }
}

pub fn LifecycleDemo(nav: &Navigator) -> View {
    let show = remember_with_key("show-child", || signal(false));
    let mounts = remember_with_key("mounts", || signal(0u32));
    let child_scope = remember_with_key("child-scope", || RefCell::new(None::<Scope>));

    {
        let mounts = mounts.clone();
        disposable_effect("mount-count", show.get(), move |shown| {
            if *shown {
                mounts.update(|m| *m += 1);
            }
            Dispose::noop()
        });
    }

    let child = if show.get() {
        let scope = child_scope
            .borrow_mut()
            .get_or_insert_with(Scope::new)
            .clone();
        Some(scope.run(LifecycleChild))
    } else {
        let gone = child_scope.borrow_mut().take();
        if let Some(scope) = gone {
            scope.dispose();
        }
        None
    };

    let toggle = {
        let show = show.clone();
        move || show.update(|s| *s = !*s)
    };

    DemoPage(
        nav,
        (
            Button(
                if show.get() {
                    "Hide Child Component"
                } else {
                    "Show Child Component"
                },
                toggle,
            ),
            Text(format!("Child has been mounted {} times", mounts.get())),
            child,
            Section("What to watch").child(Bullets(&[
                "Show mounts the child and starts its timer",
                "Hide unmounts it and runs its cleanup",
                "The timer stops when the child goes away",
            ])),
        ),
    )
}

struct ChildState {
    seconds: Arc<AtomicU64>,
    loaded: Arc<AtomicBool>,
}

fn LifecycleChild() -> View {
    let state = remember_with_key("child", || ChildState {
        seconds: Arc::new(AtomicU64::new(0)),
        loaded: Arc::new(AtomicBool::new(false)),
    });
    let alive = remember_with_key("alive", || signal(None::<String>));

    {
        let seconds = state.seconds.clone();
        let loaded = state.loaded.clone();
        let timing = local_or_default::<LifecycleTiming>();
        let waker = local_or_default::<FrameWaker>();
        disposable_effect("timer", (), move |_| {
            log::info!("child mounted; fetching data");
            let (stop_tx, stop_rx) = bounded::<()>(0);
            let ticker = tick(timing.tick);
            let load = after(timing.load);
            let spawned = std::thread::Builder::new()
                .name("lifecycle-timer".into())
                .spawn(move || {
                    loop {
                        select! {
                            recv(ticker) -> _ => {
                                seconds.fetch_add(1, Ordering::Relaxed);
                                waker.wake();
                            }
                            recv(load) -> _ => {
                                loaded.store(true, Ordering::Relaxed);
                                log::info!("child data fetched");
                                waker.wake();
                            }
                            recv(stop_rx) -> _ => break,
                        }
                    }
                });
            if let Err(e) = spawned {
                log::error!("could not start the lifecycle timer: {e}");
            }
            on_unmount(move || {
                log::info!("child unmounting; clearing timer");
                drop(stop_tx);
            })
        });
    }

    let data = if state.loaded.load(Ordering::Relaxed) {
        Text("Data: Item 1, Item 2, Item 3")
    } else {
        Spinner("Loading data...")
    };

    Section("Child component").child((
        Text(format!(
            "Timer: {} seconds",
            state.seconds.load(Ordering::Relaxed)
        )),
        data,
        Button("Am I alive?", {
            let alive = alive.clone();
            move || alive.set(Some("I am still alive!".into()))
        }),
        alive.get().map(|a| SuccessText(a)),
    ))
}
