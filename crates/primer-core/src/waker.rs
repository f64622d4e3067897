use crossbeam_channel::{Receiver, Sender, TrySendError, bounded};

/// Asks the runner for a new frame. Safe to clone into worker threads.
#[derive(Clone, Debug, Default)]
pub struct FrameWaker {
    tx: Option<Sender<()>>,
}

impl FrameWaker {
    /// A waker and the receiving end the runner listens on. Wakes coalesce:
    /// at most one pending wake is queued.
    pub fn channel() -> (FrameWaker, Receiver<()>) {
        let (tx, rx) = bounded(1);
        (FrameWaker { tx: Some(tx) }, rx)
    }

    pub fn noop() -> FrameWaker {
        FrameWaker { tx: None }
    }

    pub fn wake(&self) {
        if let Some(tx) = &self.tx {
            match tx.try_send(()) {
                Ok(()) | Err(TrySendError::Full(())) => {}
                Err(TrySendError::Disconnected(())) => {
                    log::trace!("frame waker: runner is gone");
                }
            }
        }
    }
}
