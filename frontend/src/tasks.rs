//! Cancellable background work for the simulated service calls.
//!
//! A [`TaskHandle`] owns the right to keep a spawned future alive. Dropping it,
//! or calling [`TaskHandle::cancel`], aborts the future at its next await point,
//! so a component that unmounts while a search or submission is pending never
//! touches its discarded state.

use std::future::Future;

use futures::future::{AbortHandle, Abortable};
use wasm_bindgen_futures::spawn_local;

#[derive(Debug)]
pub struct TaskHandle {
    abort: AbortHandle,
}

impl TaskHandle {
    pub fn cancel(&self) {
        self.abort.abort();
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.abort.abort();
    }
}

/// Wraps `future` so it resolves to `None` once its handle is cancelled.
pub fn cancellable<F>(future: F) -> (TaskHandle, impl Future<Output = Option<F::Output>>)
where
    F: Future,
{
    let (abort, registration) = AbortHandle::new_pair();
    let task = Abortable::new(future, registration);
    (TaskHandle { abort }, async move { task.await.ok() })
}

/// Runs `future` on the browser's microtask queue until it finishes or the
/// returned handle goes away.
pub fn spawn_cancellable<F>(future: F) -> TaskHandle
where
    F: Future<Output = ()> + 'static,
{
    let (handle, task) = cancellable(future);
    spawn_local(async move {
        if task.await.is_none() {
            log::debug!("background task cancelled before completion");
        }
    });
    handle
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::block_on;

    #[test]
    fn completes_when_left_alone() {
        let (handle, task) = cancellable(async { 7 });
        assert_eq!(block_on(task), Some(7));
        assert!(!handle.abort.is_aborted());
    }

    #[test]
    fn cancel_before_completion_yields_none() {
        let (tx, rx) = oneshot::channel::<u32>();
        let (handle, task) = cancellable(rx);
        handle.cancel();
        let _ = tx.send(1);
        assert_eq!(block_on(task), None);
    }

    #[test]
    fn dropping_the_handle_cancels() {
        let (_tx, rx) = oneshot::channel::<u32>();
        let (handle, task) = cancellable(rx);
        drop(handle);
        assert_eq!(block_on(task), None);
    }
}
