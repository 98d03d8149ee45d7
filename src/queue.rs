//! FIFO Task Queue
//!
//! Serializes async side effects so they run strictly in submission order.
//! Tasks are plain values; one locally-spawned worker drives them through an
//! async handler one at a time. Replaces ad-hoc promise chaining for the
//! window-title save/restore sequence.

use std::future::Future;

use futures::channel::mpsc;
use futures::StreamExt;

/// Sender half of the queue. Cheap to clone; safe to move into cleanup hooks.
pub struct TaskQueue<T> {
    tx: mpsc::UnboundedSender<T>,
}

impl<T> Clone for TaskQueue<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<T: 'static> TaskQueue<T> {
    /// Create a queue and spawn its worker on the browser event loop.
    pub fn spawn<F, Fut>(handler: F) -> Self
    where
        F: FnMut(T) -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        let (queue, worker) = Self::with_worker(handler);
        leptos::task::spawn_local(worker);
        queue
    }

    /// Create a queue plus its worker future, without spawning it.
    ///
    /// The worker finishes one task before starting the next and ends once
    /// every sender is dropped and the queue is drained.
    pub fn with_worker<F, Fut>(mut handler: F) -> (Self, impl Future<Output = ()>)
    where
        F: FnMut(T) -> Fut,
        Fut: Future<Output = ()>,
    {
        let (tx, mut rx) = mpsc::unbounded::<T>();
        let worker = async move {
            while let Some(task) = rx.next().await {
                handler(task).await;
            }
        };
        (Self { tx }, worker)
    }

    /// Append a task. It runs after every previously enqueued task finished.
    pub fn enqueue(&self, task: T) {
        let _ = self.tx.unbounded_send(task);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn tasks_run_in_submission_order() {
        let log = Rc::new(RefCell::new(Vec::new()));

        let (queue, worker) = TaskQueue::with_worker({
            let log = Rc::clone(&log);
            move |n: u32| {
                let log = Rc::clone(&log);
                async move {
                    log.borrow_mut().push(n);
                }
            }
        });

        queue.enqueue(1);
        queue.enqueue(2);
        queue.enqueue(3);
        drop(queue);

        futures::executor::block_on(worker);
        assert_eq!(*log.borrow(), vec![1, 2, 3]);
    }

    #[test]
    fn tasks_enqueued_mid_run_land_at_the_back() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let relay: Rc<RefCell<Option<TaskQueue<u32>>>> = Rc::new(RefCell::new(None));

        let (queue, worker) = TaskQueue::with_worker({
            let log = Rc::clone(&log);
            let relay = Rc::clone(&relay);
            move |n: u32| {
                let log = Rc::clone(&log);
                let relay = Rc::clone(&relay);
                async move {
                    log.borrow_mut().push(n);
                    if n == 1 {
                        // A task submitted during execution must not jump
                        // ahead of already queued work.
                        if let Some(q) = relay.borrow_mut().take() {
                            q.enqueue(3);
                        }
                    }
                }
            }
        });

        *relay.borrow_mut() = Some(queue.clone());
        queue.enqueue(1);
        queue.enqueue(2);
        drop(queue);

        futures::executor::block_on(worker);
        assert_eq!(*log.borrow(), vec![1, 2, 3]);
    }

    #[test]
    fn worker_ends_when_all_senders_dropped() {
        let (queue, worker) = TaskQueue::with_worker(|_: u32| async {});
        let clone = queue.clone();
        drop(queue);
        drop(clone);

        // Must not hang.
        futures::executor::block_on(worker);
    }
}
