//! Replaying broadcast of full snapshots, the backbone of every store.
use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Stream of full snapshots. The first item is the value at subscription time.
pub type Snapshots<T> = UnboundedReceiver<T>;

pub struct Subject<T> {
    state: Mutex<State<T>>,
}

struct State<T> {
    value: T,
    subscribers: Vec<UnboundedSender<T>>,
}

impl<T: Clone> State<T> {
    fn publish(&mut self) {
        let value = &self.value;
        // Dropped receivers fail the send and are forgotten here.
        self.subscribers
            .retain(|subscriber| subscriber.unbounded_send(value.clone()).is_ok());
    }
}

impl<T: Clone> Subject<T> {
    pub fn new(value: T) -> Self {
        Self {
            state: Mutex::new(State {
                value,
                subscribers: Vec::new(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, State<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get(&self) -> T {
        self.lock().value.clone()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.lock().value)
    }

    pub fn subscribe(&self) -> Snapshots<T> {
        let (tx, rx) = mpsc::unbounded();
        let mut state = self.lock();
        // Receivers dropped since the last publish are released here too.
        state.subscribers.retain(|subscriber| !subscriber.is_closed());
        if tx.unbounded_send(state.value.clone()).is_ok() {
            state.subscribers.push(tx);
        }
        rx
    }

    /// Runs `f` against the value and publishes when it returns `Ok`.
    pub fn try_modify<R, E>(&self, f: impl FnOnce(&mut T) -> Result<R, E>) -> Result<R, E> {
        let mut state = self.lock();
        let outcome = f(&mut state.value)?;
        state.publish();
        Ok(outcome)
    }

    /// Runs `f` against the value and publishes when it reports a change.
    pub fn modify(&self, f: impl FnOnce(&mut T) -> bool) -> bool {
        self.try_modify(|value| if f(value) { Ok(()) } else { Err(()) })
            .is_ok()
    }

    pub fn subscriber_count(&self) -> usize {
        self.lock()
            .subscribers
            .iter()
            .filter(|subscriber| !subscriber.is_closed())
            .count()
    }
}

impl<T: Clone + Default> Default for Subject<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_subscribers_receive_the_current_value() {
        let subject = Subject::new(vec![1, 2]);
        let mut snapshots = subject.subscribe();
        assert_eq!(snapshots.try_next().unwrap(), Some(vec![1, 2]));
        assert!(snapshots.try_next().is_err());
    }

    #[test]
    fn changes_reach_every_subscriber() {
        let subject = Subject::new(Vec::<u32>::new());
        let mut first = subject.subscribe();
        let mut second = subject.subscribe();

        assert!(subject.modify(|list| {
            list.push(3);
            true
        }));

        for snapshots in [&mut first, &mut second] {
            assert_eq!(snapshots.try_next().unwrap(), Some(vec![]));
            assert_eq!(snapshots.try_next().unwrap(), Some(vec![3]));
        }
    }

    #[test]
    fn unchanged_values_are_not_published() {
        let subject = Subject::new(5);
        let mut snapshots = subject.subscribe();
        let _ = snapshots.try_next();

        assert!(!subject.modify(|_| false));
        assert!(snapshots.try_next().is_err());

        let result: Result<(), &str> = subject.try_modify(|_| Err("nope"));
        assert_eq!(result, Err("nope"));
        assert!(snapshots.try_next().is_err());
    }

    #[test]
    fn dropped_subscribers_are_pruned_on_publish() {
        let subject = Subject::new(0u8);
        let kept = subject.subscribe();
        drop(subject.subscribe());

        subject.modify(|value| {
            *value += 1;
            true
        });

        assert_eq!(subject.subscriber_count(), 1);
        drop(kept);
        assert_eq!(subject.subscriber_count(), 0);
    }

    #[test]
    fn dropped_subscribers_are_released_without_a_publish() {
        let subject = Subject::new(vec![0u8; 4]);
        for _ in 0..1_000 {
            drop(subject.subscribe());
        }
        assert!(subject.lock().subscribers.len() <= 1);

        let live = subject.subscribe();
        assert_eq!(subject.lock().subscribers.len(), 1);
        drop(live);
        drop(subject.subscribe());
        assert_eq!(subject.lock().subscribers.len(), 1);
        assert_eq!(subject.subscriber_count(), 0);
    }
}
