use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, RwLock, Weak};

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Registered change listeners for a [`State`].
struct Subscribers<T> {
    next_id: AtomicUsize,
    callbacks: Mutex<Vec<(usize, Callback<T>)>>,
}

impl<T> Subscribers<T> {
    fn new() -> Self {
        Self {
            next_id: AtomicUsize::new(0),
            callbacks: Mutex::new(Vec::new()),
        }
    }

    fn snapshot(&self) -> Vec<Callback<T>> {
        self.callbacks
            .lock()
            .map(|guard| guard.iter().map(|(_, cb)| Arc::clone(cb)).collect())
            .unwrap_or_default()
    }

    fn remove(&self, id: usize) {
        if let Ok(mut guard) = self.callbacks.lock() {
            guard.retain(|(entry_id, _)| *entry_id != id);
        }
    }
}

/// Observable state cell with interior mutability.
///
/// `State<T>` holds a value behind `Arc<RwLock<T>>`, so clones share the same
/// value. Every write replaces or updates the value under a single lock,
/// raises the dirty flag, and then notifies subscribers with the new value.
///
/// Subscribers get a copy of the value taken under the write lock and are
/// called after the lock is released, so a callback may read or write the
/// same state. A callback that writes back unconditionally recurses forever.
///
/// # Example
///
/// ```
/// use formstate::State;
///
/// let count = State::new(0);
/// let _sub = count.subscribe(|v| println!("count is now {v}"));
/// count.update(|v| *v += 1);
/// assert_eq!(count.get(), 1);
/// ```
pub struct State<T> {
    inner: Arc<RwLock<T>>,
    dirty: Arc<AtomicBool>,
    subscribers: Arc<Subscribers<T>>,
}

impl<T> State<T> {
    /// Create a new state with the given value
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
            dirty: Arc::new(AtomicBool::new(false)),
            subscribers: Arc::new(Subscribers::new()),
        }
    }

    /// Get a clone of the current value
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.inner
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Read the current value through a closure without cloning it
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        match self.inner.read() {
            Ok(guard) => f(&guard),
            Err(poisoned) => f(&poisoned.into_inner()),
        }
    }

    /// Set a new value
    pub fn set(&self, value: T)
    where
        T: Clone,
    {
        let snapshot = {
            let Ok(mut guard) = self.inner.write() else {
                return;
            };
            *guard = value;
            self.dirty.store(true, Ordering::SeqCst);
            self.has_subscribers().then(|| guard.clone())
        };
        if let Some(value) = snapshot {
            self.notify(&value);
        }
    }

    /// Update the value using a closure
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
        T: Clone,
    {
        let snapshot = {
            let Ok(mut guard) = self.inner.write() else {
                return;
            };
            f(&mut guard);
            self.dirty.store(true, Ordering::SeqCst);
            self.has_subscribers().then(|| guard.clone())
        };
        if let Some(value) = snapshot {
            self.notify(&value);
        }
    }

    /// Check if the state has been modified since last check
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    /// Register a callback that runs after every write.
    ///
    /// The callback stays registered for as long as the returned
    /// [`Subscription`] is alive.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, f: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
        T: 'static,
    {
        let id = self.subscribers.next_id.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut guard) = self.subscribers.callbacks.lock() {
            guard.push((id, Arc::new(f)));
        }

        let weak: Weak<Subscribers<T>> = Arc::downgrade(&self.subscribers);
        Subscription {
            unsubscribe: Some(Box::new(move || {
                if let Some(subscribers) = weak.upgrade() {
                    subscribers.remove(id);
                }
            })),
        }
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .callbacks
            .lock()
            .map(|guard| guard.len())
            .unwrap_or(0)
    }

    fn has_subscribers(&self) -> bool {
        self.subscriber_count() > 0
    }

    /// Runs with no lock held on the value.
    fn notify(&self, value: &T) {
        // Snapshot first so callbacks may subscribe or unsubscribe freely.
        for callback in self.subscribers.snapshot() {
            callback(value);
        }
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
            subscribers: Arc::clone(&self.subscribers),
        }
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for State<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.with(|value| {
            f.debug_struct("State")
                .field("value", value)
                .field("dirty", &self.is_dirty())
                .field("subscribers", &self.subscriber_count())
                .finish()
        })
    }
}

/// Handle for a registered [`State`] listener.
///
/// Dropping it removes the listener.
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    /// Remove the listener now.
    pub fn unsubscribe(mut self) {
        if let Some(f) = self.unsubscribe.take() {
            f();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(f) = self.unsubscribe.take() {
            f();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_marks_dirty() {
        let state = State::new(1);
        assert!(!state.is_dirty());
        state.set(2);
        assert!(state.is_dirty());
        assert_eq!(state.get(), 2);
        state.clear_dirty();
        assert!(!state.is_dirty());
    }

    #[test]
    fn test_clones_share_value() {
        let a = State::new(String::from("x"));
        let b = a.clone();
        b.update(|v| v.push('y'));
        assert_eq!(a.get(), "xy");
    }

    #[test]
    fn test_subscribers_see_new_value() {
        let state = State::new(0);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let _sub = state.subscribe(move |v| sink.lock().unwrap().push(*v));

        state.set(5);
        state.update(|v| *v += 1);

        assert_eq!(*seen.lock().unwrap(), vec![5, 6]);
    }

    #[test]
    fn test_dropping_subscription_unsubscribes() {
        let state = State::new(0);
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let sub = state.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(state.subscriber_count(), 1);

        state.set(1);
        drop(sub);
        state.set(2);

        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(state.subscriber_count(), 0);
    }

    #[test]
    fn test_callback_can_read_state() {
        let state = State::new(3);
        let reader = state.clone();
        let seen = Arc::new(AtomicUsize::new(0));
        let sink = Arc::clone(&seen);
        let _sub = state.subscribe(move |_| {
            sink.store(reader.get(), Ordering::SeqCst);
        });

        state.set(9);
        assert_eq!(seen.load(Ordering::SeqCst), 9);
    }

    #[test]
    fn test_callback_can_write_back() {
        let state = State::new(0);
        let writer = state.clone();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let _sub = state.subscribe(move |v| {
            sink.lock().unwrap().push(*v);
            if *v < 3 {
                writer.update(|n| *n += 1);
            }
        });

        state.set(1);

        assert_eq!(state.get(), 3);
        assert_eq!(*seen.lock().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_subscription_outlives_state() {
        let state = State::new(0);
        let sub = state.subscribe(|_| {});
        drop(state);
        sub.unsubscribe();
    }
}
