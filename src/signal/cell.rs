use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Callback<T> = Rc<dyn Fn(&T)>;

struct CellInner<T> {
    value: T,
    subscribers: Vec<(u64, Callback<T>)>,
    next_id: u64,
}

/// A reactive value cell with subscribe/update semantics, decoupled from any
/// rendering technology.
///
/// `set` notifies subscribers only when the value actually changes.
/// Single-threaded by design (the host loop is event-driven and cooperative),
/// so the cell is deliberately not `Send`; clones share the same storage.
pub struct ValueCell<T> {
    inner: Rc<RefCell<CellInner<T>>>,
}

impl<T> Clone for ValueCell<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + PartialEq + 'static> ValueCell<T> {
    /// Create a cell holding `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(CellInner {
                value: initial,
                subscribers: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Current value.
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Update the value, notifying subscribers only on change.
    pub fn set(&self, value: T) {
        // Collect callbacks before invoking so a callback may subscribe or
        // drop a subscription without hitting a live borrow.
        let callbacks: Vec<Callback<T>> = {
            let mut inner = self.inner.borrow_mut();
            if inner.value == value {
                return;
            }
            inner.value = value.clone();
            inner.subscribers.iter().map(|(_, f)| Rc::clone(f)).collect()
        };
        for callback in callbacks {
            callback(&value);
        }
    }

    /// Register a change listener. Delivery stops when the returned guard is
    /// dropped; no notification may arrive after that.
    #[must_use = "dropping the subscription detaches the listener"]
    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> Subscription<T> {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscribers.push((id, Rc::new(f)));
        Subscription {
            id,
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }
}

/// Guard for one [`ValueCell`] subscription; detaches on drop.
pub struct Subscription<T> {
    id: u64,
    inner: Weak<RefCell<CellInner<T>>>,
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.borrow_mut().subscribers.retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/signal/cell.rs"]
mod tests;
