use crate::ListenerError;
use std::{
    cell::RefCell,
    fmt::{self, Debug, Display},
    rc::{Rc, Weak},
};

/// Identifies one registration of a listener with a
/// [Store](crate::Store). Subscribing the same callback twice
/// produces two different ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

pub(crate) type ListenerFn = Rc<dyn Fn() -> Result<(), ListenerError>>;

/// A registered callback, paired with the id of its registration.
#[derive(Clone)]
pub(crate) struct Listener {
    id: ListenerId,
    callback: ListenerFn,
}

impl Listener {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    pub fn notify(&self) -> Result<(), ListenerError> {
        (self.callback)()
    }
}

impl Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Listener({})", self.id)
    }
}

/// The listeners of a store, in subscription order.
///
/// The list is shared with the [Subscription]s handed out, which only
/// hold a weak reference to it, so a subscription never keeps a store's
/// listeners alive.
#[derive(Debug, Default)]
pub(crate) struct ListenerRegistry {
    listeners: Rc<RefCell<Vec<Listener>>>,
    next_id: u64,
}

impl ListenerRegistry {
    pub fn insert(&mut self, callback: ListenerFn) -> Subscription {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.borrow_mut().push(Listener { id, callback });

        Subscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    /// A copy of the current listeners. Changes to the registry made
    /// while iterating the snapshot do not affect it.
    pub fn snapshot(&self) -> Vec<Listener> {
        self.listeners.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }
}

/// The handle returned by [Store::subscribe()](crate::Store::subscribe())
/// used to remove that listener again.
///
/// Dropping a `Subscription` does *not* unsubscribe the listener.
#[derive(Debug, Clone)]
pub struct Subscription {
    id: ListenerId,
    listeners: Weak<RefCell<Vec<Listener>>>,
}

impl Subscription {
    /// The id of the registration this subscription controls.
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Remove the listener from the store, so that it is not notified
    /// by any dispatch which starts after this call. A dispatch which
    /// is currently notifying listeners still notifies it.
    ///
    /// Returns `true` if the listener was removed by this call. Calling
    /// it again, or after the store has been dropped, does nothing and
    /// returns `false`.
    pub fn unsubscribe(&self) -> bool {
        let listeners = match self.listeners.upgrade() {
            Some(listeners) => listeners,
            None => return false,
        };

        let mut listeners = listeners.borrow_mut();
        match listeners.iter().position(|listener| listener.id == self.id) {
            Some(index) => {
                listeners.remove(index);
                log::trace!("unsubscribed listener {}", self.id);
                true
            }
            None => false,
        }
    }

    /// Returns `true` while the listener is still registered.
    pub fn is_active(&self) -> bool {
        match self.listeners.upgrade() {
            Some(listeners) => listeners
                .borrow()
                .iter()
                .any(|listener| listener.id == self.id),
            None => false,
        }
    }
}
