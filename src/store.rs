use crate::{
    listener::{ListenerFn, ListenerRegistry},
    DispatchError, ListenerError, Reducer, Subscription,
};
use std::ops::Deref;
use std::{
    cell::RefCell,
    fmt::{self, Debug},
    rc::{Rc, Weak},
};

/// A wrapper for an [Rc] reference to a [Store].
///
/// This wrapper exists to hand the one store of an application to
/// every component which needs it, including listeners which need to
/// read the state after being notified. Cloning it does not clone the
/// store.
pub struct StoreRef<State, Action>(Rc<Store<State, Action>>);

impl<State, Action> StoreRef<State, Action> {
    /// See [Store::new()].
    pub fn new<R: Reducer<State, Action> + 'static>(reducer: R) -> Self {
        Self(Rc::new(Store::new(reducer)))
    }

    /// See [Store::with_state()].
    pub fn with_state<R: Reducer<State, Action> + 'static>(
        reducer: R,
        initial_state: State,
    ) -> Self {
        Self(Rc::new(Store::with_state(reducer, initial_state)))
    }

    pub(crate) fn downgrade(&self) -> Weak<Store<State, Action>> {
        Rc::downgrade(&self.0)
    }
}

impl<State, Action> Clone for StoreRef<State, Action> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<State, Action> Deref for StoreRef<State, Action> {
    type Target = Store<State, Action>;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl<State, Action> PartialEq for StoreRef<State, Action> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<State, Action> From<Store<State, Action>> for StoreRef<State, Action> {
    fn from(store: Store<State, Action>) -> Self {
        Self(Rc::new(store))
    }
}

impl<State: Debug, Action> Debug for StoreRef<State, Action> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&*self.0, f)
    }
}

/// This struct is designed to operate as the single source of truth
/// for some `State` within your application.
///
/// The current state of this store ([Store::state()]) can only be
/// modified by dispatching an `Action` via [Store::dispatch()] to the
/// store. These actions are taken by a [Reducer] which you provided
/// to the store (at construction) and a new current state is
/// produced. The previous state is never mutated, and remains valid
/// for anything still holding a reference to it.
///
/// Listeners subscribe to changes with [Store::subscribe()] and are
/// notified, in the order they subscribed, after every dispatch.
pub struct Store<State, Action> {
    /// This lock is used to prevent dispatch recursion.
    dispatch_lock: RefCell<()>,
    /// The [Reducer] for this store, which takes `Actions` and
    /// produces the next `State`.
    reducer: Box<dyn Reducer<State, Action>>,
    /// The current state of this store.
    state: RefCell<Rc<State>>,
    /// The listeners which are notified after every
    /// [Store::dispatch()].
    listeners: RefCell<ListenerRegistry>,
}

impl<State, Action> Store<State, Action> {
    /// Create a new [Store], which uses the specified `reducer` to
    /// handle `Action`s, starting with the reducer's
    /// [default_state()](Reducer::default_state()).
    pub fn new<R: Reducer<State, Action> + 'static>(reducer: R) -> Self {
        let initial_state = reducer.default_state();
        Self::with_state(reducer, initial_state)
    }

    /// Create a new [Store], which uses the specified `reducer` to
    /// handle `Action`s, and with the `initial_state`.
    pub fn with_state<R: Reducer<State, Action> + 'static>(
        reducer: R,
        initial_state: State,
    ) -> Self {
        Self {
            dispatch_lock: RefCell::new(()),
            reducer: Box::new(reducer),
            state: RefCell::new(Rc::new(initial_state)),
            listeners: RefCell::new(ListenerRegistry::default()),
        }
    }

    /// Get the current `State` stored in this store.
    ///
    /// Modifications to this state need to be performed by
    /// dispatching an `Action` to the store using
    /// [dispatch()](Store::dispatch()).
    pub fn state(&self) -> Rc<State> {
        self.state.borrow().clone()
    }

    /// The number of listeners currently subscribed to this store.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Dispatch an `Action` to the [Reducer] in order to replace the
    /// `State` in this store, and then notify the store listeners.
    ///
    /// The listeners notified are the ones subscribed when the
    /// notification starts; subscribing or unsubscribing from within
    /// a listener only affects later dispatches. If a listener
    /// registered with [try_subscribe()](Store::try_subscribe())
    /// fails, the remaining listeners are skipped and the failure is
    /// returned. The new state is kept either way.
    ///
    /// Dispatching to a store from within one of its own listeners is
    /// rejected with [DispatchError::Reentrant].
    pub fn dispatch<A: Into<Action>>(&self, action: A) -> Result<(), DispatchError> {
        self.dispatch_impl(action.into())
    }

    /// Concrete version of [Store::dispatch()], to avoid generating
    /// a copy of this function per type that implements
    /// `Into<Action>`.
    fn dispatch_impl(&self, action: Action) -> Result<(), DispatchError> {
        let _lock = match self.dispatch_lock.try_borrow_mut() {
            Ok(lock) => lock,
            Err(_) => {
                log::debug!("rejected reentrant dispatch");
                return Err(DispatchError::Reentrant);
            }
        };

        let next_state = self.reducer.reduce(&self.state(), &action);
        *self.state.borrow_mut() = next_state;

        self.notify_listeners()
    }

    /// Notify every listener subscribed at the time of the call, in
    /// subscription order, stopping at the first failure.
    fn notify_listeners(&self) -> Result<(), DispatchError> {
        let listeners = self.listeners.borrow().snapshot();
        log::trace!("notifying {} listener(s)", listeners.len());

        for listener in listeners {
            if let Err(source) = listener.notify() {
                log::debug!("listener {} failed: {}", listener.id(), source);
                return Err(DispatchError::Listener {
                    id: listener.id(),
                    source,
                });
            }
        }

        Ok(())
    }

    /// Subscribe a listener to changes in the store state. It is
    /// called with no arguments after every
    /// [dispatch()][Store::dispatch()] which starts after this call,
    /// and is not called immediately.
    ///
    /// Use [Store::state()] from within the listener to read the new
    /// state. Every call registers a new listener, even for the same
    /// closure; the returned [Subscription] removes only this one.
    pub fn subscribe<L>(&self, listener: L) -> Subscription
    where
        L: Fn() + 'static,
    {
        self.insert_listener(Rc::new(move || -> Result<(), ListenerError> {
            listener();
            Ok(())
        }))
    }

    /// Subscribe a fallible listener to changes in the store state.
    ///
    /// Behaves like [Store::subscribe()], except that an `Err`
    /// returned by the listener aborts the notification of the
    /// remaining listeners and is returned from
    /// [dispatch()][Store::dispatch()] as
    /// [DispatchError::Listener].
    pub fn try_subscribe<L, E>(&self, listener: L) -> Subscription
    where
        L: Fn() -> Result<(), E> + 'static,
        E: Into<ListenerError>,
    {
        self.insert_listener(Rc::new(move || -> Result<(), ListenerError> {
            listener().map_err(Into::into)
        }))
    }

    fn insert_listener(&self, listener: ListenerFn) -> Subscription {
        let subscription = self.listeners.borrow_mut().insert(listener);
        log::trace!("subscribed listener {}", subscription.id());
        subscription
    }
}

impl<State: Debug, Action> Debug for Store<State, Action> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state.borrow())
            .field("listeners", &self.listener_count())
            .finish()
    }
}
