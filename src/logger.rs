//! A listener which logs the state of a [Store](crate::Store) after
//! every dispatch, using the [log] facade. Installing a logger
//! implementation is left to the application.

use crate::{StoreRef, Subscription};
use std::fmt::Debug;

/// The level a [StateLogger] logs at.
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
}

impl LogLevel {
    /// Log `message` through the [log] macro matching this level.
    pub fn log<S: AsRef<str>>(&self, message: S) {
        let message = message.as_ref();
        match self {
            LogLevel::Trace => log::trace!("{}", message),
            LogLevel::Debug => log::debug!("{}", message),
            LogLevel::Info => log::info!("{}", message),
            LogLevel::Warn => log::warn!("{}", message),
        }
    }
}

/// Logs at [LogLevel::Debug].
impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Debug
    }
}

/// Logs `state: {:?}` each time the store it is attached to has
/// dispatched an action.
///
/// ```
/// use reducer_store::{logger::{LogLevel, StateLogger}, StoreRef};
/// use std::rc::Rc;
///
/// let store = StoreRef::new(|count: &Rc<u32>, step: &u32| Rc::new(**count + *step));
/// let subscription = StateLogger::new().log_level(LogLevel::Info).attach(&store);
///
/// store.dispatch(2u32).unwrap();
/// subscription.unsubscribe();
/// ```
pub struct StateLogger {
    log_level: LogLevel,
}

impl StateLogger {
    /// Create a logger which logs at the default [LogLevel::Debug].
    pub fn new() -> Self {
        StateLogger {
            log_level: LogLevel::default(),
        }
    }

    /// Set the level the state is logged at.
    pub fn log_level(mut self, log_level: LogLevel) -> Self {
        self.log_level = log_level;
        self
    }

    /// Subscribe this logger to `store`. The listener only holds a weak
    /// reference to the store, so it does not keep the store alive.
    pub fn attach<State, Action>(self, store: &StoreRef<State, Action>) -> Subscription
    where
        State: Debug + 'static,
        Action: 'static,
    {
        let store_weak = store.downgrade();
        store.subscribe(move || {
            if let Some(store) = store_weak.upgrade() {
                self.log_level.log(format!("state: {:?}", store.state()));
            }
        })
    }
}

impl Default for StateLogger {
    fn default() -> Self {
        Self::new()
    }
}
