use crate::ListenerId;
use thiserror::Error;

/// The error type a fallible listener (see
/// [Store::try_subscribe()](crate::Store::try_subscribe())) reports a
/// failure with.
pub type ListenerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors produced by [Store::dispatch()](crate::Store::dispatch()).
#[derive(Debug, Error)]
pub enum DispatchError {
    /// `dispatch()` was called on a store which was already in the
    /// middle of a dispatch, typically from within a listener. The
    /// nested action was not reduced.
    #[error("dispatch called while a dispatch is already in progress")]
    Reentrant,

    /// A listener failed while being notified. The state change had
    /// already been applied; the listeners after this one were not
    /// notified during this dispatch.
    #[error("listener {id} failed during notification: {source}")]
    Listener {
        id: ListenerId,
        #[source]
        source: ListenerError,
    },
}

impl DispatchError {
    /// The id of the listener which failed, if this error was caused
    /// by a listener.
    pub fn listener_id(&self) -> Option<ListenerId> {
        match self {
            DispatchError::Listener { id, .. } => Some(*id),
            DispatchError::Reentrant => None,
        }
    }
}
