//! A minimal unidirectional state container (similar to redux).
//!
//! A [Store] holds a single `State`, which is only ever replaced by
//! dispatching an `Action` through the store's [Reducer]. Listeners
//! subscribed to the store are notified synchronously, in subscription
//! order, after every dispatch.
//!
//! ```
//! use reducer_store::{Reducer, Store};
//! use std::rc::Rc;
//!
//! enum Action {
//!     Add(i64),
//!     Clear,
//! }
//!
//! struct Total;
//!
//! impl Reducer<i64, Action> for Total {
//!     fn default_state(&self) -> i64 {
//!         0
//!     }
//!
//!     fn reduce(&self, total: &Rc<i64>, action: &Action) -> Rc<i64> {
//!         match action {
//!             Action::Add(amount) => Rc::new(**total + amount),
//!             Action::Clear => Rc::new(0),
//!         }
//!     }
//! }
//!
//! let store = Store::new(Total);
//! let subscription = store.subscribe(|| println!("total changed"));
//!
//! store.dispatch(Action::Add(5)).unwrap();
//! store.dispatch(Action::Add(-2)).unwrap();
//! assert_eq!(3, *store.state());
//!
//! subscription.unsubscribe();
//! store.dispatch(Action::Clear).unwrap();
//! assert_eq!(0, *store.state());
//! ```

mod error;
mod listener;
pub mod logger;
mod reducer;
mod store;

pub use error::*;
pub use listener::{ListenerId, Subscription};
pub use reducer::*;
pub use store::{Store, StoreRef};
