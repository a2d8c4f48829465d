//! Reflow Core - single-store, reducer-based state container
//!
//! This crate provides the store component of reflow:
//! - A generic [`Store`] holding one state value, one reducer, and an
//!   ordered listener registry
//! - The [`Action`] trait for messages describing intended state changes
//! - The [`Reducer`] trait for pure state transitions
//! - [`Subscription`] handles for removing listeners
//!
//! ## The four operations
//!
//! A store exposes exactly four operations: [`Store::get_state`] reads the
//! current state, [`Store::dispatch`] feeds an action through the current
//! reducer and commits the result, [`Store::subscribe`] registers a listener
//! to run after every successful dispatch, and [`Store::replace_reducer`]
//! swaps the reducer for all future dispatches.
//!
//! Stores are explicitly constructed instances, never process-wide
//! singletons: any number of independent stores can coexist and each is a
//! cheaply cloneable handle.

mod action;
mod error;
mod reducer;
mod store;
mod subscription;

pub use action::Action;
pub use error::{BoxError, Error, Result};
pub use reducer::{try_reducer_fn, Reducer, TryReducerFn};
pub use store::Store;
pub use subscription::{Subscription, SubscriptionId};
