//! Reflow FSA - flux standard action validation
//!
//! A flux standard action (FSA) is the conventional shape for
//! dynamically-typed actions: a plain key/value record with a string `type`
//! discriminator and nothing beyond the keys `type`, `payload`, `error`,
//! `meta`.
//!
//! This crate provides:
//! - A dynamic [`Value`] model (`ValueMap` preserves key insertion order)
//! - The shape predicates [`is_fsa`] and [`is_error`]
//! - [`FsaAction`], a validated action that implements
//!   [`reflow_core::Action`] so dynamic actions can be dispatched through a
//!   typed store
//!
//! The store never calls into this crate; applications validate at the
//! boundary, before dispatching.

mod action;
mod fsa;
mod value;

pub use action::{FsaAction, FsaError};
pub use fsa::{is_error, is_fsa};
pub use value::{Value, ValueMap};
