//! # Appointments Core
//!
//! Domain types and the pure scheduling logic behind the appointment tool
//! server. Nothing in this crate performs I/O: the current date is injected
//! through [`clock::Clock`], and every operation is a synchronous function of
//! its input.
//!
//! - **models**: wire types exchanged with callers (requests, slots, results)
//! - **scheduling**: query resolution, the slot generator, doctor assignment
//!   and the booking check
//! - **errors**: the domain error type shared with the API crate

pub mod clock;
pub mod errors;
pub mod mock;
pub mod models;
pub mod scheduling;
