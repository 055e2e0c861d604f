//! Application-level orchestration.
//!
//! This module owns the load/submit lifecycle: it executes UI commands
//! against the API, keeps collection loads serialized so a superseded
//! request can never apply out of order, and emits events back to the
//! presentation layers.

mod controller;

pub(crate) use controller::run_controller;
