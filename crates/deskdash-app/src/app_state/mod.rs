//! Top-level dashboard state.
//!
//! Owns the window manager, the catalog, lazily loaded content, and the
//! activity feed. All mutation happens on the task that owns `DeskdashApp`;
//! stdin commands and relay events are applied one at a time.

mod core;
mod dispatch;
mod relay_events;

pub use core::{DeskdashApp, Outcome};
