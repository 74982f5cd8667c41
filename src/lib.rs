//! Workspace umbrella crate: re-exports [`borders_core`] so the demos under
//! `demos/` build against a single dependency.
pub use borders_core::*;
