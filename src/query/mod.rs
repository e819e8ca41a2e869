//! Query surface.
//!
//! Read-only projections for external consumers: per-position counts,
//! turn and dice flags, seats, stake and winner. `MatchView` bundles them
//! into one serializable value.

mod surface;
mod view;

pub use view::{MatchView, SideView, Winner};
