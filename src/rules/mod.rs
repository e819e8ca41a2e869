//! Move validation.
//!
//! Decides whether a requested move is legal and computes the resulting
//! board:
//! - ordinary moves, hits and bar re-entry (`validator`)
//! - bear-off and the overkill rule (`bear_off`)
//!
//! Nothing here mutates match state. The engine commits a `Resolution` only
//! after every check has passed.

mod bear_off;
mod validator;

pub use validator::{MoveValidator, Resolution};
