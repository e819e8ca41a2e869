//! Board state store.
//!
//! Holds checker counts per position and side. No behavior beyond
//! bookkeeping: legality is decided in `rules`.

mod store;

pub use store::Board;
