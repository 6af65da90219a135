//! Page-agnostic logic: base-path resolution, document fetching, and
//! image URL derivation. Components stay thin by leaning on these.

pub mod base_path;
pub mod data;
pub mod images;

pub use base_path::resolve_base_path;
pub use data::{fetch_itineraries, fetch_states, DataError};
