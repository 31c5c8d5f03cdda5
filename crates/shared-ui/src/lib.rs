//! Component kit shared by every screen of the journal platform.
//!
//! Each component lives in `components/<name>/` next to its stylesheet.

pub mod components;

pub use components::*;
