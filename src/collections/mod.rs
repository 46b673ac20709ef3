//! Generic helpers over sequences and maps.
//!
//! - [`lists`]: slice/`Vec` operations, set algebra
//! - [`maps`]: `HashMap` projection, filtering and merging
//! - [`ListMap`]: map of keys to lists with in-place mutation

pub mod list_map;
pub mod lists;
pub mod maps;

pub use list_map::ListMap;
