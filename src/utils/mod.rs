//! Small helpers shared across the crate.

pub mod wiql;

pub use wiql::to_wiql_datetime;
