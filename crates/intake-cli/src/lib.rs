//! Library components of the csv-intake CLI.

pub mod logging;
pub mod summary;
