//! Core types for the SpaceX launch records dashboard.
//!
//! - `launch`: the `LaunchRecord` row type and its CSV parser
//! - `site`: dropdown selection (`ALL` or a single launch site)
//! - `payload`: payload range filter and range slider constants
//! - `dataset`: dataset location constants and the fetch-and-cache loader

pub mod dataset;
pub mod launch;
pub mod payload;
pub mod site;

pub use launch::LaunchRecord;
pub use payload::PayloadRange;
pub use site::SiteSelection;
