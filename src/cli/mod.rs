//! Command line presentation of the exchange table

pub mod convert;
pub mod crosses;
pub mod rates;
pub mod setup;
pub mod ui;
