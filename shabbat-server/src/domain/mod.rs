//! Domain types for the Shabbat times API.
//!
//! The only domain data is the fixed catalog of cities the API answers for.

mod catalog;
mod city;
mod error;

pub use catalog::CityCatalog;
pub use city::City;
pub use error::UnknownCity;
