//! Meowseum gallery layout: splits measured slides into columns, evens out the
//! column heights, and serves the result over a small JSON API.

pub mod config;
pub mod errors;
pub mod layout;
pub mod routes;
pub mod state;
