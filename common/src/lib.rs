//! Wire models shared between the browser client and the document store.
//!
//! Everything here mirrors the JSON the store speaks; no behavior lives in
//! this crate beyond small accessors.

pub mod model;
pub mod replies;
pub mod requests;
