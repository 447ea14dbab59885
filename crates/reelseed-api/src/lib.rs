//! Client for the PostgREST interface of a hosted data store.

pub mod error;
pub mod rest;
pub mod traits;

pub use error::RestError;
pub use rest::RestClient;
pub use traits::{RecordStore, UpsertResponse};
