//! Wire types shared between the API client and the frontend.
//!
//! Everything here mirrors the backend's JSON schema verbatim, including the
//! `rol` and `gener` field spellings. The backend owns validation; these
//! types only describe shapes.

pub mod auth;
pub mod envelope;
pub mod events;
pub mod stats;
pub mod uploads;

pub use envelope::{Envelope, ResponseKind};
