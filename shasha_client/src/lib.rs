//! Client side of the contact form: validation, the form state machine and
//! the HTTP client for the contact and newsletter endpoints.

pub mod api;
pub mod controller;
pub mod form;
mod http;
pub mod validate;
