//! Headless rendition of the upload page: a [`models::page::Page`] stands in
//! for the DOM and the controller functions are the event handlers wired to
//! page load, the refresh button and the upload form.

pub mod client;
pub mod controller;
pub mod errors;
pub mod models;
