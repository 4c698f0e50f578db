//! Champion roster browser over the Data Dragon feed.
//!
//! The catalog, filter engine and detail assembly hold no reference to any
//! output device; the terminal front end lives in [`display`] and [`shell`].

pub mod api;
pub mod catalog;
pub mod config;
pub mod controller;
pub mod detail;
pub mod display;
pub mod error;
pub mod session;
pub mod shell;

pub use error::AppError;
