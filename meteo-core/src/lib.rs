//! Core library for the `meteo` CLI.
//!
//! This crate defines:
//! - The request/response model for the Open-Meteo forecast endpoint
//! - A typed error enum covering input, transport, and contract failures
//! - `WeatherClient`, which performs the single GET per call
//!
//! It is used by `meteo-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod error;
pub mod model;

pub use client::{DEFAULT_TIMEOUT_SECS, DEFAULT_TIMEZONE, FORECAST_ENDPOINT, WeatherClient};
pub use error::Error;
pub use model::{WeatherRequest, WeatherResponse};
