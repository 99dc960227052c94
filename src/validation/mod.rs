//! Error types for the navigation core

pub mod error;

pub use error::{NavError, NavResult};
