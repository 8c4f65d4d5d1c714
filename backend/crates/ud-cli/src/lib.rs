//! ud-cli library
//!
//! Exports the HTTP client and the command runner used by the `ud` binary.

pub mod app;
pub mod cli;
pub(crate) mod client;
pub mod commands;
pub mod error;
pub mod logger;
pub mod output;


pub use client::{CliClientResult, Client, ClientError};
pub use error::{CliError, Result as CliErrorResult};
