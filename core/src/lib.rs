//! Core library for the remote to-do client
//!
//! This crate contains the non-visual logic, including:
//! - The task model and the remote service contract
//! - The task list view-model
//! - Remote service configuration

pub mod config;
pub mod error;
pub mod task;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
