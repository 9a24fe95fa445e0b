//! Filesystem primitives for prompt-weave
//!
//! Provides atomic writes, checksums and format-agnostic config loading.

pub mod checksum;
pub mod config;
pub mod error;
pub mod io;

pub use config::ConfigStore;
pub use error::{Error, Result};
