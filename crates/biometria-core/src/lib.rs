// SPDX-License-Identifier: MIT
//
// Biometría — Core types, configuration, and input validation shared across
// all crates.

pub mod config;
pub mod error;
pub mod types;
pub mod validate;

pub use config::{BiometriaConfig, ConfigUpdate, Credentials};
pub use error::{BiometriaError, ErrorCode, ValidationError};
pub use types::*;
pub use validate::validate;
