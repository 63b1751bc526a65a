// SPDX-License-Identifier: MIT
//
// Error taxonomy for the Biometría bridge.
//
// Runtime validation failures are reported as `ValidationError` — a
// machine-readable code plus a human-readable message, mirroring the wire
// shape the hybrid shell consumes.  Infrastructure faults (asset hooks,
// bridge bootstrap) use the `BiometriaError` enum instead.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Machine-readable error codes for validation failures.
///
/// The fixed variants are produced by this layer; `Native` carries any code
/// the platform implementation reports (e.g. `CAMERA_PERMISSION_DENIED`,
/// `CANCELLED`, `PARSE_ERROR`) through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ErrorCode {
    /// `configure` was never called with a usable credentials pair.
    CredentialsNotConfigured,
    /// Cedula or dactilar code missing/empty.
    InvalidParams,
    /// Cedula is not exactly 10 ASCII digits.
    InvalidCedula,
    /// Dactilar code does not match letter + 4 digits + letter + 4 digits.
    InvalidCodDactilar,
    /// The platform layer failed without reporting a code.
    UnknownError,
    /// Code supplied by the platform layer, passed through verbatim.
    Native(String),
}

impl ErrorCode {
    /// Wire representation of the code.
    pub fn as_str(&self) -> &str {
        match self {
            Self::CredentialsNotConfigured => "CREDENTIALS_NOT_CONFIGURED",
            Self::InvalidParams => "INVALID_PARAMS",
            Self::InvalidCedula => "INVALID_CEDULA",
            Self::InvalidCodDactilar => "INVALID_COD_DACTILAR",
            Self::UnknownError => "UNKNOWN_ERROR",
            Self::Native(code) => code,
        }
    }

    /// Default human-readable message for the code.
    ///
    /// Messages are kept in Spanish — the audience is the Ecuadorian
    /// citizen-facing apps this bridge ships in.
    pub fn default_message(&self) -> &str {
        match self {
            Self::CredentialsNotConfigured => {
                "Debe configurar las credenciales antes de validar"
            }
            Self::InvalidParams => "Se requiere cedula y codigo dactilar",
            Self::InvalidCedula => "La cedula debe tener 10 digitos",
            Self::InvalidCodDactilar => {
                "El codigo dactilar debe tener 10 caracteres (ej: V3331V2222)"
            }
            Self::UnknownError | Self::Native(_) => "Error desconocido en la validacion",
        }
    }
}

impl From<String> for ErrorCode {
    fn from(code: String) -> Self {
        match code.as_str() {
            "CREDENTIALS_NOT_CONFIGURED" => Self::CredentialsNotConfigured,
            "INVALID_PARAMS" => Self::InvalidParams,
            "INVALID_CEDULA" => Self::InvalidCedula,
            "INVALID_COD_DACTILAR" => Self::InvalidCodDactilar,
            "UNKNOWN_ERROR" => Self::UnknownError,
            _ => Self::Native(code),
        }
    }
}

impl From<ErrorCode> for String {
    fn from(code: ErrorCode) -> Self {
        code.as_str().to_owned()
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validation failure as delivered to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{code}: {message}")]
pub struct ValidationError {
    /// Machine-readable code (see [`ErrorCode`]).
    pub code: ErrorCode,
    /// Human-readable message.
    pub message: String,
}

impl ValidationError {
    /// Build an error from a code with its default message.
    pub fn new(code: ErrorCode) -> Self {
        let message = code.default_message().to_owned();
        Self { code, message }
    }

    /// Build an error with an explicit message.
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Top-level error for infrastructure operations.
#[derive(Debug, Error)]
pub enum BiometriaError {
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("platform bridge error: {0}")]
    Bridge(String),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, BiometriaError>;
