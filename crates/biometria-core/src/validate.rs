// SPDX-License-Identifier: MIT
//
// Input validation for the `validar` entry point.
//
// Checks run in a fixed order and short-circuit at the first failure, so a
// caller with no credentials configured always sees
// CREDENTIALS_NOT_CONFIGURED before any field-format complaint.

use tracing::debug;

use crate::config::BiometriaConfig;
use crate::error::{ErrorCode, ValidationError};
use crate::types::{NormalizedRequest, ValidationRequest};

/// Validate a request against the configured client.
///
/// Order: credentials configured → both fields present → cedula format →
/// dactilar-code format. The dactilar code is uppercased before the format
/// check and the uppercased form is what the returned request carries.
pub fn validate(
    config: &BiometriaConfig,
    request: &ValidationRequest,
) -> Result<NormalizedRequest, ValidationError> {
    if config.usable_credentials().is_none() {
        return Err(ValidationError::new(ErrorCode::CredentialsNotConfigured));
    }

    if request.cedula.is_empty() || request.cod_dactilar.is_empty() {
        return Err(ValidationError::new(ErrorCode::InvalidParams));
    }

    if !is_valid_cedula(&request.cedula) {
        debug!(len = request.cedula.len(), "cedula failed format check");
        return Err(ValidationError::new(ErrorCode::InvalidCedula));
    }

    let cod_dactilar = request.cod_dactilar.to_ascii_uppercase();
    if !is_valid_cod_dactilar(&cod_dactilar) {
        debug!("dactilar code failed format check");
        return Err(ValidationError::new(ErrorCode::InvalidCodDactilar));
    }

    Ok(NormalizedRequest::new(request.cedula.clone(), cod_dactilar))
}

/// Exactly 10 ASCII digits.
fn is_valid_cedula(cedula: &str) -> bool {
    cedula.len() == 10 && cedula.bytes().all(|b| b.is_ascii_digit())
}

/// One uppercase letter, 4 digits, one uppercase letter, 4 digits.
/// The input must already be uppercased.
fn is_valid_cod_dactilar(code: &str) -> bool {
    let bytes = code.as_bytes();
    bytes.len() == 10
        && bytes[0].is_ascii_uppercase()
        && bytes[1..5].iter().all(|b| b.is_ascii_digit())
        && bytes[5].is_ascii_uppercase()
        && bytes[6..10].iter().all(|b| b.is_ascii_digit())
}
