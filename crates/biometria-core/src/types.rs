// SPDX-License-Identifier: MIT
//
// Domain types for the Biometría validation flow.
//
// Types that mirror a JavaScript wire shape (`ValidationRequest`,
// `ValidationResult`) keep the camelCase field names of the hybrid shell.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{BiometriaConfig, Credentials};
use crate::error::{ErrorCode, ValidationError};

/// Raw caller input for one validation attempt. Constructed fresh per call,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRequest {
    /// 10-digit national identity number.
    pub cedula: String,
    /// 10-character fingerprint classification code (e.g. `V3331V2222`).
    pub cod_dactilar: String,
}

/// A request that passed input validation.
///
/// Only obtainable through [`crate::validate`]; the dactilar code is already
/// uppercased, so downstream marshalling can use the fields as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRequest {
    cedula: String,
    cod_dactilar: String,
}

impl NormalizedRequest {
    pub(crate) fn new(cedula: String, cod_dactilar: String) -> Self {
        Self {
            cedula,
            cod_dactilar,
        }
    }

    pub fn cedula(&self) -> &str {
        &self.cedula
    }

    /// Uppercased dactilar code.
    pub fn cod_dactilar(&self) -> &str {
        &self.cod_dactilar
    }
}

/// Arguments of the native `validar` operation, in its fixed positional
/// order: cedula, dactilar code, token endpoint, biometria endpoint,
/// username, password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationArgs {
    pub cedula: String,
    pub cod_dactilar: String,
    pub token_endpoint: String,
    pub biometria_endpoint: String,
    pub username: String,
    pub password: String,
}

impl ValidationArgs {
    /// Marshal a validated request plus configuration into the native call
    /// shape.
    pub fn new(
        request: &NormalizedRequest,
        config: &BiometriaConfig,
        credentials: &Credentials,
    ) -> Self {
        Self {
            cedula: request.cedula().to_owned(),
            cod_dactilar: request.cod_dactilar().to_owned(),
            token_endpoint: config.token_endpoint.clone(),
            biometria_endpoint: config.biometria_endpoint.clone(),
            username: credentials.username.clone(),
            password: credentials.password.clone(),
        }
    }

    /// The positional argument list as the native side receives it.
    pub fn as_positional(&self) -> [&str; 6] {
        [
            &self.cedula,
            &self.cod_dactilar,
            &self.token_endpoint,
            &self.biometria_endpoint,
            &self.username,
            &self.password,
        ]
    }
}

/// Successful validation outcome as reported by the platform layer, before
/// field defaulting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawValidationOutcome {
    pub access_token: String,
    #[serde(default)]
    pub biometric_data: Option<serde_json::Value>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Successful validation outcome as delivered to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Access token issued by the remote token service.
    pub access_token: String,
    /// Opaque biometric payload, when the platform layer supplies one.
    pub biometric_data: Option<serde_json::Value>,
    /// Instant of validation. Defaults to now when the platform layer omits
    /// it.
    pub timestamp: DateTime<Utc>,
}

impl ValidationResult {
    /// Reshape a raw platform outcome, filling in the defaults.
    pub fn from_raw(raw: RawValidationOutcome) -> Self {
        Self {
            access_token: raw.access_token,
            biometric_data: raw.biometric_data,
            timestamp: raw.timestamp.unwrap_or_else(Utc::now),
        }
    }
}

/// Failure as reported by the platform layer, before field defaulting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeFailure {
    pub code: Option<String>,
    pub message: Option<String>,
}

impl NativeFailure {
    /// Failure reported by bridge implementations on platforms without a
    /// native biometric capability.
    pub fn platform_unavailable() -> Self {
        Self {
            code: Some("PLATFORM_UNAVAILABLE".into()),
            message: Some("Validacion biometrica no disponible en esta plataforma".into()),
        }
    }
}

impl From<NativeFailure> for ValidationError {
    /// Default a partial native failure: missing code becomes
    /// `UNKNOWN_ERROR`, missing message becomes the generic one.
    fn from(failure: NativeFailure) -> Self {
        let code = failure
            .code
            .map(ErrorCode::from)
            .unwrap_or(ErrorCode::UnknownError);
        match failure.message {
            Some(message) => ValidationError::with_message(code, message),
            None => ValidationError::new(code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_defaults_omitted_timestamp_to_now() {
        let before = Utc::now();
        let result = ValidationResult::from_raw(RawValidationOutcome {
            access_token: "tok".into(),
            biometric_data: None,
            timestamp: None,
        });
        assert!(result.timestamp >= before);
        assert!(result.biometric_data.is_none());
    }

    #[test]
    fn result_keeps_native_supplied_fields() {
        let ts: DateTime<Utc> = "2026-01-15T10:30:00Z".parse().expect("timestamp");
        let blob = serde_json::json!({"score": 0.97});
        let result = ValidationResult::from_raw(RawValidationOutcome {
            access_token: "tok".into(),
            biometric_data: Some(blob.clone()),
            timestamp: Some(ts),
        });
        assert_eq!(result.timestamp, ts);
        assert_eq!(result.biometric_data, Some(blob));
    }

    #[test]
    fn native_failure_defaults_code_and_message() {
        let err: ValidationError = NativeFailure {
            code: None,
            message: None,
        }
        .into();
        assert_eq!(err.code, ErrorCode::UnknownError);
        assert_eq!(err.message, "Error desconocido en la validacion");
    }

    #[test]
    fn native_failure_passes_supplied_code_through() {
        let err: ValidationError = NativeFailure {
            code: Some("CANCELLED".into()),
            message: Some("Validacion cancelada".into()),
        }
        .into();
        assert_eq!(err.code, ErrorCode::Native("CANCELLED".into()));
        assert_eq!(err.message, "Validacion cancelada");
    }

    #[test]
    fn positional_order_matches_native_contract() {
        let config = BiometriaConfig {
            token_endpoint: "https://t".into(),
            biometria_endpoint: "https://b".into(),
            credentials: None,
        };
        let creds = Credentials {
            username: "u".into(),
            password: "p".into(),
        };
        let request = NormalizedRequest::new("1234567890".into(), "V3331V2222".into());
        let args = ValidationArgs::new(&request, &config, &creds);
        assert_eq!(
            args.as_positional(),
            ["1234567890", "V3331V2222", "https://t", "https://b", "u", "p"]
        );
    }

    #[test]
    fn result_serializes_with_javascript_field_names() {
        let result = ValidationResult::from_raw(RawValidationOutcome {
            access_token: "tok".into(),
            biometric_data: None,
            timestamp: Some("2026-01-15T10:30:00Z".parse().expect("timestamp")),
        });
        let json = serde_json::to_value(&result).expect("serialize");
        assert!(json.get("accessToken").is_some());
        assert!(json.get("biometricData").is_some());
        assert!(json.get("timestamp").is_some());
    }
}
