// SPDX-License-Identifier: MIT
//
// Decoding of the capture activity's result extras.
//
// The Android capture flow reports through `onActivityResult` string
// extras. The decoding is pure string handling, so it lives outside the
// `android` module and gets unit tested off-device; the host activity glue
// calls these to turn extras into bridge outcomes.

use chrono::{DateTime, Utc};

use biometria_core::types::{NativeFailure, RawValidationOutcome};

/// Build a raw outcome from the success extras (`accessToken`,
/// `biometricData`, `timestamp`).
///
/// `biometricData` arrives as a string: JSON when the native side could
/// encode it, an opaque blob otherwise — both forms are preserved. An
/// unparseable timestamp is dropped so the client defaults it to now.
pub fn outcome_from_extras(
    access_token: &str,
    biometric_data: Option<&str>,
    timestamp: Option<&str>,
) -> RawValidationOutcome {
    let biometric_data = biometric_data.filter(|s| !s.is_empty()).map(|s| {
        serde_json::from_str(s).unwrap_or_else(|_| serde_json::Value::String(s.to_owned()))
    });

    let timestamp = timestamp.and_then(|s| {
        s.parse::<DateTime<Utc>>()
            .inspect_err(|e| tracing::warn!(%e, "discarding unparseable native timestamp"))
            .ok()
    });

    RawValidationOutcome {
        access_token: access_token.to_owned(),
        biometric_data,
        timestamp,
    }
}

/// Build a failure from the error extras (`errorCode`, `errorMessage`).
/// Absent fields stay absent; the client applies the defaults.
pub fn failure_from_extras(code: Option<&str>, message: Option<&str>) -> NativeFailure {
    NativeFailure {
        code: code.filter(|s| !s.is_empty()).map(str::to_owned),
        message: message.filter(|s| !s.is_empty()).map(str::to_owned),
    }
}
