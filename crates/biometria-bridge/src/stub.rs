// SPDX-License-Identifier: MIT
//
// Stub bridge for desktop/CI builds where the native capture activity is
// unavailable. Every call fails with PLATFORM_UNAVAILABLE — the real
// implementation lives in the `android` module.

use biometria_core::types::{NativeFailure, RawValidationOutcome, ValidationArgs};

use crate::traits::BiometricValidator;

/// No-op bridge returned on non-mobile platforms.
pub struct StubBridge;

impl BiometricValidator for StubBridge {
    fn validate(&self, args: &ValidationArgs) -> Result<RawValidationOutcome, NativeFailure> {
        tracing::warn!(
            cedula = %args.cedula,
            "BiometricValidator::validate called on stub bridge"
        );
        Err(NativeFailure::platform_unavailable())
    }

    fn cancel(&self) -> Result<(), NativeFailure> {
        tracing::warn!("BiometricValidator::cancel called on stub bridge");
        Err(NativeFailure::platform_unavailable())
    }

    fn platform_name(&self) -> &str {
        "Desktop (stub)"
    }
}
