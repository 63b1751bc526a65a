// SPDX-License-Identifier: MIT
//
// Platform-agnostic port for the native biometric capability.

use biometria_core::types::{NativeFailure, RawValidationOutcome, ValidationArgs};

/// The native biometric validation capability.
///
/// Implementations receive fully validated, already-normalized arguments —
/// input checking is the client's job, never the bridge's.  Methods are
/// synchronous; the Android implementation may take as long as the user
/// takes to complete the capture flow, so async callers should wrap calls
/// in `spawn_blocking` or equivalent.
pub trait BiometricValidator: Send {
    /// Run the native `validar` operation with the positional argument
    /// marshalling of [`ValidationArgs`].
    ///
    /// Returns the raw platform outcome before field defaulting; the client
    /// applies the defaults.
    fn validate(&self, args: &ValidationArgs) -> Result<RawValidationOutcome, NativeFailure>;

    /// Run the native `cancelar` operation. Takes no arguments.
    fn cancel(&self) -> Result<(), NativeFailure>;

    /// Human-readable platform name (e.g. "Android").
    fn platform_name(&self) -> &str;
}
