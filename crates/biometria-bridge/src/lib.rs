// SPDX-License-Identifier: MIT
//
// Biometría — Native platform bridge.
//
// This crate defines the port the validation client depends on
// (`BiometricValidator`) and the platform dispatch that selects its
// implementation: the JNI-backed Android bridge on device, a stub
// everywhere else. The actual biometric capture and remote validation live
// on the native side; this layer only marshals arguments across and
// reshapes what comes back.

pub mod activity_result;
pub mod client;
pub mod traits;

#[cfg(target_os = "android")]
pub mod android;

#[cfg(not(target_os = "android"))]
pub mod stub;

pub use client::{BiometriaClient, PLUGIN_VERSION};

/// Retrieve the bridge implementation for the target operating system.
pub fn platform_bridge() -> Box<dyn traits::BiometricValidator> {
    #[cfg(target_os = "android")]
    {
        // Android: launches the capture activity through JNI.
        Box::new(android::AndroidBridge::new())
    }
    #[cfg(not(target_os = "android"))]
    {
        // Desktop/CI: every call fails with PLATFORM_UNAVAILABLE.
        Box::new(stub::StubBridge)
    }
}
