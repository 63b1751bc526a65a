// SPDX-License-Identifier: MIT
//
// Android platform bridge via JNI.
//
// Requires the Android NDK and targets `aarch64-linux-android` or
// `armv7-linux-androideabi`. The bridge launches the Java capture activity
// (`com.enext.biometria.BiometriaActivity`) with the six positional
// arguments as string extras.
//
// ## Architecture notes
//
// The capture flow runs through `startActivityForResult`, which is
// inherently asynchronous: this module dispatches the intent and returns a
// `PENDING_ACTIVITY_RESULT` failure explaining that the outcome arrives
// through the host Activity's `onActivityResult` override. The host wires
// that callback back through [`crate::activity_result`] using
// [`REQUEST_CODE_VALIDATION`].

#![cfg(target_os = "android")]

use jni::objects::{JObject, JString, JValue};
use jni::JNIEnv;

use biometria_core::error::BiometriaError;
use biometria_core::types::{NativeFailure, RawValidationOutcome, ValidationArgs};

use crate::traits::BiometricValidator;

/// Request code the capture activity is started with. The host Activity
/// must recognise it in its `onActivityResult` override.
pub const REQUEST_CODE_VALIDATION: i32 = 1001;

/// Fully qualified class name of the Java capture activity.
const CAPTURE_ACTIVITY_CLASS: &str = "com.enext.biometria.BiometriaActivity";

/// Obtain a [`JNIEnv`] handle from the global Android context.
///
/// Retrieves the `JavaVM*` pointer set by the NDK glue code, then attaches
/// the current thread if it is not already attached.
fn jni_env() -> Result<JNIEnv<'static>, BiometriaError> {
    let ctx = ndk_context::android_context();
    // SAFETY: `ctx.vm()` returns the `JavaVM*` set by the NDK glue code.
    // The pointer is guaranteed valid for the lifetime of the process.
    let vm = unsafe { jni::JavaVM::from_raw(ctx.vm().cast()) }
        .map_err(|e| BiometriaError::Bridge(format!("failed to obtain JavaVM: {e}")))?;
    vm.attach_current_thread_permanently()
        .map_err(|e| BiometriaError::Bridge(format!("failed to attach JNI thread: {e}")))
}

/// Obtain the current Android `Activity` as a [`JObject`].
fn activity() -> Result<JObject<'static>, BiometriaError> {
    let ctx = ndk_context::android_context();
    let ptr = ctx.context();
    if ptr.is_null() {
        return Err(BiometriaError::Bridge(
            "Android context is null — native activity not initialised".into(),
        ));
    }
    // SAFETY: the NDK guarantees this pointer is a valid global jobject for
    // the hosting Activity.
    Ok(unsafe { JObject::from_raw(ptr.cast()) })
}

/// Convenience: map any `jni::errors::Error` into `BiometriaError::Bridge`.
fn jni_err(context: &str, e: jni::errors::Error) -> BiometriaError {
    BiometriaError::Bridge(format!("{context}: {e}"))
}

/// Android implementation of the biometric validation port.
///
/// The struct is zero-sized; all capture state lives on the Java side.
pub struct AndroidBridge;

impl AndroidBridge {
    /// Create a new Android bridge. Does **not** touch JNI — the first JNI
    /// call happens lazily when a trait method is invoked.
    pub fn new() -> Self {
        Self
    }

    /// Launch the capture activity with the marshalled arguments as string
    /// extras, in the positional order of [`ValidationArgs`].
    fn launch_capture_activity(&self, args: &ValidationArgs) -> Result<(), BiometriaError> {
        let mut env = jni_env()?;
        let activity = activity()?;

        tracing::info!(cedula = %args.cedula, "Android: launching capture activity");

        let intent: JObject = env
            .new_object("android/content/Intent", "()V", &[])
            .map_err(|e| jni_err("new Intent", e))?;

        // intent.setClassName(activity, CAPTURE_ACTIVITY_CLASS)
        let j_class: JString = env
            .new_string(CAPTURE_ACTIVITY_CLASS)
            .map_err(|e| jni_err("new_string(class)", e))?;
        env.call_method(
            &intent,
            "setClassName",
            "(Landroid/content/Context;Ljava/lang/String;)Landroid/content/Intent;",
            &[JValue::Object(&activity), JValue::Object(&j_class)],
        )
        .map_err(|e| jni_err("setClassName", e))?;

        // One string extra per positional argument, keyed as the Java
        // activity reads them.
        let extras = [
            ("cedula", args.cedula.as_str()),
            ("codDactilar", args.cod_dactilar.as_str()),
            ("tokenEndpoint", args.token_endpoint.as_str()),
            ("biometriaEndpoint", args.biometria_endpoint.as_str()),
            ("username", args.username.as_str()),
            ("password", args.password.as_str()),
        ];
        for (key, value) in extras {
            let j_key: JString = env
                .new_string(key)
                .map_err(|e| jni_err("new_string(extra key)", e))?;
            let j_value: JString = env
                .new_string(value)
                .map_err(|e| jni_err("new_string(extra value)", e))?;
            env.call_method(
                &intent,
                "putExtra",
                "(Ljava/lang/String;Ljava/lang/String;)Landroid/content/Intent;",
                &[JValue::Object(&j_key), JValue::Object(&j_value)],
            )
            .map_err(|e| jni_err("putExtra", e))?;
        }

        // activity.startActivityForResult(intent, REQUEST_CODE_VALIDATION)
        env.call_method(
            &activity,
            "startActivityForResult",
            "(Landroid/content/Intent;I)V",
            &[
                JValue::Object(&intent),
                JValue::Int(REQUEST_CODE_VALIDATION),
            ],
        )
        .map_err(|e| jni_err("startActivityForResult", e))?;

        tracing::info!("Android: capture intent dispatched");
        Ok(())
    }
}

impl Default for AndroidBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl BiometricValidator for AndroidBridge {
    /// Dispatch the capture activity.
    ///
    /// Because the capture flow completes through `onActivityResult`, the
    /// outcome cannot be returned from this call. A successful dispatch
    /// reports `PENDING_ACTIVITY_RESULT`; the host collects the real
    /// outcome via [`crate::activity_result`].
    fn validate(&self, args: &ValidationArgs) -> Result<RawValidationOutcome, NativeFailure> {
        match self.launch_capture_activity(args) {
            Ok(()) => Err(NativeFailure {
                code: Some("PENDING_ACTIVITY_RESULT".into()),
                message: Some(
                    "Captura iniciada; el resultado llega por onActivityResult".into(),
                ),
            }),
            Err(e) => Err(NativeFailure {
                code: Some("BRIDGE_ERROR".into()),
                message: Some(e.to_string()),
            }),
        }
    }

    /// The capture activity tears itself down when the host finishes it;
    /// the native `cancelar` operation acknowledges without further work.
    fn cancel(&self) -> Result<(), NativeFailure> {
        tracing::info!("Android: cancel acknowledged");
        Ok(())
    }

    fn platform_name(&self) -> &str {
        "Android"
    }
}
