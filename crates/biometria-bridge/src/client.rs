// SPDX-License-Identifier: MIT
//
// Validation client — the caller-facing surface of the plugin.
//
// Owns a configuration value and a bridge port. The original plugin kept
// configuration in ambient module state and reported through callback
// pairs; here the config travels with the client and every operation
// returns a `Result` instead.

use tracing::{info, instrument, warn};

use biometria_core::config::{BiometriaConfig, ConfigUpdate};
use biometria_core::error::{ErrorCode, ValidationError};
use biometria_core::types::{ValidationArgs, ValidationRequest, ValidationResult};
use biometria_core::validate;

use crate::platform_bridge;
use crate::traits::BiometricValidator;

/// Constant version string reported by [`BiometriaClient::version`].
/// Never derived from a native call.
pub const PLUGIN_VERSION: &str = "1.0.0";

/// A biometric validation client bound to one bridge implementation.
pub struct BiometriaClient {
    config: BiometriaConfig,
    bridge: Box<dyn BiometricValidator>,
}

impl BiometriaClient {
    /// Client with default configuration and the platform's own bridge.
    /// Credentials still have to be supplied via [`Self::configure`].
    pub fn new() -> Self {
        Self::with_bridge(BiometriaConfig::default(), platform_bridge())
    }

    /// Client with an explicit configuration and the platform's own bridge.
    pub fn with_config(config: BiometriaConfig) -> Self {
        Self::with_bridge(config, platform_bridge())
    }

    /// Client with an explicit bridge. This is the seam test doubles plug
    /// into.
    pub fn with_bridge(config: BiometriaConfig, bridge: Box<dyn BiometricValidator>) -> Self {
        info!(platform = bridge.platform_name(), "biometria client created");
        Self { config, bridge }
    }

    /// Apply a partial configuration update. Present fields overwrite,
    /// absent fields keep their prior values.
    pub fn configure(&mut self, update: ConfigUpdate) {
        self.config.apply(update);
    }

    /// Current configuration.
    pub fn config(&self) -> &BiometriaConfig {
        &self.config
    }

    /// Run one biometric validation.
    ///
    /// Input validation happens first and short-circuits without touching
    /// the bridge. On bridge success, omitted fields are defaulted
    /// (`biometric_data` → `None`, `timestamp` → now); on bridge failure,
    /// omitted code/message are defaulted (`UNKNOWN_ERROR` / generic
    /// message).
    #[instrument(skip_all, fields(platform = self.bridge.platform_name()))]
    pub fn validate(
        &self,
        request: &ValidationRequest,
    ) -> Result<ValidationResult, ValidationError> {
        let normalized = validate(&self.config, request)?;

        // validate() already proved the credentials usable.
        let credentials = self
            .config
            .usable_credentials()
            .ok_or_else(|| ValidationError::new(ErrorCode::CredentialsNotConfigured))?;

        let args = ValidationArgs::new(&normalized, &self.config, credentials);
        info!(cedula = %args.cedula, "dispatching native validation");

        match self.bridge.validate(&args) {
            Ok(raw) => Ok(ValidationResult::from_raw(raw)),
            Err(failure) => {
                let err = ValidationError::from(failure);
                warn!(code = %err.code, "native validation failed");
                Err(err)
            }
        }
    }

    /// Cancel the in-flight native validation, if any. Pass-through to the
    /// bridge's `cancelar`; failures get the same code/message defaulting
    /// as `validate`.
    pub fn cancel(&self) -> Result<(), ValidationError> {
        self.bridge.cancel().map_err(ValidationError::from)
    }

    /// Plugin version. Constant, independent of configuration or bridge
    /// state.
    pub fn version(&self) -> &'static str {
        PLUGIN_VERSION
    }
}

impl Default for BiometriaClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use biometria_core::config::Credentials;
    use biometria_core::types::{NativeFailure, RawValidationOutcome};

    /// Test double recording every argument set the client marshals.
    struct FakeBridge {
        calls: Arc<Mutex<Vec<ValidationArgs>>>,
        outcome: Result<RawValidationOutcome, NativeFailure>,
    }

    impl BiometricValidator for FakeBridge {
        fn validate(&self, args: &ValidationArgs) -> Result<RawValidationOutcome, NativeFailure> {
            self.calls.lock().expect("lock").push(args.clone());
            self.outcome.clone()
        }

        fn cancel(&self) -> Result<(), NativeFailure> {
            Ok(())
        }

        fn platform_name(&self) -> &str {
            "Fake"
        }
    }

    fn success_outcome() -> RawValidationOutcome {
        RawValidationOutcome {
            access_token: "tok".into(),
            biometric_data: None,
            timestamp: None,
        }
    }

    fn client_with(
        config: BiometriaConfig,
        outcome: Result<RawValidationOutcome, NativeFailure>,
    ) -> (BiometriaClient, Arc<Mutex<Vec<ValidationArgs>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let bridge = FakeBridge {
            calls: Arc::clone(&calls),
            outcome,
        };
        (BiometriaClient::with_bridge(config, Box::new(bridge)), calls)
    }

    fn configured() -> BiometriaConfig {
        BiometriaConfig {
            credentials: Some(Credentials {
                username: "u".into(),
                password: "p".into(),
            }),
            ..Default::default()
        }
    }

    fn request(cedula: &str, cod_dactilar: &str) -> ValidationRequest {
        ValidationRequest {
            cedula: cedula.into(),
            cod_dactilar: cod_dactilar.into(),
        }
    }

    #[test]
    fn unconfigured_client_never_reaches_bridge() {
        let (client, calls) = client_with(BiometriaConfig::default(), Ok(success_outcome()));
        let err = client
            .validate(&request("1234567890", "V3331V2222"))
            .expect_err("must fail");
        assert_eq!(err.code, ErrorCode::CredentialsNotConfigured);
        assert!(calls.lock().expect("lock").is_empty());
    }

    #[test]
    fn invalid_cedula_never_reaches_bridge() {
        let (client, calls) = client_with(configured(), Ok(success_outcome()));
        let err = client
            .validate(&request("12345", "V3331V2222"))
            .expect_err("must fail");
        assert_eq!(err.code, ErrorCode::InvalidCedula);
        assert!(calls.lock().expect("lock").is_empty());
    }

    #[test]
    fn invalid_dactilar_code_never_reaches_bridge() {
        let (client, calls) = client_with(configured(), Ok(success_outcome()));
        let err = client
            .validate(&request("1234567890", "33331V2222"))
            .expect_err("must fail");
        assert_eq!(err.code, ErrorCode::InvalidCodDactilar);
        assert!(calls.lock().expect("lock").is_empty());
    }

    #[test]
    fn lowercase_dactilar_code_reaches_bridge_uppercased() {
        let (client, calls) = client_with(configured(), Ok(success_outcome()));
        client
            .validate(&request("1234567890", "v3331v2222"))
            .expect("valid");

        let calls = calls.lock().expect("lock");
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].cod_dactilar, "V3331V2222");
        assert_eq!(
            calls[0].as_positional(),
            [
                "1234567890",
                "V3331V2222",
                "https://tokens.enext.ltd/token",
                "https://biometrico.enext.ltd/validarbiometria",
                "u",
                "p",
            ]
        );
    }

    #[test]
    fn configure_partial_update_keeps_prior_endpoint() {
        let (mut client, _) = client_with(BiometriaConfig::default(), Ok(success_outcome()));
        client.configure(ConfigUpdate {
            token_endpoint: Some("https://x".into()),
            ..Default::default()
        });
        client.configure(ConfigUpdate {
            credentials: Some(Credentials {
                username: "u".into(),
                password: "p".into(),
            }),
            ..Default::default()
        });
        assert_eq!(client.config().token_endpoint, "https://x");
    }

    #[test]
    fn bridge_success_gets_field_defaults() {
        let (client, _) = client_with(configured(), Ok(success_outcome()));
        let result = client
            .validate(&request("1234567890", "V3331V2222"))
            .expect("valid");
        assert_eq!(result.access_token, "tok");
        assert!(result.biometric_data.is_none());
    }

    #[test]
    fn bridge_failure_gets_code_defaults() {
        let (client, _) = client_with(
            configured(),
            Err(NativeFailure {
                code: None,
                message: None,
            }),
        );
        let err = client
            .validate(&request("1234567890", "V3331V2222"))
            .expect_err("must fail");
        assert_eq!(err.code, ErrorCode::UnknownError);
        assert_eq!(err.message, "Error desconocido en la validacion");
    }

    #[test]
    fn native_code_passes_through_unmapped() {
        let (client, _) = client_with(
            configured(),
            Err(NativeFailure {
                code: Some("CAMERA_PERMISSION_DENIED".into()),
                message: Some("Se requiere permiso de camara".into()),
            }),
        );
        let err = client
            .validate(&request("1234567890", "V3331V2222"))
            .expect_err("must fail");
        assert_eq!(
            err.code,
            ErrorCode::Native("CAMERA_PERMISSION_DENIED".into())
        );
    }

    #[test]
    fn version_is_constant() {
        let (client, _) = client_with(BiometriaConfig::default(), Ok(success_outcome()));
        assert_eq!(client.version(), "1.0.0");
    }

    #[test]
    fn cancel_passes_through() {
        let (client, _) = client_with(configured(), Ok(success_outcome()));
        assert!(client.cancel().is_ok());
    }
}
