// SPDX-License-Identifier: MIT
//
// Client configuration.
//
// Unlike the original plugin, configuration is not ambient process state:
// each `BiometriaClient` owns its own `BiometriaConfig` value and callers
// mutate it through explicit partial updates.

use serde::{Deserialize, Serialize};

/// Endpoint and credential settings for a validation client.
///
/// Endpoint URLs and credential strings are forwarded to the platform layer
/// exactly as given — no well-formedness check happens here.  Malformed
/// values surface later as native-layer errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiometriaConfig {
    /// URL of the token-issuance endpoint.
    pub token_endpoint: String,
    /// URL of the biometric validation endpoint.
    pub biometria_endpoint: String,
    /// Service credentials. Must be set before any validation succeeds.
    pub credentials: Option<Credentials>,
}

impl Default for BiometriaConfig {
    fn default() -> Self {
        Self {
            token_endpoint: "https://tokens.enext.ltd/token".into(),
            biometria_endpoint: "https://biometrico.enext.ltd/validarbiometria".into(),
            credentials: None,
        }
    }
}

impl BiometriaConfig {
    /// Apply a partial update: each present field overwrites the stored
    /// value, each absent field leaves it untouched.
    pub fn apply(&mut self, update: ConfigUpdate) {
        if let Some(token_endpoint) = update.token_endpoint {
            self.token_endpoint = token_endpoint;
        }
        if let Some(biometria_endpoint) = update.biometria_endpoint {
            self.biometria_endpoint = biometria_endpoint;
        }
        if let Some(credentials) = update.credentials {
            self.credentials = Some(credentials);
        }
    }

    /// Credentials, if a usable pair (both fields non-empty) is configured.
    pub fn usable_credentials(&self) -> Option<&Credentials> {
        self.credentials
            .as_ref()
            .filter(|c| !c.username.is_empty() && !c.password.is_empty())
    }
}

/// Username/password pair for the remote token service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Partial configuration overwrite, the `configure(options)` shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigUpdate {
    pub token_endpoint: Option<String>,
    pub biometria_endpoint: Option<String>,
    pub credentials: Option<Credentials>,
}
