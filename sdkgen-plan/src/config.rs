//! Configuration facts of a design plan.

use serde::{Deserialize, Serialize};

/// Authentication mechanism the generated client uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMethod {
    /// No credentials are sent.
    #[default]
    None,
    /// A static key sent with every request.
    #[serde(alias = "apikey", alias = "api-key", alias = "key")]
    ApiKey,
    /// A delegated-authorization access token.
    #[serde(alias = "oauth2")]
    OAuth,
    /// Requests signed with a wallet key.
    Wallet,
}

/// A credential the generated client accepts in its configuration.
///
/// Shared by the code builders (property names on the config interface and
/// client class) and the documentation (environment variables, snippets), so
/// both branches agree on naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialField {
    /// Property name on the generated config and client.
    pub property: &'static str,
    /// TypeScript type of the property.
    pub ty: &'static str,
    /// Suffix of the environment variable used in docs (`<SDK>_<suffix>`).
    pub env_suffix: &'static str,
    /// Human description.
    pub description: &'static str,
}

const API_KEY_FIELDS: &[CredentialField] = &[CredentialField {
    property: "apiKey",
    ty: "string",
    env_suffix: "API_KEY",
    description: "API key sent with every request",
}];

const OAUTH_FIELDS: &[CredentialField] = &[CredentialField {
    property: "accessToken",
    ty: "string",
    env_suffix: "ACCESS_TOKEN",
    description: "OAuth access token obtained from the authorization flow",
}];

const WALLET_FIELDS: &[CredentialField] = &[CredentialField {
    property: "privateKey",
    ty: "string",
    env_suffix: "PRIVATE_KEY",
    description: "Private key used to sign requests",
}];

impl AuthMethod {
    /// Credential fields required by this method.
    pub fn credential_fields(&self) -> &'static [CredentialField] {
        match self {
            AuthMethod::None => &[],
            AuthMethod::ApiKey => API_KEY_FIELDS,
            AuthMethod::OAuth => OAUTH_FIELDS,
            AuthMethod::Wallet => WALLET_FIELDS,
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            AuthMethod::None => "none",
            AuthMethod::ApiKey => "API key",
            AuthMethod::OAuth => "OAuth 2.0",
            AuthMethod::Wallet => "wallet signature",
        }
    }
}

/// Target language identifier of the generated SDK.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetLanguage {
    #[default]
    #[serde(alias = "ts")]
    TypeScript,
    #[serde(alias = "js")]
    JavaScript,
    #[serde(alias = "py")]
    Python,
    #[serde(alias = "rs")]
    Rust,
    #[serde(alias = "golang")]
    Go,
    /// Any language without known packaging conventions.
    #[serde(other)]
    Other,
}

impl TargetLanguage {
    /// Lowercase identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetLanguage::TypeScript => "typescript",
            TargetLanguage::JavaScript => "javascript",
            TargetLanguage::Python => "python",
            TargetLanguage::Rust => "rust",
            TargetLanguage::Go => "go",
            TargetLanguage::Other => "other",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            TargetLanguage::TypeScript => "TypeScript",
            TargetLanguage::JavaScript => "JavaScript",
            TargetLanguage::Python => "Python",
            TargetLanguage::Rust => "Rust",
            TargetLanguage::Go => "Go",
            TargetLanguage::Other => "other",
        }
    }

    /// Whether the curly-brace emitter produces source for this language.
    pub fn is_emittable(&self) -> bool {
        matches!(self, TargetLanguage::TypeScript | TargetLanguage::JavaScript)
    }

    /// Package manager invocation installing `package`, if the ecosystem is known.
    pub fn install_command(&self, package: &str) -> Option<String> {
        match self {
            TargetLanguage::TypeScript | TargetLanguage::JavaScript => {
                Some(format!("npm install {}", package))
            }
            TargetLanguage::Python => Some(format!("pip install {}", package)),
            TargetLanguage::Rust => Some(format!("cargo add {}", package)),
            TargetLanguage::Go => Some(format!("go get {}", package)),
            TargetLanguage::Other => None,
        }
    }

    /// Runtime the SDK needs installed.
    pub fn runtime_requirement(&self) -> Option<&'static str> {
        match self {
            TargetLanguage::TypeScript => Some("Node.js 18 or later and TypeScript 5 or later"),
            TargetLanguage::JavaScript => Some("Node.js 18 or later"),
            TargetLanguage::Python => Some("Python 3.9 or later"),
            TargetLanguage::Rust => Some("Rust 1.85 or later"),
            TargetLanguage::Go => Some("Go 1.22 or later"),
            TargetLanguage::Other => None,
        }
    }
}

/// Experience level, used for the audience of the docs and example difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    /// All levels in ascending order.
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    /// Title-cased name.
    pub fn title(&self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

/// Configuration facts of a plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanConfig {
    /// Whether callers must supply credentials.
    #[serde(alias = "authRequired")]
    pub auth_required: bool,
    /// Which mechanism supplies them.
    #[serde(alias = "authMethod")]
    pub auth_method: AuthMethod,
    /// Target output language.
    #[serde(alias = "targetLanguage")]
    pub language: TargetLanguage,
    /// Intended audience of the docs.
    pub audience: Level,
}

impl PlanConfig {
    /// Auth is effective only when required and backed by a real mechanism.
    pub fn requires_auth(&self) -> bool {
        self.auth_required && self.auth_method != AuthMethod::None
    }

    /// Credential fields of the effective auth method.
    pub fn credential_fields(&self) -> &'static [CredentialField] {
        if self.requires_auth() {
            self.auth_method.credential_fields()
        } else {
            &[]
        }
    }
}
