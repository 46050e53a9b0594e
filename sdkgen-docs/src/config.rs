//! Documentation configuration.

use sdkgen_core::{Version, to_screaming_snake_case};
use sdkgen_plan::{AuthMethod, Level, PlanFile, TargetLanguage};

/// Facts about the SDK the section builders need beyond the plan itself.
#[derive(Debug, Clone, PartialEq)]
pub struct DocsConfig {
    /// Display name (`chain-sdk`).
    pub sdk_name: String,
    /// Name used in install commands and imports.
    pub package_name: String,
    pub sdk_version: Version,
    pub description: Option<String>,
    pub audience: Level,
    pub language: TargetLanguage,
    pub auth_required: bool,
    pub auth_method: AuthMethod,
    pub repository_url: Option<String>,
    pub docs_base_url: Option<String>,
    pub license: Option<String>,
}

impl DocsConfig {
    /// A config with defaults for everything but the name.
    pub fn new(sdk_name: impl Into<String>) -> Self {
        let sdk_name = sdk_name.into();
        Self {
            package_name: sdk_name.clone(),
            sdk_name,
            sdk_version: Version::default(),
            description: None,
            audience: Level::default(),
            language: TargetLanguage::default(),
            auth_required: false,
            auth_method: AuthMethod::None,
            repository_url: None,
            docs_base_url: None,
            license: None,
        }
    }

    /// Derive the config from a loaded plan file.
    pub fn from_plan_file(file: &PlanFile) -> Self {
        let config = &file.plan.config;
        Self {
            sdk_name: file.sdk.name.clone(),
            package_name: file.sdk.package_name(),
            sdk_version: file.sdk.version.clone(),
            description: file.sdk.description.clone(),
            audience: config.audience,
            language: config.language,
            auth_required: config.auth_required,
            auth_method: config.auth_method,
            repository_url: file.sdk.repository.clone(),
            docs_base_url: file.sdk.docs_url.clone(),
            license: file.sdk.license.clone(),
        }
    }

    /// Auth is effective only when required and backed by a real mechanism.
    pub fn requires_auth(&self) -> bool {
        self.auth_required && self.auth_method != AuthMethod::None
    }

    /// Install command of the generated package; `None` when no source is
    /// generated for the target language.
    pub fn install_command(&self) -> Option<String> {
        if self.language.is_emittable() {
            self.language.install_command(&self.package_name)
        } else {
            None
        }
    }

    /// Runtime the generated package needs, if source is generated for it.
    pub fn runtime_requirement(&self) -> Option<&'static str> {
        if self.language.is_emittable() {
            self.language.runtime_requirement()
        } else {
            None
        }
    }

    /// Environment variable holding a credential (`CHAIN_SDK_API_KEY`).
    pub fn env_var(&self, suffix: &str) -> String {
        format!("{}_{}", to_screaming_snake_case(&self.sdk_name), suffix)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_from_plan_file() {
        let file = PlanFile::from_str(
            r#"
            [sdk]
            name = "chain-sdk"
            version = "1.2.0"
            repository = "https://github.com/acme/chain-sdk"

            [config]
            auth_required = true
            auth_method = "api_key"
            language = "python"
            "#,
        )
        .unwrap();

        let config = DocsConfig::from_plan_file(&file);
        assert_eq!(config.sdk_name, "chain-sdk");
        assert_eq!(config.sdk_version.to_string(), "1.2.0");
        assert_eq!(config.language, TargetLanguage::Python);
        assert!(config.requires_auth());
        assert_eq!(config.env_var("API_KEY"), "CHAIN_SDK_API_KEY");
    }

    #[test]
    fn test_docs_only_target_has_no_install() {
        let mut config = DocsConfig::new("chain-sdk");
        assert_eq!(config.install_command().as_deref(), Some("npm install chain-sdk"));
        config.language = TargetLanguage::Rust;
        assert_eq!(config.install_command(), None);
        assert_eq!(config.runtime_requirement(), None);
    }

    #[test]
    fn test_new_defaults() {
        let config = DocsConfig::new("acme");
        assert_eq!(config.package_name, "acme");
        assert!(!config.requires_auth());
        assert_eq!(config.language, TargetLanguage::TypeScript);
    }
}
