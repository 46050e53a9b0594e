//! The `sdkgen.toml` plan file.
//!
//! A plan file carries the design plan plus everything around it that is not
//! part of the SDK surface itself: package metadata, output formatting, and
//! documentation contributions (prerequisites, setup steps, examples).

use std::{path::Path, str::FromStr};

use sdkgen_core::{Version, to_kebab_case, to_pascal_case};
use serde::{Deserialize, Serialize};

use crate::{
    DesignPlan, Error, ErrorDescriptor, Level, MethodDescriptor, PlanConfig, Result,
    SourceContext, TypeDescriptor, validate,
};

/// Default plan file name.
pub const PLAN_FILE_NAME: &str = "sdkgen.toml";

/// Package metadata (`[sdk]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SdkMeta {
    /// Package name (e.g. `chain-sdk`).
    pub name: String,
    #[serde(default)]
    pub version: Version,
    #[serde(default)]
    pub description: Option<String>,
    /// Client class name; derived from the package name when omitted.
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default)]
    pub repository: Option<String>,
    #[serde(default)]
    pub docs_url: Option<String>,
    #[serde(default)]
    pub license: Option<String>,
}

impl SdkMeta {
    /// Client class name (`chain-sdk` -> `ChainSdkClient` unless set).
    pub fn client_name(&self) -> String {
        match &self.client {
            Some(client) => client.clone(),
            None if self.name.trim().is_empty() => String::new(),
            None => format!("{}Client", to_pascal_case(&self.name)),
        }
    }

    /// Package name as published (kebab-case).
    pub fn package_name(&self) -> String {
        to_kebab_case(&self.name)
    }
}

/// Indentation unit of emitted source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawIndent", into = "RawIndent")]
pub enum IndentStyle {
    Spaces(u8),
    Tab,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawIndent {
    Width(u8),
    Name(String),
}

impl TryFrom<RawIndent> for IndentStyle {
    type Error = String;

    fn try_from(raw: RawIndent) -> std::result::Result<Self, Self::Error> {
        match raw {
            RawIndent::Width(0) => Err("indent width must be greater than zero".to_string()),
            RawIndent::Width(n) => Ok(IndentStyle::Spaces(n)),
            RawIndent::Name(name) => match name.as_str() {
                "tab" | "tabs" => Ok(IndentStyle::Tab),
                other => Err(format!(
                    "invalid indent '{}', expected a space count or \"tab\"",
                    other
                )),
            },
        }
    }
}

impl From<IndentStyle> for RawIndent {
    fn from(style: IndentStyle) -> Self {
        match style {
            IndentStyle::Spaces(n) => RawIndent::Width(n),
            IndentStyle::Tab => RawIndent::Name("tab".to_string()),
        }
    }
}

impl Default for IndentStyle {
    fn default() -> Self {
        IndentStyle::Spaces(2)
    }
}

/// Output formatting (`[format]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatSettings {
    pub indent: IndentStyle,
    /// Target line width; informational, never hard-wrapped.
    pub line_width: usize,
    pub trailing_newline: bool,
    /// Terminate statements with `;`.
    #[serde(alias = "statement_terminators")]
    pub semicolons: bool,
}

impl Default for FormatSettings {
    fn default() -> Self {
        Self {
            indent: IndentStyle::default(),
            line_width: 100,
            trailing_newline: true,
            semicolons: true,
        }
    }
}

/// Documentation contributions (`[docs]`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsSettings {
    pub prerequisites: Vec<String>,
    pub setup_steps: Vec<String>,
}

/// A usage example contributed to the docs (`[[examples]]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleEntry {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub difficulty: Level,
    pub code: String,
}

impl ExampleEntry {
    pub fn new(title: impl Into<String>, difficulty: Level, code: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            difficulty,
            code: code.into(),
        }
    }
}

#[derive(Deserialize)]
struct RawPlanFile {
    sdk: SdkMeta,
    #[serde(default)]
    config: PlanConfig,
    #[serde(default)]
    format: FormatSettings,
    #[serde(default)]
    docs: DocsSettings,
    #[serde(default)]
    methods: Vec<MethodDescriptor>,
    #[serde(default)]
    types: Vec<TypeDescriptor>,
    #[serde(default)]
    errors: Vec<ErrorDescriptor>,
    #[serde(default)]
    examples: Vec<ExampleEntry>,
}

/// Root of `sdkgen.toml`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanFile {
    pub sdk: SdkMeta,
    pub plan: DesignPlan,
    pub format: FormatSettings,
    pub docs: DocsSettings,
    pub examples: Vec<ExampleEntry>,
}

impl From<RawPlanFile> for PlanFile {
    fn from(raw: RawPlanFile) -> Self {
        let plan = DesignPlan {
            client_name: raw.sdk.client_name(),
            description: raw.sdk.description.clone(),
            methods: raw.methods,
            types: raw.types,
            errors: raw.errors,
            config: raw.config,
        };
        Self {
            sdk: raw.sdk,
            plan,
            format: raw.format,
            docs: raw.docs,
            examples: raw.examples,
        }
    }
}

impl FromStr for PlanFile {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, PLAN_FILE_NAME)
    }
}

impl PlanFile {
    /// Parse a plan file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a plan file from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let raw: RawPlanFile = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
        if raw.sdk.name.trim().is_empty() {
            return Err(ctx.missing_field("sdk", "name"));
        }
        let file = PlanFile::from(raw);
        validate::validate_plan(&file.plan, &ctx)?;
        for (i, example) in file.examples.iter().enumerate() {
            if example.title.trim().is_empty() {
                return Err(ctx.missing_field(format!("examples[{}]", i), "title"));
            }
        }
        Ok(file)
    }

    /// Wrap an in-memory plan with default metadata.
    pub fn from_plan(name: impl Into<String>, plan: DesignPlan) -> Self {
        let sdk = SdkMeta {
            name: name.into(),
            version: Version::default(),
            description: plan.description.clone(),
            client: Some(plan.client_name.clone()),
            repository: None,
            docs_url: None,
            license: None,
        };
        Self {
            sdk,
            plan,
            format: FormatSettings::default(),
            docs: DocsSettings::default(),
            examples: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AuthMethod, TargetLanguage};

    const FULL: &str = r#"
        [sdk]
        name = "chain-sdk"
        version = "1.2.0"
        description = "Read balances from the chain"
        repository = "https://github.com/acme/chain-sdk"

        [config]
        auth_required = true
        auth_method = "api_key"
        language = "typescript"

        [format]
        indent = 4
        semicolons = false

        [docs]
        prerequisites = ["An Acme account"]

        [[methods]]
        name = "getBalance"
        description = "Get the balance of an address"
        returns = "number"

        [[methods.params]]
        name = "address"
        type = "string"

        [[types]]
        name = "Receipt"

        [[types.fields]]
        name = "hash"
        type = "string"

        [[errors]]
        code = "auth_expired"
        description = "The API key expired"

        [[examples]]
        title = "Read a balance"
        difficulty = "beginner"
        code = "await client.getBalance(\"0xabc\");"
    "#;

    #[test]
    fn test_parse_full_plan_file() {
        let file: PlanFile = FULL.parse().unwrap();

        assert_eq!(file.sdk.name, "chain-sdk");
        assert_eq!(file.sdk.version.to_string(), "1.2.0");
        assert_eq!(file.plan.client_name, "ChainSdkClient");
        assert_eq!(file.plan.methods[0].params[0].ty, "string");
        assert_eq!(file.plan.types[0].fields[0].name, "hash");
        assert_eq!(file.plan.config.auth_method, AuthMethod::ApiKey);
        assert_eq!(file.plan.config.language, TargetLanguage::TypeScript);
        assert_eq!(file.format.indent, IndentStyle::Spaces(4));
        assert!(!file.format.semicolons);
        assert!(file.format.trailing_newline);
        assert_eq!(file.docs.prerequisites, vec!["An Acme account"]);
        assert_eq!(file.examples[0].difficulty, Level::Beginner);
    }

    #[test]
    fn test_explicit_client_name() {
        let file: PlanFile = "[sdk]\nname = \"chain\"\nclient = \"Chain\"\n".parse().unwrap();
        assert_eq!(file.plan.client_name, "Chain");
    }

    #[test]
    fn test_indent_tab() {
        let file: PlanFile = "[sdk]\nname = \"x\"\n[format]\nindent = \"tab\"\n".parse().unwrap();
        assert_eq!(file.format.indent, IndentStyle::Tab);
    }

    #[test]
    fn test_indent_zero_is_parse_error() {
        let err = "[sdk]\nname = \"x\"\n[format]\nindent = 0\n"
            .parse::<PlanFile>()
            .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_missing_sdk_table() {
        let err = "[config]\nauth_required = false\n".parse::<PlanFile>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_duplicate_method_has_spans() {
        let err = r#"
            [sdk]
            name = "x"

            [[methods]]
            name = "ping"

            [[methods]]
            name = "ping"
        "#
        .parse::<PlanFile>()
        .unwrap_err();
        match *err {
            Error::DuplicateMethod {
                first_span,
                second_span,
                ..
            } => {
                assert!(first_span.is_some());
                assert!(second_span.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_file_missing() {
        let err = PlanFile::from_file("/definitely/not/here/sdkgen.toml").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_from_plan() {
        let file = PlanFile::from_plan("demo", DesignPlan::new("DemoClient"));
        assert_eq!(file.sdk.client_name(), "DemoClient");
        assert_eq!(file.sdk.package_name(), "demo");
    }
}
