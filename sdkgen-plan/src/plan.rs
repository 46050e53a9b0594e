//! The design plan: the language-neutral SDK surface both the code and the
//! documentation branches are generated from.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{ErrorCategory, PlanConfig, Result, SourceContext, validate};

/// Abstract description of an SDK's surface.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DesignPlan {
    /// Name of the entry-point client class.
    #[serde(alias = "clientName", alias = "client")]
    pub client_name: String,
    /// Free-text description of the SDK.
    #[serde(default)]
    pub description: Option<String>,
    /// Methods in declaration order.
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
    /// Named types in declaration order.
    #[serde(default)]
    pub types: Vec<TypeDescriptor>,
    /// Named errors in declaration order.
    #[serde(default)]
    pub errors: Vec<ErrorDescriptor>,
    /// Configuration facts.
    #[serde(default)]
    pub config: PlanConfig,
}

impl DesignPlan {
    /// Create an empty plan for the given client.
    pub fn new(client_name: impl Into<String>) -> Self {
        Self {
            client_name: client_name.into(),
            ..Default::default()
        }
    }

    /// Parse and validate a plan serialized as JSON by an upstream analyser.
    pub fn from_json(content: &str) -> Result<Self> {
        Self::from_json_with_filename(content, "plan.json")
    }

    /// Parse and validate a JSON plan with a custom filename for error reporting.
    pub fn from_json_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let plan: DesignPlan = serde_json::from_str(content).map_err(|e| ctx.json_error(e))?;
        validate::validate_plan(&plan, &ctx)?;
        Ok(plan)
    }

    /// Validate an in-memory plan.
    pub fn validate(&self) -> Result<()> {
        validate::validate_plan(self, &SourceContext::detached())
    }

    /// Look up a method by name.
    pub fn method(&self, name: &str) -> Option<&MethodDescriptor> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// Look up a type by name.
    pub fn type_named(&self, name: &str) -> Option<&TypeDescriptor> {
        self.types.iter().find(|t| t.name == name)
    }
}

/// One SDK method.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "parameters")]
    pub params: Vec<ParamDescriptor>,
    /// Declared return type; `None` means the method returns nothing.
    #[serde(default, alias = "returnType", alias = "return_type")]
    pub returns: Option<String>,
    /// Whether the method resolves asynchronously.
    #[serde(default, rename = "async", alias = "is_async", alias = "isAsync")]
    pub is_async: bool,
    /// Deprecation note, if the method is deprecated.
    #[serde(default)]
    pub deprecated: Option<String>,
}

impl MethodDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn param(mut self, param: ParamDescriptor) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.returns = Some(ty.into());
        self
    }

    pub fn async_(mut self) -> Self {
        self.is_async = true;
        self
    }

    /// Required parameters in declaration order.
    pub fn required_params(&self) -> impl Iterator<Item = &ParamDescriptor> {
        self.params.iter().filter(|p| !p.optional)
    }

    /// Return type as the client declares it: the declared type or `void`,
    /// wrapped in `Promise<..>` for async methods.
    pub fn return_type(&self) -> String {
        let ty = self.returns.as_deref().unwrap_or("void");
        if self.is_async {
            format!("Promise<{}>", ty)
        } else {
            ty.to_string()
        }
    }

    /// Parameters as they appear in the method's signature.
    ///
    /// A required parameter cannot follow an optional one, so an optional
    /// parameter declared before a required one loses its `?` and is typed
    /// `T | undefined` instead.
    pub fn signature_params(&self) -> Vec<SignatureParam<'_>> {
        let last_required = self.last_required();
        self.params
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let skippable = p.optional && last_required.is_none_or(|last| i > last);
                let ty = if p.optional && !skippable {
                    format!("{} | undefined", p.ty)
                } else {
                    p.ty.clone()
                };
                SignatureParam {
                    name: &p.name,
                    ty,
                    optional: skippable,
                }
            })
            .collect()
    }

    /// Positional arguments of a call binding every required parameter by
    /// name. Optional parameters before the last required one are passed as
    /// `undefined`; trailing ones are left out.
    pub fn call_args(&self) -> Vec<&str> {
        let Some(last) = self.last_required() else {
            return Vec::new();
        };
        self.params[..=last]
            .iter()
            .map(|p| if p.optional { "undefined" } else { p.name.as_str() })
            .collect()
    }

    fn last_required(&self) -> Option<usize> {
        self.params.iter().rposition(|p| !p.optional)
    }
}

/// One parameter of a rendered method signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureParam<'a> {
    pub name: &'a str,
    pub ty: String,
    /// Whether the parameter is declared with `?`.
    pub optional: bool,
}

impl fmt::Display for SignatureParam<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.optional {
            write!(f, "{}?: {}", self.name, self.ty)
        } else {
            write!(f, "{}: {}", self.name, self.ty)
        }
    }
}

/// One method parameter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParamDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub description: Option<String>,
}

impl ParamDescriptor {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            ..Default::default()
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A named record type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

impl TypeDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }
}

/// One field of a named type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub description: Option<String>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            ..Default::default()
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// A named failure mode of the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorDescriptor {
    /// Unique error code; also the error's type name.
    #[serde(alias = "type")]
    pub code: String,
    /// Declared category, used when the code alone is not conclusive.
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cause: String,
    #[serde(default)]
    pub remedy: String,
    #[serde(default)]
    pub example: Option<String>,
}

impl ErrorDescriptor {
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    pub fn cause(mut self, cause: impl Into<String>) -> Self {
        self.cause = cause.into();
        self
    }

    pub fn remedy(mut self, remedy: impl Into<String>) -> Self {
        self.remedy = remedy.into();
        self
    }

    /// Category inferred from the code, falling back to the declared one.
    pub fn resolved_category(&self) -> ErrorCategory {
        ErrorCategory::resolve(&self.code, &self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AuthMethod, Error};

    #[test]
    fn test_from_json() {
        let plan = DesignPlan::from_json(
            r#"{
                "clientName": "ChainClient",
                "methods": [
                    {
                        "name": "getBalance",
                        "parameters": [{ "name": "address", "type": "string" }],
                        "returnType": "number"
                    }
                ],
                "errors": [{ "type": "auth_expired", "description": "Token expired" }],
                "config": { "authRequired": true, "authMethod": "api_key" }
            }"#,
        )
        .unwrap();

        assert_eq!(plan.client_name, "ChainClient");
        let method = plan.method("getBalance").unwrap();
        assert_eq!(method.params[0].name, "address");
        assert_eq!(method.returns.as_deref(), Some("number"));
        assert_eq!(plan.errors[0].code, "auth_expired");
        assert_eq!(plan.config.auth_method, AuthMethod::ApiKey);
    }

    #[test]
    fn test_from_json_reports_syntax_errors() {
        let err = DesignPlan::from_json("{ \"clientName\": ").unwrap_err();
        assert!(matches!(*err, Error::Json { .. }));
    }

    #[test]
    fn test_from_json_rejects_duplicates() {
        let err = DesignPlan::from_json(
            r#"{ "clientName": "C", "methods": [{ "name": "a" }, { "name": "a" }] }"#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::DuplicateMethod { ref name, .. } if name == "a"));
    }

    #[test]
    fn test_resolved_category() {
        let err = ErrorDescriptor {
            code: "E42".into(),
            category: "rate_limit".into(),
            ..Default::default()
        };
        assert_eq!(err.resolved_category(), ErrorCategory::RateLimit);
    }

    #[test]
    fn test_builder_helpers() {
        let method = MethodDescriptor::new("transfer")
            .param(ParamDescriptor::new("to", "string"))
            .param(ParamDescriptor::new("memo", "string").optional())
            .returns("Receipt")
            .async_();
        assert_eq!(method.required_params().count(), 1);
        assert!(method.is_async);
        assert_eq!(method.return_type(), "Promise<Receipt>");
        assert_eq!(MethodDescriptor::new("ping").return_type(), "void");
    }

    #[test]
    fn test_signature_params_trailing_optional() {
        let method = MethodDescriptor::new("getBalance")
            .param(ParamDescriptor::new("address", "string"))
            .param(ParamDescriptor::new("block", "number").optional());
        let rendered: Vec<_> = method.signature_params().iter().map(|p| p.to_string()).collect();
        assert_eq!(rendered, vec!["address: string", "block?: number"]);
        assert_eq!(method.call_args(), vec!["address"]);
    }

    #[test]
    fn test_optional_before_required() {
        let method = MethodDescriptor::new("transfer")
            .param(ParamDescriptor::new("memo", "string").optional())
            .param(ParamDescriptor::new("to", "string"))
            .param(ParamDescriptor::new("fee", "number").optional());
        let rendered: Vec<_> = method.signature_params().iter().map(|p| p.to_string()).collect();
        assert_eq!(
            rendered,
            vec!["memo: string | undefined", "to: string", "fee?: number"]
        );
        assert_eq!(method.call_args(), vec!["undefined", "to"]);
    }
}
