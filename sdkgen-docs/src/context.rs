//! Read-only documentation context.

use indexmap::IndexMap;
use sdkgen_plan::{
    CredentialField, DesignPlan, ErrorDescriptor, ExampleEntry, MethodDescriptor, PlanFile,
    TypeDescriptor,
};
use tracing::warn;

use crate::DocsConfig;

/// Everything the section builders read.
///
/// Methods, types and errors are keyed by name in plan order. When a name
/// repeats, the last entry wins and keeps the position of the first; each
/// collision is logged and listed in [`warnings`](Self::warnings).
#[derive(Debug, Clone)]
pub struct DocContext {
    config: DocsConfig,
    client_name: String,
    methods: IndexMap<String, MethodDescriptor>,
    types: IndexMap<String, TypeDescriptor>,
    errors: IndexMap<String, ErrorDescriptor>,
    examples: Vec<ExampleEntry>,
    prerequisites: Vec<String>,
    setup_steps: Vec<String>,
    warnings: Vec<String>,
}

fn index_by_name<T: Clone>(
    kind: &str,
    items: &[T],
    name: impl Fn(&T) -> &str,
    warnings: &mut Vec<String>,
) -> IndexMap<String, T> {
    let mut map = IndexMap::with_capacity(items.len());
    for item in items {
        let key = name(item).to_string();
        if map.insert(key.clone(), item.clone()).is_some() {
            warn!(kind, name = %key, "duplicate entry, keeping the last one");
            warnings.push(format!("duplicate {} '{}': the last definition wins", kind, key));
        }
    }
    map
}

impl DocContext {
    pub fn new(plan: &DesignPlan, config: DocsConfig) -> Self {
        let mut warnings = Vec::new();
        let methods = index_by_name("method", &plan.methods, |m| m.name.as_str(), &mut warnings);
        let types = index_by_name("type", &plan.types, |t| t.name.as_str(), &mut warnings);
        let errors = index_by_name("error", &plan.errors, |e| e.code.as_str(), &mut warnings);
        Self {
            config,
            client_name: plan.client_name.clone(),
            methods,
            types,
            errors,
            examples: Vec::new(),
            prerequisites: Vec::new(),
            setup_steps: Vec::new(),
            warnings,
        }
    }

    /// Context for a loaded plan file, with its examples and docs settings attached.
    pub fn from_plan_file(file: &PlanFile) -> Self {
        Self::new(&file.plan, DocsConfig::from_plan_file(file))
            .with_examples(file.examples.clone())
            .with_prerequisites(file.docs.prerequisites.clone())
            .with_setup_steps(file.docs.setup_steps.clone())
    }

    pub fn with_examples(mut self, examples: Vec<ExampleEntry>) -> Self {
        self.examples = examples;
        self
    }

    pub fn with_prerequisites(mut self, prerequisites: Vec<String>) -> Self {
        self.prerequisites = prerequisites;
        self
    }

    pub fn with_setup_steps(mut self, steps: Vec<String>) -> Self {
        self.setup_steps = steps;
        self
    }

    pub fn config(&self) -> &DocsConfig {
        &self.config
    }

    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    pub fn methods(&self) -> &IndexMap<String, MethodDescriptor> {
        &self.methods
    }

    /// The first method in plan order.
    pub fn first_method(&self) -> Option<&MethodDescriptor> {
        self.methods.values().next()
    }

    pub fn types(&self) -> &IndexMap<String, TypeDescriptor> {
        &self.types
    }

    pub fn errors(&self) -> &IndexMap<String, ErrorDescriptor> {
        &self.errors
    }

    pub fn examples(&self) -> &[ExampleEntry] {
        &self.examples
    }

    pub fn prerequisites(&self) -> &[String] {
        &self.prerequisites
    }

    pub fn setup_steps(&self) -> &[String] {
        &self.setup_steps
    }

    /// Non-fatal problems found while building the context.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Credentials of the effective auth method; empty when auth is off.
    pub fn credential_fields(&self) -> &'static [CredentialField] {
        if self.config.requires_auth() {
            self.config.auth_method.credential_fields()
        } else {
            &[]
        }
    }
}

#[cfg(test)]
mod tests {
    use sdkgen_plan::ParamDescriptor;

    use super::*;

    #[test]
    fn test_insertion_order() {
        let mut plan = DesignPlan::new("C");
        plan.methods = vec![
            MethodDescriptor::new("zeta"),
            MethodDescriptor::new("alpha"),
            MethodDescriptor::new("mid"),
        ];
        let ctx = DocContext::new(&plan, DocsConfig::new("c"));
        let names: Vec<_> = ctx.methods().keys().map(String::as_str).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
        assert_eq!(ctx.first_method().map(|m| m.name.as_str()), Some("zeta"));
    }

    #[test]
    fn test_last_write_wins_with_warning() {
        let mut plan = DesignPlan::new("C");
        plan.methods = vec![
            MethodDescriptor::new("get"),
            MethodDescriptor::new("list"),
            MethodDescriptor::new("get").param(ParamDescriptor::new("id", "string")),
        ];
        let ctx = DocContext::new(&plan, DocsConfig::new("c"));

        assert_eq!(ctx.methods().len(), 2);
        assert_eq!(ctx.methods()["get"].params.len(), 1);
        assert_eq!(ctx.methods().get_index(0).map(|(k, _)| k.as_str()), Some("get"));
        assert_eq!(ctx.warnings(), ["duplicate method 'get': the last definition wins"]);
    }

    #[test]
    fn test_contributions_attached() {
        let ctx = DocContext::new(&DesignPlan::new("C"), DocsConfig::new("c"))
            .with_prerequisites(vec!["A funded wallet".into()])
            .with_setup_steps(vec!["Create a project".into()]);
        assert_eq!(ctx.prerequisites(), ["A funded wallet"]);
        assert_eq!(ctx.setup_steps(), ["Create a project"]);
        assert!(ctx.examples().is_empty());
    }
}
