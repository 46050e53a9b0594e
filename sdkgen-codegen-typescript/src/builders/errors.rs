//! Error taxonomy: category enum, base error class and one subclass per code.

use sdkgen_codegen::{
    BuildError,
    ast::{
        ArrayExpression, ClassDeclaration, ConstructorDeclaration, Declaration, EnumDeclaration,
        Expression, JsDoc, MethodDeclaration, Operand, Parameter, PropertyDeclaration, Statement,
        quote,
    },
};
use sdkgen_plan::{DesignPlan, ErrorCategory, ErrorDescriptor};

use super::{ensure_free, require};
use crate::naming::error_class_name;

/// Name of the generated category enum.
pub const CATEGORY_ENUM: &str = "ErrorCategory";

/// `ChainClient` -> `ChainClientError`
pub fn base_error_name(client_name: &str) -> String {
    format!("{}Error", client_name)
}

/// `ErrorCategory.RateLimit`
pub fn category_member(category: ErrorCategory) -> String {
    format!("{}.{}", CATEGORY_ENUM, category.variant_name())
}

/// Build the category enum, the base error class and one subclass per error.
///
/// Fails when an error's class name is already declared or would shadow
/// the built-in `Error` the base class extends.
pub fn build_errors(plan: &DesignPlan) -> Result<Vec<Declaration>, BuildError> {
    require(&plan.client_name, "plan", "client_name")?;
    let base = base_error_name(&plan.client_name);

    let mut declarations: Vec<Declaration> = vec![category_enum().into(), base_class(&base).into()];
    for (i, error) in plan.errors.iter().enumerate() {
        let entity = format!("errors[{}]", i);
        require(&error.code, &entity, "code")?;
        let name = error_class_name(&error.code);
        ensure_free(&name, entity, declarations.iter().filter_map(Declaration::name))?;
        declarations.push(subclass(&base, &name, error).into());
    }
    Ok(declarations)
}

fn category_enum() -> EnumDeclaration {
    let mut decl = EnumDeclaration::new(CATEGORY_ENUM);
    for category in ErrorCategory::ALL {
        decl = decl.member(category.variant_name(), Some(quote(&category.to_string())));
    }
    decl.doc = Some(JsDoc::text("Broad family an error belongs to."));
    decl
}

fn base_class(name: &str) -> ClassDeclaration {
    let this = Expression::this;
    let constructor = ConstructorDeclaration {
        params: vec![
            Parameter::new("message", "string"),
            Parameter::new("code", "string"),
            Parameter::new("category", CATEGORY_ENUM)
                .default_value(category_member(ErrorCategory::Other)),
        ],
        body: vec![
            Statement::expr(Expression::ident("super").call([Operand::from("message")])),
            Statement::assign(this().member("name"), Expression::string(name)),
            Statement::assign(this().member("code"), Expression::ident("code")),
            Statement::assign(this().member("category"), Expression::ident("category")),
        ],
        doc: None,
    };

    let retryable = ErrorCategory::ALL
        .iter()
        .filter(|c| c.is_retryable())
        .map(|c| Operand::Raw(category_member(*c)))
        .collect();
    let is_retryable = MethodDeclaration::new("isRetryable")
        .returns("boolean")
        .statement(Statement::ret(
            Expression::Array(ArrayExpression { elements: retryable })
                .member("includes")
                .call([Operand::from(this().member("category"))]),
        ))
        .doc(JsDoc::text("Whether retrying the same request can succeed."));

    ClassDeclaration::new(name)
        .extends("Error")
        .property(PropertyDeclaration::new("code", "string").readonly())
        .property(PropertyDeclaration::new("category", CATEGORY_ENUM).readonly())
        .constructor(constructor)
        .method(is_retryable)
        .doc(JsDoc::text("Base class of every error raised by the SDK."))
}

fn subclass(base: &str, name: &str, error: &ErrorDescriptor) -> ClassDeclaration {
    let default_message = if error.description.is_empty() {
        error.code.as_str()
    } else {
        error.description.as_str()
    };

    let constructor = ConstructorDeclaration {
        params: vec![Parameter::new("message", "string").default_value(quote(default_message))],
        body: vec![
            Statement::expr(Expression::ident("super").call([
                Operand::from("message"),
                Operand::Raw(quote(&error.code)),
                Operand::Raw(category_member(error.resolved_category())),
            ])),
            Statement::assign(Expression::this().member("name"), Expression::string(name)),
        ],
        doc: None,
    };

    ClassDeclaration::new(name)
        .extends(base)
        .constructor(constructor)
        .doc(error_doc(error))
}

fn error_doc(error: &ErrorDescriptor) -> JsDoc {
    let mut paragraphs = Vec::new();
    if !error.description.is_empty() {
        paragraphs.push(error.description.clone());
    }
    if !error.cause.is_empty() {
        paragraphs.push(format!("Cause: {}", error.cause));
    }
    if !error.remedy.is_empty() {
        paragraphs.push(format!("Remedy: {}", error.remedy));
    }
    let mut doc = JsDoc::new();
    if !paragraphs.is_empty() {
        doc = doc.description(paragraphs.join("\n\n"));
    }
    if let Some(example) = &error.example {
        doc = doc.example(example);
    }
    if doc.is_empty() {
        doc = doc.description(format!("Raised with code `{}`.", error.code));
    }
    doc
}
