//! Client methods.

use sdkgen_codegen::{
    BuildError,
    ast::{Expression, JsDoc, MethodDeclaration, ObjectExpression, Operand, Parameter, Statement},
};
use sdkgen_plan::MethodDescriptor;

use super::{client::REQUEST_HELPER, errors::base_error_name, require};

/// Build one client method forwarding to the private `request` helper.
///
/// Parameter names and types are copied verbatim; nothing is renamed.
pub fn build_method(
    method: &MethodDescriptor,
    client_name: &str,
) -> Result<MethodDeclaration, BuildError> {
    require(&method.name, "method", "name")?;

    for (j, param) in method.params.iter().enumerate() {
        let entity = format!("methods.{}.params[{}]", method.name, j);
        require(&param.name, &entity, "name")?;
        require(&param.ty, &entity, "type")?;
    }

    let mut decl = MethodDeclaration::new(&method.name).returns(method.return_type());
    let mut params = ObjectExpression::new();
    for param in method.signature_params() {
        let mut p = Parameter::new(param.name, &param.ty);
        p.optional = param.optional;
        decl = decl.param(p);
        params = params.property(param.name, Expression::ident(param.name));
    }

    decl = decl.statement(Statement::ret(Expression::this().member(REQUEST_HELPER).call([
        Operand::from(Expression::string(&method.name)),
        Operand::from(Expression::from(params)),
    ])));

    let doc = method_doc(method, client_name);
    if !doc.is_empty() {
        decl = decl.doc(doc);
    }
    Ok(decl)
}

fn method_doc(method: &MethodDescriptor, client_name: &str) -> JsDoc {
    let mut doc = JsDoc::new();
    if let Some(description) = &method.description {
        doc = doc.description(description);
    }
    for param in &method.params {
        if let Some(description) = &param.description {
            doc = doc.param(&param.name, description);
        }
    }
    if let Some(note) = &method.deprecated {
        doc = doc.deprecated(note);
    }
    if doc.is_empty() {
        return doc;
    }
    doc.throws(format!(
        "{{@link {}}} when the request fails",
        base_error_name(client_name)
    ))
}
