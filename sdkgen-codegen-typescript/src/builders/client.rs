//! The client entry point class.

use sdkgen_codegen::{
    BuildError,
    ast::{
        ClassDeclaration, ConstructorDeclaration, Expression, IfStatement, JsDoc,
        MethodDeclaration, NewExpression, ObjectExpression, Operand, Parameter,
        PropertyDeclaration, Statement,
    },
};
use sdkgen_plan::{DesignPlan, ErrorCategory};

use super::{
    config::{config_name, factory_name},
    errors::{base_error_name, category_member},
    method::build_method,
    require,
};

/// Name of the private helper every method forwards to.
pub const REQUEST_HELPER: &str = "request";

/// Build the client class: config and credential properties, constructor,
/// one method per plan method, then the private request helper.
///
/// A plan method named after one of the class's own members fails with
/// [`BuildError::NameConflict`].
pub fn build_client(plan: &DesignPlan) -> Result<ClassDeclaration, BuildError> {
    require(&plan.client_name, "plan", "client_name")?;
    let client = &plan.client_name;
    let config = config_name(client);
    let credentials = plan.config.credential_fields();

    let mut class = ClassDeclaration::new(client)
        .property(PropertyDeclaration::new("config", &config).private().readonly());
    for field in credentials {
        class = class.property(
            PropertyDeclaration::new(field.property, field.ty)
                .private()
                .readonly()
                .optional(),
        );
    }

    let mut body = vec![Statement::assign(
        Expression::this().member("config"),
        Expression::ident(factory_name(client)).call([Operand::from("options")]),
    )];
    for field in credentials {
        body.push(Statement::assign(
            Expression::this().member(field.property),
            Expression::this().member("config").member(field.property),
        ));
    }
    class = class.constructor(ConstructorDeclaration {
        params: vec![Parameter::new("options", &config).default_value("{}")],
        body,
        doc: Some(JsDoc::text(format!("Create a new {}.", client)).param("options", "Client options")),
    });

    // Members the class declares itself; a plan method may not reuse them.
    let own_members: Vec<&str> = [REQUEST_HELPER, "constructor", "config"]
        .into_iter()
        .chain(credentials.iter().map(|f| f.property))
        .collect();
    for (i, method) in plan.methods.iter().enumerate() {
        let entity = format!("methods[{}]", i);
        require(&method.name, &entity, "name")?;
        if own_members.contains(&method.name.as_str()) {
            return Err(BuildError::conflict(entity, &method.name));
        }
        class = class.method(build_method(method, client)?);
    }
    class = class.method(request_helper(plan));

    let description = plan
        .description
        .clone()
        .unwrap_or_else(|| format!("Client for the {} API.", client));
    Ok(class.doc(JsDoc::text(description)))
}

fn request_helper(plan: &DesignPlan) -> MethodDeclaration {
    let client = &plan.client_name;
    let mut credentials = ObjectExpression::new();
    for field in plan.config.credential_fields() {
        credentials = credentials.property(field.property, Expression::this().member(field.property));
    }

    let missing = Statement::If(IfStatement {
        test: Expression::raw("!transport"),
        consequent: vec![Statement::throw(Expression::New(
            NewExpression::new(Expression::ident(base_error_name(client)))
                .arg(Expression::string(&format!("No transport configured for {}", client)))
                .arg(Expression::string("transport_missing"))
                .arg(category_member(ErrorCategory::Other)),
        ))],
        alternate: None,
    });

    let call = Expression::ident("transport").call([
        Operand::from("method"),
        Operand::from("params"),
        Operand::from(Expression::from(credentials)),
    ]);

    MethodDeclaration::new(REQUEST_HELPER)
        .private()
        .generic("T")
        .param(Parameter::new("method", "string"))
        .param(Parameter::new("params", "Record<string, unknown>"))
        .returns("T")
        .statement(Statement::constant(
            "transport",
            Expression::this().member("config").member("transport"),
        ))
        .statement(missing)
        .statement(Statement::ret(Expression::binary(call, "as", "T")))
}
