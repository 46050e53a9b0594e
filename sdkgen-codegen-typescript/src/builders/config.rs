//! Client configuration interface and its defaults factory.

use sdkgen_codegen::{
    BuildError,
    ast::{
        Declaration, Expression, FunctionDeclaration, InterfaceDeclaration, InterfaceProperty,
        JsDoc, ObjectExpression, Parameter, Statement,
    },
};
use sdkgen_plan::DesignPlan;

use super::require;

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Default retry count.
pub const DEFAULT_RETRIES: u32 = 3;

/// Function type of the pluggable transport.
pub const TRANSPORT_TYPE: &str = "(method: string, params: Record<string, unknown>, credentials: Record<string, string | undefined>) => unknown";

/// `ChainClient` -> `ChainClientConfig`
pub fn config_name(client_name: &str) -> String {
    format!("{}Config", client_name)
}

/// `ChainClient` -> `createChainClientConfig`
pub fn factory_name(client_name: &str) -> String {
    format!("create{}Config", client_name)
}

/// Build the config interface followed by the `create<Client>Config` factory.
pub fn build_config(plan: &DesignPlan) -> Result<Vec<Declaration>, BuildError> {
    require(&plan.client_name, "plan", "client_name")?;
    let name = config_name(&plan.client_name);

    let mut interface = InterfaceDeclaration::new(&name);
    interface.doc = Some(JsDoc::text(format!(
        "Options accepted by {}.",
        plan.client_name
    )));
    for field in plan.config.credential_fields() {
        interface = interface.property(
            InterfaceProperty::new(field.property, field.ty)
                .optional()
                .doc(field.description),
        );
    }
    interface = interface
        .property(
            InterfaceProperty::new("baseUrl", "string")
                .optional()
                .doc("Base URL of the API"),
        )
        .property(
            InterfaceProperty::new("timeout", "number")
                .optional()
                .doc(format!("Request timeout in milliseconds (default {})", DEFAULT_TIMEOUT_MS)),
        )
        .property(
            InterfaceProperty::new("retries", "number")
                .optional()
                .doc(format!("Retry attempts for retryable errors (default {})", DEFAULT_RETRIES)),
        )
        .property(
            InterfaceProperty::new("transport", TRANSPORT_TYPE)
                .optional()
                .doc("Function that performs the request"),
        );

    let options = || Expression::ident("options");
    let mut defaults = ObjectExpression::new();
    for field in plan.config.credential_fields() {
        defaults = defaults.property(field.property, options().member(field.property));
    }
    defaults = defaults
        .property("baseUrl", options().member("baseUrl"))
        .property(
            "timeout",
            Expression::binary(
                options().member("timeout"),
                "??",
                DEFAULT_TIMEOUT_MS.to_string(),
            ),
        )
        .property(
            "retries",
            Expression::binary(options().member("retries"), "??", DEFAULT_RETRIES.to_string()),
        )
        .property("transport", options().member("transport"));

    let factory = FunctionDeclaration::new(factory_name(&plan.client_name))
        .param(Parameter::new("options", &name).default_value("{}"))
        .returns(&name)
        .statement(Statement::ret(defaults.into()))
        .doc(
            JsDoc::text("Resolve client options, filling in defaults.")
                .param("options", "Caller-supplied options")
                .returns("Options with every default applied"),
        );

    Ok(vec![interface.into(), factory.into()])
}
