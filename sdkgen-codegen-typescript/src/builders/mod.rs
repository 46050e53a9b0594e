//! Plan-to-AST builders.
//!
//! Stateless functions turning design plan fragments into declarations.
//! Builders never invent names: a fragment without one fails with
//! [`BuildError::MissingField`], and one whose generated name is already
//! declared fails with [`BuildError::NameConflict`].

mod client;
mod config;
mod errors;
mod method;
mod types;

pub use client::{REQUEST_HELPER, build_client};
pub use config::{
    DEFAULT_RETRIES, DEFAULT_TIMEOUT_MS, TRANSPORT_TYPE, build_config, config_name, factory_name,
};
pub use errors::{CATEGORY_ENUM, base_error_name, build_errors, category_member};
pub use method::build_method;
pub use types::build_type;

use sdkgen_codegen::{BuildError, ast::Program};
use sdkgen_plan::DesignPlan;
use tracing::debug;

/// Globals the generated source refers to.
const SHADOWED_GLOBALS: &[&str] = &["Error", "Promise", "Record"];

fn require(value: &str, entity: impl Into<String>, field: &'static str) -> Result<(), BuildError> {
    if value.trim().is_empty() {
        Err(BuildError::missing(entity, field))
    } else {
        Ok(())
    }
}

fn ensure_free<'a>(
    name: &str,
    entity: impl Into<String>,
    taken: impl IntoIterator<Item = &'a str>,
) -> Result<(), BuildError> {
    if SHADOWED_GLOBALS.contains(&name) || taken.into_iter().any(|t| t == name) {
        Err(BuildError::conflict(entity, name))
    } else {
        Ok(())
    }
}

fn declared_names(program: &Program) -> impl Iterator<Item = &str> {
    program.body.iter().filter_map(|d| d.name())
}

/// Build the whole program: config interface, config factory, errors,
/// types, then the client class.
pub fn build_program(plan: &DesignPlan) -> Result<Program, BuildError> {
    require(&plan.client_name, "plan", "client_name")?;

    let mut program = Program::new();
    program.extend(build_config(plan)?);
    program.extend(build_errors(plan)?);
    for (i, ty) in plan.types.iter().enumerate() {
        let entity = format!("types[{}]", i);
        require(&ty.name, &entity, "name")?;
        ensure_free(&ty.name, entity, declared_names(&program))?;
        program.push(build_type(ty)?);
    }
    ensure_free(&plan.client_name, "plan.client_name", declared_names(&program))?;
    program.push(build_client(plan)?);

    debug!(
        client = %plan.client_name,
        declarations = program.len(),
        "built program"
    );
    Ok(program)
}
