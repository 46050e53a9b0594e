//! Plan validation.
//!
//! Checks the invariants the generators rely on: required names are present,
//! method names and error codes are unique, and the auth facts agree.

use std::collections::HashSet;

use crate::{AuthMethod, DesignPlan, Result, SourceContext};

/// Validate a plan, reporting the first problem found.
pub(crate) fn validate_plan(plan: &DesignPlan, ctx: &SourceContext) -> Result<()> {
    if plan.client_name.trim().is_empty() {
        return Err(ctx.missing_field("plan", "client_name"));
    }

    let mut method_names = HashSet::new();
    for (i, method) in plan.methods.iter().enumerate() {
        if method.name.trim().is_empty() {
            return Err(ctx.missing_field(format!("methods[{}]", i), "name"));
        }
        for (j, param) in method.params.iter().enumerate() {
            let entity = format!("methods.{}.params[{}]", method.name, j);
            if param.name.trim().is_empty() {
                return Err(ctx.missing_field(entity, "name"));
            }
            if param.ty.trim().is_empty() {
                return Err(ctx.missing_field(entity, "type"));
            }
        }
        if !method_names.insert(method.name.as_str()) {
            return Err(ctx.duplicate_method(&method.name));
        }
    }

    for (i, ty) in plan.types.iter().enumerate() {
        if ty.name.trim().is_empty() {
            return Err(ctx.missing_field(format!("types[{}]", i), "name"));
        }
        for (j, field) in ty.fields.iter().enumerate() {
            if field.name.trim().is_empty() {
                return Err(ctx.missing_field(format!("types.{}.fields[{}]", ty.name, j), "name"));
            }
        }
    }

    let mut codes = HashSet::new();
    for (i, error) in plan.errors.iter().enumerate() {
        if error.code.trim().is_empty() {
            return Err(ctx.missing_field(format!("errors[{}]", i), "code"));
        }
        if !codes.insert(error.code.as_str()) {
            return Err(ctx.duplicate_error_code(&error.code));
        }
    }

    if plan.config.auth_required && plan.config.auth_method == AuthMethod::None {
        return Err(ctx.validation_error(
            "auth_required is true but auth_method is \"none\"",
            Some("auth_required"),
        ));
    }

    Ok(())
}
