//! Code snippets shared by the sections.
//!
//! Method and parameter names always come from the plan entries, and
//! signatures come from [`MethodDescriptor::signature_params`] and
//! [`MethodDescriptor::return_type`], the same rules the emitted client uses.

use sdkgen_core::to_kebab_case;
use sdkgen_plan::{MethodDescriptor, TargetLanguage};

use crate::DocContext;

/// Variable name of the client in every snippet.
pub const CLIENT_VAR: &str = "client";

/// `getBalance(address: string): number`
pub fn signature(method: &MethodDescriptor) -> String {
    let params = method
        .signature_params()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("{}({}): {}", method.name, params, method.return_type())
}

/// Placeholder value for a parameter of the given type.
pub fn placeholder(name: &str, ty: &str) -> String {
    let ty = ty.trim();
    match ty {
        "string" => format!("\"your-{}\"", to_kebab_case(name)),
        "number" | "bigint" => "1".to_string(),
        "boolean" => "true".to_string(),
        _ if ty.ends_with("[]") || ty.starts_with("Array<") => "[]".to_string(),
        _ => "{}".to_string(),
    }
}

/// A call of `method` with its required parameters bound to placeholders.
///
/// Optional parameters that precede a required one are passed as `undefined`.
pub fn call_example(method: &MethodDescriptor) -> String {
    let mut lines: Vec<_> = method
        .required_params()
        .map(|p| format!("const {} = {};", p.name, placeholder(&p.name, &p.ty)))
        .collect();
    let call = format!("{}.{}({})", CLIENT_VAR, method.name, method.call_args().join(", "));
    let call = if method.is_async {
        format!("await {}", call)
    } else {
        call
    };
    if method.returns.is_some() {
        lines.push(format!("const result = {};", call));
        lines.push("console.log(result);".to_string());
    } else {
        lines.push(format!("{};", call));
    }
    lines.join("\n")
}

/// `import { ChainClient } from "chain-sdk";`
pub fn import_line(ctx: &DocContext) -> String {
    format!(
        "import {{ {} }} from \"{}\";",
        ctx.client_name(),
        ctx.config().package_name
    )
}

/// Client construction, reading credentials from the environment.
pub fn client_setup(ctx: &DocContext) -> String {
    let fields = ctx.credential_fields();
    if fields.is_empty() {
        return format!("const {} = new {}();", CLIENT_VAR, ctx.client_name());
    }
    let mut lines = vec![format!("const {} = new {}({{", CLIENT_VAR, ctx.client_name())];
    for field in fields {
        lines.push(format!(
            "  {}: process.env.{},",
            field.property,
            ctx.config().env_var(field.env_suffix)
        ));
    }
    lines.push("});".to_string());
    lines.join("\n")
}

/// Note placed above code samples when no source is generated for the
/// target language and the samples show the TypeScript client instead.
pub fn reference_note(ctx: &DocContext) -> Option<String> {
    let language = ctx.config().language;
    if language.is_emittable() {
        return None;
    }
    let subject = match language {
        TargetLanguage::Other => "No client source is generated for this target".to_string(),
        _ => format!("No {} client is generated", language.display_name()),
    };
    Some(format!(
        "> {}. Code samples show the TypeScript client as a reference for the API surface.",
        subject
    ))
}

/// Fence language of the target's code samples.
pub fn fence_language(language: TargetLanguage) -> &'static str {
    match language {
        TargetLanguage::JavaScript => "javascript",
        _ => "typescript",
    }
}

/// A fenced code block.
pub fn code_block(language: &str, body: &str) -> String {
    format!("```{}\n{}\n```", language, body.trim_end())
}
