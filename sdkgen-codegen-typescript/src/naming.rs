//! TypeScript-specific naming conventions.

use sdkgen_codegen::NamingConvention;
use sdkgen_core::{to_camel_case, to_kebab_case, to_pascal_case};

fn escape_ts_reserved(name: &str) -> String {
    format!("_{}", name)
}

/// TypeScript naming conventions.
pub const TS_NAMING: NamingConvention = NamingConvention {
    // Types and error classes use PascalCase
    to_type: to_pascal_case,
    // Properties and methods use camelCase
    to_member: to_camel_case,
    // Files use kebab-case
    to_file: to_kebab_case,
    reserved_words: &[
        // JavaScript reserved words
        "break",
        "case",
        "catch",
        "class",
        "const",
        "continue",
        "debugger",
        "default",
        "delete",
        "do",
        "else",
        "enum",
        "export",
        "extends",
        "false",
        "finally",
        "for",
        "function",
        "if",
        "import",
        "in",
        "instanceof",
        "let",
        "new",
        "null",
        "return",
        "super",
        "switch",
        "this",
        "throw",
        "true",
        "try",
        "typeof",
        "var",
        "void",
        "while",
        "with",
        "yield",
        // TypeScript reserved words
        "any",
        "as",
        "async",
        "await",
        "boolean",
        "constructor",
        "declare",
        "get",
        "implements",
        "interface",
        "module",
        "namespace",
        "never",
        "number",
        "object",
        "package",
        "private",
        "protected",
        "public",
        "readonly",
        "require",
        "set",
        "static",
        "string",
        "symbol",
        "type",
        "undefined",
        "unknown",
    ],
    escape_reserved: escape_ts_reserved,
};

/// Whether `name` can be used as an unquoted object key.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// Class name of the error with the given code (`auth_expired` -> `AuthExpiredError`).
///
/// Characters that cannot appear in an identifier are dropped, and a name
/// that would start with a digit takes the suffix as a prefix instead
/// (`429` -> `Error429`).
pub fn error_class_name(code: &str) -> String {
    let mut base = TS_NAMING.type_name(code);
    base.retain(|c| c.is_alphanumeric() || c == '_' || c == '$');
    if !is_identifier(&base) {
        format!("Error{}", base)
    } else if base.ends_with("Error") {
        base
    } else {
        format!("{}Error", base)
    }
}
