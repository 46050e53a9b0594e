use sdkgen_plan::{MethodDescriptor, TypeDescriptor};

use super::{Section, SectionKind, join_blocks};
use crate::{DocContext, snippets};

/// `docs/api-reference.md`: signatures, parameters and types.
pub struct ApiReference;

fn table<'a>(
    first_column: &str,
    rows: impl Iterator<Item = (&'a str, &'a str, bool, Option<&'a str>)>,
) -> String {
    let mut out = format!(
        "| {} | Type | Required | Description |\n| --- | --- | --- | --- |",
        first_column
    );
    for (name, ty, optional, description) in rows {
        out.push_str(&format!(
            "\n| `{}` | `{}` | {} | {} |",
            name,
            ty.replace('|', "\\|"),
            if optional { "No" } else { "Yes" },
            description.unwrap_or("")
        ));
    }
    out
}

impl ApiReference {
    fn method(method: &MethodDescriptor) -> String {
        let mut out = format!("### `{}`", snippets::signature(method));
        if let Some(note) = &method.deprecated {
            out.push_str(&format!("\n\n> **Deprecated:** {}", note));
        }
        if let Some(description) = &method.description {
            out.push_str("\n\n");
            out.push_str(description);
        }
        if !method.params.is_empty() {
            out.push_str("\n\n");
            out.push_str(&table(
                "Parameter",
                method.params.iter().map(|p| {
                    (p.name.as_str(), p.ty.as_str(), p.optional, p.description.as_deref())
                }),
            ));
        }
        out.push_str(&format!("\n\n**Returns:** `{}`", method.return_type()));
        out
    }

    fn type_entry(ty: &TypeDescriptor) -> String {
        let mut out = format!("### `{}`", ty.name);
        if let Some(description) = &ty.description {
            out.push_str("\n\n");
            out.push_str(description);
        }
        if !ty.fields.is_empty() {
            out.push_str("\n\n");
            out.push_str(&table(
                "Field",
                ty.fields.iter().map(|f| {
                    (f.name.as_str(), f.ty.as_str(), f.optional, f.description.as_deref())
                }),
            ));
        }
        out
    }
}

impl Section for ApiReference {
    fn kind(&self) -> SectionKind {
        SectionKind::ApiReference
    }

    fn build(&self, ctx: &DocContext) -> String {
        if ctx.methods().is_empty() && ctx.types().is_empty() {
            return String::new();
        }
        let client = ctx.client_name();
        let mut blocks = vec![
            "# API Reference".to_string(),
            format!(
                "## `{}`\n\n{}",
                client,
                snippets::code_block(
                    "typescript",
                    &format!("new {}(options?: {}Config)", client, client)
                )
            ),
        ];
        if !ctx.methods().is_empty() {
            blocks.push("## Methods".to_string());
            blocks.extend(ctx.methods().values().map(Self::method));
        }
        if !ctx.types().is_empty() {
            blocks.push("## Types".to_string());
            blocks.extend(ctx.types().values().map(Self::type_entry));
        }
        join_blocks(blocks)
    }
}

#[cfg(test)]
mod tests {
    use sdkgen_plan::{DesignPlan, FieldDescriptor, ParamDescriptor};

    use super::*;
    use crate::DocsConfig;

    #[test]
    fn test_empty_plan_renders_nothing() {
        let ctx = DocContext::new(&DesignPlan::new("C"), DocsConfig::new("c"));
        assert_eq!(ApiReference.build(&ctx), "");
    }

    #[test]
    fn test_method_and_type() {
        let mut plan = DesignPlan::new("ChainClient");
        plan.methods = vec![
            MethodDescriptor::new("getBalance")
                .describe("Fetch the balance of an address.")
                .param(ParamDescriptor::new("address", "string").describe("Account address"))
                .returns("number"),
        ];
        plan.types = vec![
            TypeDescriptor::new("Block").field(FieldDescriptor::new("hash", "string").optional()),
        ];
        let ctx = DocContext::new(&plan, DocsConfig::new("chain-sdk"));
        insta::assert_snapshot!(ApiReference.build(&ctx), @r"
        # API Reference

        ## `ChainClient`

        ```typescript
        new ChainClient(options?: ChainClientConfig)
        ```

        ## Methods

        ### `getBalance(address: string): number`

        Fetch the balance of an address.

        | Parameter | Type | Required | Description |
        | --- | --- | --- | --- |
        | `address` | `string` | Yes | Account address |

        **Returns:** `number`

        ## Types

        ### `Block`

        | Field | Type | Required | Description |
        | --- | --- | --- | --- |
        | `hash` | `string` | No |  |
        ");
    }
}
