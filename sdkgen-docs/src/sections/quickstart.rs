use super::{Section, SectionKind, bullets, join_blocks};
use crate::{DocContext, snippets};

/// Common tasks shown after the first request.
const COMMON_TASKS: usize = 3;

/// `docs/quickstart.md`: zero to first request.
pub struct Quickstart;

impl Quickstart {
    fn prerequisites(ctx: &DocContext) -> String {
        let mut items: Vec<String> = Vec::new();
        if let Some(runtime) = ctx.config().runtime_requirement() {
            items.push(runtime.to_string());
        }
        items.extend(ctx.prerequisites().iter().cloned());
        if ctx.config().requires_auth() {
            items.push(format!(
                "{} credentials for the API",
                ctx.config().auth_method.display_name()
            ));
        } else {
            items.push("No API credentials: no setup required".to_string());
        }
        format!("## Prerequisites\n\n{}", bullets(items))
    }

    fn setup(ctx: &DocContext) -> String {
        if ctx.setup_steps().is_empty() {
            return String::new();
        }
        let steps = ctx
            .setup_steps()
            .iter()
            .enumerate()
            .map(|(i, step)| format!("{}. {}", i + 1, step))
            .collect::<Vec<_>>()
            .join("\n");
        format!("## Setup\n\n{}", steps)
    }

    /// Install, credentials and first request, numbered in that order.
    fn steps(ctx: &DocContext) -> Vec<String> {
        let config = ctx.config();
        let fence = snippets::fence_language(config.language);
        let mut steps: Vec<(&str, String)> = Vec::new();

        if let Some(command) = config.install_command() {
            steps.push(("Install the SDK", snippets::code_block("bash", &command)));
        }

        let fields = ctx.credential_fields();
        if !fields.is_empty() {
            let exports = fields
                .iter()
                .map(|f| {
                    format!(
                        "export {}=\"your-{}\"",
                        config.env_var(f.env_suffix),
                        sdkgen_core::to_kebab_case(f.property)
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");
            steps.push(("Configure credentials", snippets::code_block("bash", &exports)));
        }

        let mut body = vec![snippets::import_line(ctx), snippets::client_setup(ctx)];
        if let Some(method) = ctx.first_method() {
            body.push(snippets::call_example(method));
        }
        steps.push((
            "Make your first request",
            snippets::code_block(fence, &body.join("\n\n")),
        ));

        steps
            .into_iter()
            .enumerate()
            .map(|(i, (title, body))| format!("## Step {}: {}\n\n{}", i + 1, title, body))
            .collect()
    }

    fn common_tasks(ctx: &DocContext) -> String {
        if ctx.methods().is_empty() {
            return String::new();
        }
        let fence = snippets::fence_language(ctx.config().language);
        let mut out = String::from("## Common Tasks");
        for method in ctx.methods().values().take(COMMON_TASKS) {
            out.push_str(&format!("\n\n### `{}`", method.name));
            if let Some(description) = &method.description {
                out.push_str("\n\n");
                out.push_str(description);
            }
            out.push_str("\n\n");
            out.push_str(&snippets::code_block(fence, &snippets::call_example(method)));
        }
        out
    }
}

impl Section for Quickstart {
    fn kind(&self) -> SectionKind {
        SectionKind::Quickstart
    }

    fn build(&self, ctx: &DocContext) -> String {
        let intro = format!(
            "# Quickstart\n\nGet up and running with {} in a few minutes.",
            ctx.config().sdk_name
        );
        let next_steps = "## Next Steps\n\n\
            - [Authentication](./authentication.md)\n\
            - [Examples](./examples.md)\n\
            - [Error Handling](./error-handling.md)\n\
            - [API Reference](./api-reference.md)";

        let mut blocks = vec![intro];
        blocks.extend(snippets::reference_note(ctx));
        blocks.push(Self::prerequisites(ctx));
        blocks.push(Self::setup(ctx));
        blocks.extend(Self::steps(ctx));
        blocks.push(Self::common_tasks(ctx));
        blocks.push(next_steps.to_string());
        join_blocks(blocks)
    }
}

#[cfg(test)]
mod tests {
    use sdkgen_plan::{AuthMethod, DesignPlan, MethodDescriptor, TargetLanguage};

    use super::*;
    use crate::DocsConfig;

    fn plan(methods: &[&str]) -> DesignPlan {
        let mut plan = DesignPlan::new("ChainClient");
        plan.methods = methods.iter().map(|m| MethodDescriptor::new(*m)).collect();
        plan
    }

    #[test]
    fn test_no_auth_skips_credentials() {
        let ctx = DocContext::new(&plan(&["ping"]), DocsConfig::new("chain-sdk"));
        let doc = Quickstart.build(&ctx);
        assert!(doc.contains("no setup required"));
        assert!(!doc.contains("Configure credentials"));
        assert!(doc.contains("## Step 2: Make your first request"));
    }

    #[test]
    fn test_auth_adds_export_step() {
        let mut config = DocsConfig::new("chain-sdk");
        config.auth_required = true;
        config.auth_method = AuthMethod::ApiKey;
        let doc = Quickstart.build(&DocContext::new(&plan(&["ping"]), config));
        assert!(doc.contains("## Step 2: Configure credentials"));
        assert!(doc.contains("export CHAIN_SDK_API_KEY=\"your-api-key\""));
        assert!(doc.contains("apiKey: process.env.CHAIN_SDK_API_KEY,"));
    }

    #[test]
    fn test_docs_only_target_skips_install() {
        let mut config = DocsConfig::new("chain-sdk");
        config.language = TargetLanguage::Go;
        let doc = Quickstart.build(&DocContext::new(&plan(&["ping"]), config));
        assert!(!doc.contains("go get"));
        assert!(!doc.contains("Go 1.22"));
        assert!(doc.contains("> No Go client is generated."));
        assert!(doc.contains("## Step 1: Make your first request"));
    }

    #[test]
    fn test_common_tasks_capped_at_three() {
        let ctx = DocContext::new(&plan(&["a", "b", "c", "d"]), DocsConfig::new("chain-sdk"));
        let doc = Quickstart.build(&ctx);
        assert!(doc.contains("### `c`"));
        assert!(!doc.contains("### `d`"));
    }
}
