use sdkgen_plan::ErrorCategory;

use super::{Section, SectionKind, bullets, join_blocks};
use crate::{DocContext, snippets};

/// The SDK's `README.md`.
pub struct Readme;

impl Readme {
    fn header(ctx: &DocContext) -> String {
        let config = ctx.config();
        let mut out = format!("# {}", config.sdk_name);
        if let Some(description) = &config.description {
            out.push_str("\n\n");
            out.push_str(description);
        }
        if config.sdk_version.is_prerelease() {
            out.push_str(&format!(
                "\n\n> Version {} is a pre-release; the API may change between minor versions.",
                config.sdk_version
            ));
        }
        if let Some(note) = snippets::reference_note(ctx) {
            out.push_str("\n\n");
            out.push_str(&note);
        }
        out
    }

    fn features(ctx: &DocContext) -> String {
        let mut items = Vec::new();
        let methods = ctx.methods().len();
        if methods > 0 {
            items.push(format!("{} API {}", methods, plural(methods, "method", "methods")));
        }
        let types = ctx.types().len();
        if types > 0 {
            items.push(format!("{} typed {}", types, plural(types, "model", "models")));
        }
        let errors = ctx.errors().len();
        if errors > 0 {
            items.push(format!(
                "{} documented error {}",
                errors,
                plural(errors, "type", "types")
            ));
        }
        if ctx.config().requires_auth() {
            items.push(format!(
                "Built-in {} authentication",
                ctx.config().auth_method.display_name()
            ));
        }
        if items.is_empty() {
            return String::new();
        }
        format!("## Features\n\n{}", bullets(items))
    }

    fn installation(ctx: &DocContext) -> String {
        match ctx.config().install_command() {
            Some(command) => format!(
                "## Installation\n\n{}",
                snippets::code_block("bash", &command)
            ),
            None => String::new(),
        }
    }

    fn quick_start(ctx: &DocContext) -> String {
        let Some(method) = ctx.first_method() else {
            return String::new();
        };
        let body = [
            snippets::import_line(ctx),
            snippets::client_setup(ctx),
            snippets::call_example(method),
        ]
        .join("\n\n");
        format!(
            "## Quick Start\n\n{}",
            snippets::code_block(snippets::fence_language(ctx.config().language), &body)
        )
    }

    fn error_summary(ctx: &DocContext) -> String {
        if ctx.errors().is_empty() {
            return String::new();
        }
        let mut items = Vec::new();
        for category in ErrorCategory::ALL {
            let codes: Vec<_> = ctx
                .errors()
                .values()
                .filter(|e| e.resolved_category() == category)
                .map(|e| format!("`{}`", e.code))
                .collect();
            if !codes.is_empty() {
                items.push(format!("**{}**: {}", category.heading(), codes.join(", ")));
            }
        }
        format!(
            "## Error Handling\n\nEvery error thrown by the SDK extends `{}Error` and carries a `code` and a `category`.\n\n{}\n\nSee the [error handling guide](docs/error-handling.md) for details.",
            ctx.client_name(),
            bullets(items)
        )
    }

    fn license(ctx: &DocContext) -> String {
        match &ctx.config().license {
            Some(license) => format!("## License\n\nReleased under the {} license.", license),
            None => "## License\n\nSee the LICENSE file in the repository.".to_string(),
        }
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

impl Section for Readme {
    fn kind(&self) -> SectionKind {
        SectionKind::Readme
    }

    fn build(&self, ctx: &DocContext) -> String {
        let installation = Self::installation(ctx);
        let quick_start = Self::quick_start(ctx);
        let errors = Self::error_summary(ctx);

        // Links point only at subsections that made it into the output.
        let mut links = Vec::new();
        if !installation.is_empty() {
            links.push("[Installation](#installation)".to_string());
        }
        if !quick_start.is_empty() {
            links.push("[Quick Start](#quick-start)".to_string());
        }
        if !errors.is_empty() {
            links.push("[Error Handling](#error-handling)".to_string());
        }
        if let Some(url) = &ctx.config().docs_base_url {
            links.push(format!("[Documentation]({})", url));
        }
        if let Some(url) = &ctx.config().repository_url {
            links.push(format!("[Repository]({})", url));
        }
        let links = if links.is_empty() {
            String::new()
        } else {
            format!("## Quick Links\n\n{}", bullets(links))
        };

        join_blocks([
            Self::header(ctx),
            links,
            Self::features(ctx),
            installation,
            quick_start,
            errors,
            Self::license(ctx),
        ])
    }
}

#[cfg(test)]
mod tests {
    use sdkgen_plan::{DesignPlan, ErrorDescriptor, MethodDescriptor, ParamDescriptor, TargetLanguage};

    use super::*;
    use crate::DocsConfig;

    fn plan() -> DesignPlan {
        let mut plan = DesignPlan::new("ChainClient");
        plan.methods = vec![
            MethodDescriptor::new("getBalance")
                .param(ParamDescriptor::new("address", "string"))
                .returns("number"),
            MethodDescriptor::new("getBlock"),
        ];
        plan.errors = vec![ErrorDescriptor::new("rate_limited", "Too many requests")];
        plan
    }

    #[test]
    fn test_quick_links_follow_sections() {
        let ctx = DocContext::new(&plan(), DocsConfig::new("chain-sdk"));
        let readme = Readme.build(&ctx);
        assert!(readme.contains("- [Installation](#installation)"));
        assert!(readme.contains("- [Quick Start](#quick-start)"));
        assert!(readme.contains("- [Error Handling](#error-handling)"));
    }

    #[test]
    fn test_no_install_link_for_unknown_language() {
        let mut config = DocsConfig::new("chain-sdk");
        config.language = TargetLanguage::Other;
        let readme = Readme.build(&DocContext::new(&DesignPlan::new("ChainClient"), config));
        assert!(!readme.contains("Installation"));
        assert!(!readme.contains("Quick Links"));
        assert!(!readme.contains("Quick Start"));
    }

    #[test]
    fn test_docs_only_target_labels_samples() {
        let mut config = DocsConfig::new("chain-sdk");
        config.language = TargetLanguage::Python;
        let readme = Readme.build(&DocContext::new(&plan(), config));
        assert!(!readme.contains("pip install"));
        assert!(!readme.contains("#installation"));
        assert!(readme.contains("> No Python client is generated."));
        assert!(readme.contains("```typescript"));
    }

    #[test]
    fn test_quick_start_uses_first_method() {
        let ctx = DocContext::new(&plan(), DocsConfig::new("chain-sdk"));
        let readme = Readme.build(&ctx);
        assert!(readme.contains("const result = client.getBalance(address);"));
        assert!(!readme.contains("client.getBlock("));
    }

    #[test]
    fn test_features_count_plan_entries() {
        let ctx = DocContext::new(&plan(), DocsConfig::new("chain-sdk"));
        let readme = Readme.build(&ctx);
        assert!(readme.contains("- 2 API methods"));
        assert!(readme.contains("- 1 documented error type"));
        assert!(!readme.contains("typed model"));
    }
}
