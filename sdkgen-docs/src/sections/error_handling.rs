use sdkgen_plan::{ErrorCategory, ErrorDescriptor};

use super::{Section, SectionKind, bullets, join_blocks};
use crate::{DocContext, snippets};

/// `docs/error-handling.md`: the error taxonomy plus retry guidance.
pub struct ErrorHandling;

fn generic_description(category: ErrorCategory) -> &'static str {
    match category {
        ErrorCategory::Authentication => {
            "Missing, invalid or expired credentials, or an account without permission for the operation."
        }
        ErrorCategory::Validation => "The request was rejected because a parameter is missing or malformed.",
        ErrorCategory::Network => "The request never reached the API or the connection dropped before a response.",
        ErrorCategory::RateLimit => "Too many requests were sent in a short period.",
        ErrorCategory::Server => "The API failed while handling a valid request.",
        ErrorCategory::Other => "Anything that does not fit the categories above.",
    }
}

impl ErrorHandling {
    fn entry(error: &ErrorDescriptor, fence: &str) -> String {
        let mut out = format!("### `{}`", error.code);
        if !error.description.is_empty() {
            out.push_str("\n\n");
            out.push_str(&error.description);
        }
        let mut facts = Vec::new();
        if !error.cause.is_empty() {
            facts.push(format!("**Cause:** {}", error.cause));
        }
        if !error.remedy.is_empty() {
            facts.push(format!("**Remedy:** {}", error.remedy));
        }
        if !facts.is_empty() {
            out.push_str("\n\n");
            out.push_str(&bullets(facts));
        }
        if let Some(example) = &error.example {
            out.push_str("\n\n");
            out.push_str(&snippets::code_block(fence, example));
        }
        out
    }

    fn taxonomy(ctx: &DocContext) -> Vec<String> {
        let fence = snippets::fence_language(ctx.config().language);
        let mut blocks = Vec::new();
        if ctx.errors().is_empty() {
            blocks.push("## Error Categories".to_string());
            for category in ErrorCategory::ALL {
                blocks.push(format!(
                    "### {}\n\nCategory `{}`. {}",
                    category.heading(),
                    category,
                    generic_description(category)
                ));
            }
            return blocks;
        }
        for category in ErrorCategory::ALL {
            let errors: Vec<_> = ctx
                .errors()
                .values()
                .filter(|e| e.resolved_category() == category)
                .collect();
            if errors.is_empty() {
                continue;
            }
            blocks.push(format!("## {}", category.heading()));
            blocks.extend(errors.into_iter().map(|e| Self::entry(e, fence)));
        }
        blocks
    }

    fn retry(ctx: &DocContext) -> String {
        let error = format!("{}Error", ctx.client_name());
        let code = format!(
            "async function withRetry<T>(fn: () => Promise<T>, retries = 3): Promise<T> {{\n\
             \x20 for (let attempt = 0; ; attempt++) {{\n\
             \x20   try {{\n\
             \x20     return await fn();\n\
             \x20   }} catch (error) {{\n\
             \x20     if (!(error instanceof {error}) || !error.isRetryable() || attempt >= retries) {{\n\
             \x20       throw error;\n\
             \x20     }}\n\
             \x20     await new Promise((resolve) => setTimeout(resolve, 2 ** attempt * 1000));\n\
             \x20   }}\n\
             \x20 }}\n\
             }}"
        );
        format!(
            "## Retrying Failed Requests\n\nNetwork, rate limiting and server errors are transient; `isRetryable()` reports them. Retry those with exponential backoff and surface everything else immediately.\n\n{}",
            snippets::code_block(snippets::fence_language(ctx.config().language), &code)
        )
    }

    fn best_practices(ctx: &DocContext) -> String {
        let items = [
            format!("[ ] Catch `{}Error` at the boundary of your application", ctx.client_name()),
            "[ ] Branch on `category` rather than parsing messages".to_string(),
            "[ ] Retry only errors where `isRetryable()` is true".to_string(),
            "[ ] Cap retries and back off exponentially".to_string(),
            "[ ] Log the error `code` with enough context to reproduce the call".to_string(),
            "[ ] Never log credentials".to_string(),
        ];
        format!("## Best Practices\n\n{}", bullets(items))
    }
}

impl Section for ErrorHandling {
    fn kind(&self) -> SectionKind {
        SectionKind::ErrorHandling
    }

    fn build(&self, ctx: &DocContext) -> String {
        let intro = format!(
            "# Error Handling\n\nEvery error thrown by {} extends `{}Error`, which carries a machine-readable `code` and a `category`.",
            ctx.config().sdk_name,
            ctx.client_name()
        );
        let mut blocks = vec![intro];
        blocks.extend(snippets::reference_note(ctx));
        blocks.extend(Self::taxonomy(ctx));
        blocks.push(Self::retry(ctx));
        blocks.push(Self::best_practices(ctx));
        join_blocks(blocks)
    }
}

#[cfg(test)]
mod tests {
    use sdkgen_plan::DesignPlan;

    use super::*;
    use crate::DocsConfig;

    fn ctx(errors: Vec<ErrorDescriptor>) -> DocContext {
        let mut plan = DesignPlan::new("ChainClient");
        plan.errors = errors;
        DocContext::new(&plan, DocsConfig::new("chain-sdk"))
    }

    #[test]
    fn test_groups_by_category() {
        let doc = ErrorHandling.build(&ctx(vec![
            ErrorDescriptor::new("validation_failed", "Bad input"),
            ErrorDescriptor::new("auth_expired", "Token expired").remedy("Refresh the token"),
        ]));
        let auth = doc.find("## Authentication & Authorization").unwrap();
        let validation = doc.find("## Validation Errors").unwrap();
        let auth_code = doc.find("### `auth_expired`").unwrap();
        let validation_code = doc.find("### `validation_failed`").unwrap();

        assert!(auth < auth_code && auth_code < validation);
        assert!(validation < validation_code);
        assert!(doc.contains("- **Remedy:** Refresh the token"));
        assert!(!doc.contains("## Network Errors"));
    }

    #[test]
    fn test_generic_taxonomy_without_errors() {
        let doc = ErrorHandling.build(&ctx(vec![]));
        assert!(doc.contains("## Error Categories"));
        for category in ErrorCategory::ALL {
            assert!(doc.contains(category.heading()));
        }
    }

    #[test]
    fn test_always_has_retry_and_checklist() {
        for errors in [vec![], vec![ErrorDescriptor::new("server_error", "Boom")]] {
            let doc = ErrorHandling.build(&ctx(errors));
            assert!(doc.contains("## Retrying Failed Requests"));
            assert!(doc.contains("error instanceof ChainClientError"));
            assert!(doc.contains("## Best Practices"));
        }
    }
}
