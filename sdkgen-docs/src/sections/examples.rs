use sdkgen_plan::Level;

use super::{Section, SectionKind, join_blocks};
use crate::{DocContext, snippets};

/// `docs/examples.md`: contributed examples grouped by difficulty, starting
/// from the tier matching the configured audience.
pub struct Examples;

impl Section for Examples {
    fn kind(&self) -> SectionKind {
        SectionKind::Examples
    }

    fn build(&self, ctx: &DocContext) -> String {
        if ctx.examples().is_empty() {
            return String::new();
        }
        let fence = snippets::fence_language(ctx.config().language);
        let mut blocks = vec!["# Examples".to_string()];

        // Point readers at the tier written for the docs' audience.
        let audience = ctx.config().audience;
        if ctx.examples().iter().any(|e| e.difficulty == audience) {
            blocks.push(format!(
                "Start with the [{}](#{}) examples.",
                audience.title(),
                audience.title().to_lowercase()
            ));
        }
        for level in Level::ALL {
            let entries: Vec<_> = ctx
                .examples()
                .iter()
                .filter(|e| e.difficulty == level)
                .collect();
            if entries.is_empty() {
                continue;
            }
            blocks.push(format!("## {}", level.title()));
            for entry in entries {
                let mut block = format!("### {}", entry.title);
                if let Some(description) = &entry.description {
                    block.push_str("\n\n");
                    block.push_str(description);
                }
                block.push_str("\n\n");
                block.push_str(&snippets::code_block(fence, &entry.code));
                blocks.push(block);
            }
        }
        join_blocks(blocks)
    }
}
