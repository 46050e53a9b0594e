//! Documentation generated from full plan files.

use std::str::FromStr;

use sdkgen_docs::{DocContext, DocsGenerator, SectionKind};
use sdkgen_plan::PlanFile;

fn render(plan_toml: &str) -> sdkgen_docs::Documentation {
    let plan = PlanFile::from_str(plan_toml).expect("Failed to parse plan");
    DocsGenerator::new().generate(&DocContext::from_plan_file(&plan))
}

const PLAN: &str = r#"
    [sdk]
    name = "chain-sdk"
    version = "1.0.0"
    description = "Read balances from the chain"
    client = "ChainClient"
    docs_url = "https://docs.example.com/chain"
    license = "MIT"

    [config]
    auth_required = true
    auth_method = "wallet"

    [docs]
    prerequisites = ["A funded test wallet"]

    [[methods]]
    name = "getBalance"
    returns = "number"

    [[methods.params]]
    name = "address"
    type = "string"

    [[errors]]
    code = "validation_failed"
    description = "A parameter was rejected"

    [[errors]]
    code = "auth_expired"
    description = "The signature expired"

    [[examples]]
    title = "Read a balance"
    difficulty = "beginner"
    code = "console.log(client.getBalance(\"0xabc\"));"

    [[examples]]
    title = "Watch blocks"
    difficulty = "advanced"
    code = "// subscribe"
"#;

#[test]
fn test_readme_links_every_section() {
    let docs = render(PLAN);
    let readme = docs.get(SectionKind::Readme).expect("README missing");

    insta::assert_snapshot!(readme.lines().take(12).collect::<Vec<_>>().join("\n"), @r"
    # chain-sdk

    Read balances from the chain

    ## Quick Links

    - [Installation](#installation)
    - [Quick Start](#quick-start)
    - [Error Handling](#error-handling)
    - [Documentation](https://docs.example.com/chain)

    ## Features
    ");
    assert!(readme.contains("Released under the MIT license."));
}

#[test]
fn test_quickstart_uses_wallet_credentials() {
    let docs = render(PLAN);
    let quickstart = docs.get(SectionKind::Quickstart).expect("quickstart missing");

    assert!(quickstart.contains("- A funded test wallet"));
    assert!(quickstart.contains("export CHAIN_SDK_PRIVATE_KEY=\"your-private-key\""));
    assert!(quickstart.contains("const result = client.getBalance(address);"));
}

#[test]
fn test_error_taxonomy_placement() {
    let docs = render(PLAN);
    let guide = docs.get(SectionKind::ErrorHandling).expect("guide missing");

    let auth = guide.find("## Authentication & Authorization").expect("auth heading");
    let validation = guide.find("## Validation Errors").expect("validation heading");
    let auth_expired = guide.find("`auth_expired`").expect("auth_expired");
    let validation_failed = guide.find("`validation_failed`").expect("validation_failed");

    assert!(auth < auth_expired && auth_expired < validation);
    assert!(validation < validation_failed);
}

#[test]
fn test_examples_omit_empty_tiers() {
    let docs = render(PLAN);
    let examples = docs.get(SectionKind::Examples).expect("examples missing");

    assert!(examples.contains("## Beginner"));
    assert!(examples.contains("## Advanced"));
    assert!(!examples.contains("## Intermediate"));
}

#[test]
fn test_minimal_plan_fallbacks() {
    let docs = render(
        r#"
        [sdk]
        name = "tiny"
        "#,
    );

    assert!(docs.get(SectionKind::Examples).is_none());
    assert!(docs.get(SectionKind::ApiReference).is_none());

    let readme = docs.get(SectionKind::Readme).expect("README missing");
    assert!(readme.contains("- [Installation](#installation)"));
    assert!(!readme.contains("#quick-start"));
    assert!(!readme.contains("#error-handling"));
    assert!(readme.contains("Version 0.1.0 is a pre-release"));

    let auth = docs.get(SectionKind::Authentication).expect("auth missing");
    assert!(auth.contains("no setup required"));

    let guide = docs.get(SectionKind::ErrorHandling).expect("guide missing");
    assert!(guide.contains("## Error Categories"));
    assert!(guide.contains("## Best Practices"));
}
