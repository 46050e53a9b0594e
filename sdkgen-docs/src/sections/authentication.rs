use sdkgen_plan::AuthMethod;

use super::{Section, SectionKind, bullets, join_blocks};
use crate::{DocContext, snippets};

/// `docs/authentication.md`: a walkthrough of the configured auth mechanism.
pub struct Authentication;

impl Authentication {
    fn no_setup(ctx: &DocContext) -> String {
        let fence = snippets::fence_language(ctx.config().language);
        join_blocks([
            "# Authentication".to_string(),
            snippets::reference_note(ctx).unwrap_or_default(),
            format!(
                "{} does not require authentication. Create a client and start making requests, no setup required.",
                ctx.config().sdk_name
            ),
            snippets::code_block(fence, &snippets::client_setup(ctx)),
        ])
    }

    fn obtaining(method: AuthMethod) -> String {
        let body = match method {
            AuthMethod::ApiKey => {
                "1. Sign in to the provider's dashboard.\n\
                 2. Create a new API key for this project.\n\
                 3. Copy the key; it is shown only once."
            }
            AuthMethod::OAuth => {
                "1. Register an application with the provider to get a client ID.\n\
                 2. Send the user through the authorization flow.\n\
                 3. Exchange the returned code for an access token."
            }
            AuthMethod::Wallet => {
                "1. Create or import a wallet that holds the account you will use.\n\
                 2. Export its private key into a secure secret store.\n\
                 3. Fund the account if the API charges for requests."
            }
            AuthMethod::None => return String::new(),
        };
        let title = match method {
            AuthMethod::ApiKey => "Getting an API key",
            AuthMethod::OAuth => "Getting an access token",
            _ => "Preparing a wallet",
        };
        format!("## {}\n\n{}", title, body)
    }

    fn configuring(ctx: &DocContext) -> String {
        let config = ctx.config();
        let fence = snippets::fence_language(config.language);
        let exports = ctx
            .credential_fields()
            .iter()
            .map(|f| format!("export {}=\"...\"", config.env_var(f.env_suffix)))
            .collect::<Vec<_>>()
            .join("\n");
        let fields = bullets(
            ctx.credential_fields()
                .iter()
                .map(|f| format!("`{}` ({}): {}", f.property, f.ty, f.description)),
        );
        format!(
            "## Configuring the client\n\nStore credentials in the environment:\n\n{}\n\nThen pass them to the client:\n\n{}\n\nAccepted options:\n\n{}",
            snippets::code_block("bash", &exports),
            snippets::code_block(fence, &snippets::client_setup(ctx)),
            fields
        )
    }

    fn lifecycle(ctx: &DocContext, method: AuthMethod) -> String {
        let error = format!("{}Error", ctx.client_name());
        match method {
            AuthMethod::OAuth => format!(
                "## Token expiry\n\nAccess tokens expire. When a request fails with an `{}` whose category is `authentication`, refresh the token through your provider and create a new client with it.",
                error
            ),
            AuthMethod::Wallet => "## Signing\n\nRequests are signed with the configured key before they leave the client. The key itself is never sent over the network.".to_string(),
            _ => format!(
                "## Rotating keys\n\nCreate the replacement key first, deploy it, then revoke the old one. Requests made with a revoked key fail with an `{}` in the `authentication` category.",
                error
            ),
        }
    }

    fn security(method: AuthMethod) -> String {
        let mut items = vec![
            "Never commit credentials to source control.",
            "Load credentials from the environment or a secret manager.",
        ];
        match method {
            AuthMethod::ApiKey => items.push("Use separate keys for development and production."),
            AuthMethod::OAuth => items.push("Request only the scopes your application needs."),
            AuthMethod::Wallet => {
                items.push("Use a dedicated wallet with limited funds for automated clients.")
            }
            AuthMethod::None => {}
        }
        format!("## Security best practices\n\n{}", bullets(items))
    }
}

impl Section for Authentication {
    fn kind(&self) -> SectionKind {
        SectionKind::Authentication
    }

    fn build(&self, ctx: &DocContext) -> String {
        if !ctx.config().requires_auth() {
            return Self::no_setup(ctx);
        }
        let method = ctx.config().auth_method;
        join_blocks([
            "# Authentication".to_string(),
            snippets::reference_note(ctx).unwrap_or_default(),
            format!(
                "{} authenticates requests with {}.",
                ctx.config().sdk_name,
                method.display_name()
            ),
            Self::obtaining(method),
            Self::configuring(ctx),
            Self::lifecycle(ctx, method),
            Self::security(method),
        ])
    }
}

#[cfg(test)]
mod tests {
    use sdkgen_plan::DesignPlan;

    use super::*;
    use crate::DocsConfig;

    fn ctx(required: bool, method: AuthMethod) -> DocContext {
        let mut config = DocsConfig::new("chain-sdk");
        config.auth_required = required;
        config.auth_method = method;
        DocContext::new(&DesignPlan::new("ChainClient"), config)
    }

    #[test]
    fn test_no_auth_variant() {
        let doc = Authentication.build(&ctx(false, AuthMethod::ApiKey));
        assert!(doc.contains("does not require authentication"));
        assert!(doc.contains("const client = new ChainClient();"));
        assert!(!doc.contains("Security best practices"));
    }

    #[test]
    fn test_required_without_mechanism_is_no_setup() {
        let doc = Authentication.build(&ctx(true, AuthMethod::None));
        assert!(doc.contains("no setup required"));
    }

    #[test]
    fn test_oauth_walkthrough() {
        let doc = Authentication.build(&ctx(true, AuthMethod::OAuth));
        assert!(doc.contains("## Getting an access token"));
        assert!(doc.contains("export CHAIN_SDK_ACCESS_TOKEN=\"...\""));
        assert!(doc.contains("## Token expiry"));
    }

    #[test]
    fn test_wallet_walkthrough() {
        let doc = Authentication.build(&ctx(true, AuthMethod::Wallet));
        assert!(doc.contains("privateKey: process.env.CHAIN_SDK_PRIVATE_KEY,"));
        assert!(doc.contains("## Signing"));
    }
}
