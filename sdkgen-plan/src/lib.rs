//! Design plan model for the sdkgen SDK generator.
//!
//! A *design plan* is the language-neutral description of an SDK surface:
//! client name, methods, named types, errors and configuration facts. It is
//! produced upstream (by whatever analysed the API) and consumed by both the
//! code generators and the documentation generator.
//!
//! ```text
//! sdkgen.toml / plan.json → sdkgen-plan (parse + validate) → codegen, docs
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod category;
mod config;
mod error;
mod manifest;
mod plan;
mod validate;

pub use category::ErrorCategory;
pub use config::{AuthMethod, CredentialField, Level, PlanConfig, TargetLanguage};
pub use error::{Error, Result, SourceContext};
pub use manifest::{
    DocsSettings, ExampleEntry, FormatSettings, IndentStyle, PLAN_FILE_NAME, PlanFile, SdkMeta,
};
pub use plan::{
    DesignPlan, ErrorDescriptor, FieldDescriptor, MethodDescriptor, ParamDescriptor,
    SignatureParam, TypeDescriptor,
};
