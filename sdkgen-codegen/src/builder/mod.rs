//! Text building blocks shared by emitters.
//!
//! - [`LineBuilder`] - indented line accumulator with scoped blocks
//! - [`Indent`] - indentation unit

mod indent;
mod line_builder;

pub use indent::Indent;
pub use line_builder::LineBuilder;
