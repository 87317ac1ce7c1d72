//! Prompt rendering
//!
//! Rendering is a read-only projection of prompt state: [`render`] takes a
//! [`PromptView`] and returns styled text, and never mutates anything.

mod prompt_render;
mod style;
mod wrap;

pub use prompt_render::{PromptView, plain, render};
pub use style::{ValueStyle, figures};
pub use wrap::wrap;
