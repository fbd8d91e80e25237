//! Pure rendering helpers for minuet pages.
//!
//! Two independent, infallible string transforms:
//!
//! - [`render_template`]: `{{key}}` / `{{{key}}}` interpolation with an
//!   HTML-escape policy and a raw bypass.
//! - [`markdown_to_html`]: a line-oriented renderer for a small Markdown
//!   subset.
//!
//! Ill-formed input never fails; both functions produce best-effort
//! literal output.

mod markdown;
mod template;

pub use markdown::markdown_to_html;
pub use template::render_template;
