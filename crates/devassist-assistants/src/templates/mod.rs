//! Project templates
//!
//! Templates are embedded in the binary and can be overridden file by file
//! from a configured template directory. Rendering uses Tera
//! (`{{ name }}` syntax).

mod loader;
mod renderer;

pub use loader::TemplateStore;
pub use renderer::{TemplateRenderer, TemplateVars};

/// Flask application module, copied verbatim
pub const FLASK_APP: &str = "python/flask";

/// Library packaging manifest, rendered with `name`
pub const LIBRARY_SETUP_PY: &str = "python/lib/setup.py";
