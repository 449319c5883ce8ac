//! One-line function headers.

use crate::analysis::declaration::Declaration;

/// Rebuild `def name(a, b):` from a declaration. Defaults, annotations,
/// `*args`/`**kwargs` and keyword-only parameters are not reproduced.
pub fn format_signature(declaration: &Declaration) -> String {
    render_signature(declaration.name(), &declaration.parameters())
}

pub fn render_signature(name: &str, parameters: &[&str]) -> String {
    format!("def {}({}):", name, parameters.join(", "))
}
