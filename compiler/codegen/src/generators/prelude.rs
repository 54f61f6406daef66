// codegen/src/generators/prelude.rs

use std::fmt::Write as _;

use crate::{AttributeModel, CodeGenerator, Result};

/// Body of the `quote` helper emitted into every module.
///
/// Mirrors [`crate::utils::quote`].
const QUOTE_FN: &str = r#"/// Quote string if necessary.
fn quote(s: &str) -> String {
    // Check if quoted and needs quoting.
    if !(s.starts_with('"') && s.ends_with('"')) && s.contains(' ') {
        // Add quoting to given string.
        return format!("\"{s}\"");
    }

    s.into()
}
"#;

/// Emits the `use` block and the `quote` helper.
#[derive(Debug, Default, Clone, Copy)]
pub struct PreludeGenerator;

impl CodeGenerator for PreludeGenerator {
    fn generate(&self, model: &AttributeModel<'_>) -> Result<String> {
        let mut buf = String::new();

        writeln!(buf, "use std::hash::{{Hash, Hasher}};")?;
        writeln!(buf)?;
        // A bare type name is assumed to be in scope already
        if model.options.set_type.contains("::") {
            writeln!(buf, "use {};", model.options.set_type)?;
            writeln!(buf)?;
        }
        buf.push_str(QUOTE_FN);

        Ok(buf)
    }
}
