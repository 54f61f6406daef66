// codegen/src/generators/attribute_sets.rs

use std::collections::HashMap;
use std::fmt::Write as _;

use crate::utils::{
    accessor_suffix, collection_type_name, is_identifier, singularize_label, snake_to_pascal_case,
    type_ident,
};
use crate::{AttributeModel, CodeGenerator, CodegenError, Result};

/// Page listing which element kinds accept which attributes.
pub const USES_URL: &str = "https://graphviz.org/doc/info/attrs.html#h:uses";

/// Emits one collection type per applicability group, in group order.
#[derive(Debug, Default, Clone, Copy)]
pub struct AttributeSetsGenerator;

impl AttributeSetsGenerator {
    fn render_set(
        &self,
        buf: &mut String,
        label: &str,
        names: &[&str],
        set_type: &str,
    ) -> Result<()> {
        let kind = singularize_label(label);
        let type_name = collection_type_name(label);

        writeln!(buf, "/// {kind} attributes.")?;
        writeln!(buf, "#[derive(Clone, Debug, Default)]")?;
        writeln!(buf, "pub struct {type_name} {{")?;
        writeln!(buf, "    attributes: {set_type}<Attribute>,")?;
        writeln!(buf, "}}")?;
        writeln!(buf)?;

        writeln!(buf, "impl {type_name} {{")?;
        writeln!(
            buf,
            "    /// Set attribute from `key` and `value` raw parts. Returns whether the attribute was newly set."
        )?;
        writeln!(buf, "    ///")?;
        writeln!(buf, "    /// # Panics")?;
        writeln!(buf, "    ///")?;
        writeln!(
            buf,
            "    /// Key is not valid for this attributes set. <a href=\"{USES_URL}\" target=\"_blank\">Read more</a>."
        )?;
        writeln!(buf, "    ///")?;
        writeln!(buf, "    pub fn insert_raw_parts(&mut self, key: &str, value: &str) -> bool {{")?;
        writeln!(buf, "        let value = quote(value);")?;
        writeln!(buf, "        let item = match key {{")?;
        for name in names {
            writeln!(buf, "            \"{name}\" => Attribute::{}(value),", snake_to_pascal_case(name))?;
        }
        writeln!(buf, "            _ => panic!(\"Invalid attribute key `{{key}}` for {type_name}\"),")?;
        writeln!(buf, "        }};")?;
        writeln!(buf)?;
        writeln!(buf, "        self.attributes.replace(item).is_none()")?;
        writeln!(buf, "    }}")?;
        writeln!(buf)?;

        writeln!(buf, "    /// Get attributes length.")?;
        writeln!(buf, "    #[inline]")?;
        writeln!(buf, "    pub fn len(&self) -> usize {{")?;
        writeln!(buf, "        self.attributes.len()")?;
        writeln!(buf, "    }}")?;
        writeln!(buf)?;
        writeln!(buf, "    /// Check if attributes is empty.")?;
        writeln!(buf, "    #[inline]")?;
        writeln!(buf, "    pub fn is_empty(&self) -> bool {{")?;
        writeln!(buf, "        self.attributes.is_empty()")?;
        writeln!(buf, "    }}")?;
        writeln!(buf)?;
        writeln!(buf, "    /// Iterate over attributes in insertion order.")?;
        writeln!(buf, "    #[inline]")?;
        writeln!(buf, "    pub fn iter(&self) -> indexmap::set::Iter<'_, Attribute> {{")?;
        writeln!(buf, "        self.attributes.iter()")?;
        writeln!(buf, "    }}")?;

        for name in names {
            let variant = snake_to_pascal_case(name);
            let suffix = accessor_suffix(name);

            writeln!(buf)?;
            writeln!(
                buf,
                "    /// Set [`Attribute::{variant}`] attribute. Returns whether the attribute was newly set."
            )?;
            writeln!(buf, "    #[inline]")?;
            writeln!(buf, "    pub fn set_{suffix}(&mut self, s: &str) -> bool {{")?;
            writeln!(buf, "        // Initialize new item for insertion or replacement.")?;
            writeln!(buf, "        let item = Attribute::{variant}(quote(s));")?;
            writeln!(buf)?;
            writeln!(buf, "        self.attributes.replace(item).is_none()")?;
            writeln!(buf, "    }}")?;
            writeln!(buf)?;
            writeln!(
                buf,
                "    /// Unset [`Attribute::{variant}`] attribute. Returns whether the attribute was set."
            )?;
            writeln!(buf, "    #[inline]")?;
            writeln!(buf, "    pub fn unset_{suffix}(&mut self) -> bool {{")?;
            writeln!(buf, "        // Allocate item placeholder for removal.")?;
            writeln!(buf, "        let item = Attribute::{variant}(String::new());")?;
            writeln!(buf)?;
            writeln!(buf, "        self.attributes.shift_remove(&item)")?;
            writeln!(buf, "    }}")?;
        }
        writeln!(buf, "}}")?;
        writeln!(buf)?;

        writeln!(buf, "impl IntoIterator for {type_name} {{")?;
        writeln!(buf, "    type Item = Attribute;")?;
        writeln!(buf)?;
        writeln!(buf, "    type IntoIter = indexmap::set::IntoIter<Attribute>;")?;
        writeln!(buf)?;
        writeln!(buf, "    #[inline]")?;
        writeln!(buf, "    fn into_iter(self) -> Self::IntoIter {{")?;
        writeln!(buf, "        self.attributes.into_iter()")?;
        writeln!(buf, "    }}")?;
        writeln!(buf, "}}")?;

        Ok(())
    }
}

impl CodeGenerator for AttributeSetsGenerator {
    fn generate(&self, model: &AttributeModel<'_>) -> Result<String> {
        let set_type = type_ident(&model.options.set_type);
        let mut sections = Vec::with_capacity(model.groups.len());

        for (label, names) in model.groups.iter() {
            let names: Vec<&str> = names.iter().map(String::as_str).collect();
            let mut buf = String::new();
            self.render_set(&mut buf, label, &names, set_type)?;
            sections.push(buf);
        }

        Ok(sections.join("\n"))
    }

    fn validate(&self, model: &AttributeModel<'_>) -> Result<()> {
        let mut type_names: HashMap<String, &str> = HashMap::new();

        for (label, names) in model.groups.iter() {
            let type_name = collection_type_name(label);
            if !is_identifier(&type_name) {
                return Err(CodegenError::InvalidIdentifier {
                    name: label.to_string(),
                    reason: format!("collection type name `{type_name}` is not an identifier"),
                });
            }
            if let Some(first) = type_names.insert(type_name.clone(), label) {
                return Err(CodegenError::IdentifierCollision {
                    identifier: type_name,
                    first: first.to_string(),
                    second: label.to_string(),
                });
            }

            let mut accessors: HashMap<String, &str> = HashMap::new();
            for name in names {
                let suffix = accessor_suffix(name);
                if let Some(first) = accessors.insert(suffix.clone(), name) {
                    return Err(CodegenError::IdentifierCollision {
                        identifier: format!("{type_name}::set_{suffix}"),
                        first: first.to_string(),
                        second: name.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}
