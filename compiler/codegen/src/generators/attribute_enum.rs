// codegen/src/generators/attribute_enum.rs

use std::fmt::Write as _;

use catalog::{AttributeCatalog, AttributeRecord};

use super::doc_comment::variant_doc;
use crate::utils::{is_reserved_type_name, snake_to_pascal_case};
use crate::{AttributeModel, CodeGenerator, CodegenError, Result};

/// Catalog entries paired with their variant names, sorted by variant name
/// and then by original attribute name.
pub fn sorted_variants(catalog: &AttributeCatalog) -> Vec<(String, &AttributeRecord)> {
    let mut variants: Vec<_> =
        catalog.iter().map(|record| (snake_to_pascal_case(&record.name), record)).collect();
    variants.sort_by(|(a, ra), (b, rb)| a.cmp(b).then_with(|| ra.name.cmp(&rb.name)));
    variants
}

/// Check that every attribute name yields a usable, unique variant name.
pub fn check_variant_names(catalog: &AttributeCatalog) -> Result<()> {
    for record in catalog {
        let name = &record.name;
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(CodegenError::InvalidIdentifier {
                name: name.clone(),
                reason: "only ASCII letters, digits and `_` are supported".into(),
            });
        }
        let variant = snake_to_pascal_case(name);
        if !variant.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return Err(CodegenError::InvalidIdentifier {
                name: name.clone(),
                reason: format!("variant name `{variant}` does not start with a letter"),
            });
        }
        if is_reserved_type_name(&variant) {
            return Err(CodegenError::InvalidIdentifier {
                name: name.clone(),
                reason: format!("variant name `{variant}` is reserved"),
            });
        }
    }

    let variants = sorted_variants(catalog);
    for pair in variants.windows(2) {
        let ((prev, first), (next, second)) = (&pair[0], &pair[1]);
        if prev == next {
            return Err(CodegenError::IdentifierCollision {
                identifier: next.clone(),
                first: first.name.clone(),
                second: second.name.clone(),
            });
        }
    }

    Ok(())
}

/// Emits `Attribute`, its identity-only `PartialEq`/`Eq`/`Hash` and the
/// `From<Attribute> for (String, String)` projection.
#[derive(Debug, Default, Clone, Copy)]
pub struct AttributeEnumGenerator;

impl CodeGenerator for AttributeEnumGenerator {
    fn generate(&self, model: &AttributeModel<'_>) -> Result<String> {
        let variants = sorted_variants(model.catalog);
        let mut buf = String::new();

        writeln!(buf, "/// Attribute enumerator.")?;
        writeln!(buf, "#[derive(Clone, Debug)]")?;
        writeln!(buf, "pub enum Attribute {{")?;
        for (variant, record) in &variants {
            let doc = variant_doc(&record.description, &model.options.docs_base_url, &record.name);
            writeln!(buf, "    /// {doc}")?;
            writeln!(buf, "    {variant}(String),")?;
        }
        writeln!(buf, "}}")?;
        writeln!(buf)?;

        buf.push_str(IDENTITY_IMPLS);
        writeln!(buf)?;

        writeln!(buf, "impl From<Attribute> for (String, String) {{")?;
        writeln!(buf, "    fn from(attribute: Attribute) -> Self {{")?;
        writeln!(buf, "        let (key, value) = match attribute {{")?;
        for (variant, record) in &variants {
            writeln!(buf, "            Attribute::{variant}(x) => (\"{}\", x),", record.name)?;
        }
        writeln!(buf, "        }};")?;
        writeln!(buf)?;
        writeln!(buf, "        (key.into(), value)")?;
        writeln!(buf, "    }}")?;
        writeln!(buf, "}}")?;

        Ok(buf)
    }

    fn validate(&self, model: &AttributeModel<'_>) -> Result<()> {
        if model.catalog.is_empty() {
            return Err(CodegenError::EmptyCatalog);
        }
        check_variant_names(model.catalog)
    }
}

const IDENTITY_IMPLS: &str = "impl PartialEq for Attribute {
    fn eq(&self, other: &Self) -> bool {
        // Compare attributes based on their discriminant.
        std::mem::discriminant(self).eq(&std::mem::discriminant(other))
    }
}

impl Eq for Attribute {}

impl Hash for Attribute {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Hash attributes based on their discriminant.
        std::mem::discriminant(self).hash(state);
    }
}
";

#[cfg(test)]
mod tests {
    use catalog::{ApplicabilityGroups, RawAttributeRow};

    use super::*;
    use crate::EmitOptions;

    fn catalog(names: &[&str]) -> AttributeCatalog {
        AttributeCatalog::from_rows(names.iter().map(|n| RawAttributeRow::new(*n, "", "Graphs")))
    }

    fn render(catalog: &AttributeCatalog) -> Result<String> {
        let groups = ApplicabilityGroups::new();
        let options = EmitOptions::default();
        let model = AttributeModel { catalog, groups: &groups, options: &options };
        AttributeEnumGenerator.validate(&model)?;
        AttributeEnumGenerator.generate(&model)
    }

    #[test]
    fn test_variants_are_sorted() {
        let catalog = catalog(&["label_loc", "URL", "_background", "area"]);
        let order: Vec<_> = sorted_variants(&catalog).into_iter().map(|(v, _)| v).collect();
        assert_eq!(order, vec!["Area", "Background", "LabelLoc", "Url"]);
    }

    #[test]
    fn test_enum_and_projection() {
        let out = render(&catalog(&["label_loc", "area"])).expect("render");

        let area = out.find("    Area(String),").expect("Area variant");
        let label_loc = out.find("    LabelLoc(String),").expect("LabelLoc variant");
        assert!(area < label_loc);

        assert!(out.contains("Attribute::Area(x) => (\"area\", x),"));
        assert!(out.contains("Attribute::LabelLoc(x) => (\"label_loc\", x),"));
        assert!(out.contains("std::mem::discriminant(self).hash(state);"));
        assert!(out.contains("/// <a href=\"https://graphviz.org/docs/attrs/label_loc/\""));
    }

    #[test]
    fn test_collision_is_rejected() {
        match render(&catalog(&["edgeURL", "edgeurl"])) {
            Err(CodegenError::IdentifierCollision { identifier, first, second }) => {
                assert_eq!(identifier, "Edgeurl");
                assert_eq!(first, "edgeURL");
                assert_eq!(second, "edgeurl");
            }
            other => panic!("expected collision, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_names_are_rejected() {
        for name in ["edge url", "2d", "self", "__"] {
            assert!(
                matches!(render(&catalog(&[name])), Err(CodegenError::InvalidIdentifier { .. })),
                "{name}"
            );
        }
        assert!(matches!(render(&AttributeCatalog::new()), Err(CodegenError::EmptyCatalog)));
    }
}
