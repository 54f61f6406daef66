use std::fmt;

use catalog::{AttributeCatalog, USED_BY_DELIMITER};

/// One suspicious entry in the scraped `Used By` data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaFinding {
    /// The attribute applies to no element kind at all.
    NoApplicability {
        /// Attribute name.
        attribute: String,
    },
    /// A label still contains a comma after splitting on the delimiter.
    UnsplitLabel {
        /// Attribute name.
        attribute: String,
        /// The offending label, verbatim.
        label: String,
    },
    /// A label has leading or trailing whitespace.
    PaddedLabel {
        /// Attribute name.
        attribute: String,
        /// The offending label, verbatim.
        label: String,
    },
}

impl fmt::Display for SchemaFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaFinding::NoApplicability { attribute } => {
                write!(f, "`{attribute}` is not used by any element kind")
            }
            SchemaFinding::UnsplitLabel { attribute, label } => write!(
                f,
                "`{attribute}` has label {label:?} that does not split on {USED_BY_DELIMITER:?}"
            ),
            SchemaFinding::PaddedLabel { attribute, label } => {
                write!(f, "`{attribute}` has label {label:?} with surrounding whitespace")
            }
        }
    }
}

/// Check the applicability labels of every attribute.
///
/// The generator does not repair any of these; callers decide whether a
/// finding is a warning or fatal.
pub fn check_schema(catalog: &AttributeCatalog) -> Vec<SchemaFinding> {
    let mut findings = Vec::new();

    for record in catalog {
        if record.used_by.is_empty() {
            findings.push(SchemaFinding::NoApplicability { attribute: record.name.clone() });
        }
        for label in &record.used_by {
            if label.contains(',') {
                findings.push(SchemaFinding::UnsplitLabel {
                    attribute: record.name.clone(),
                    label: label.clone(),
                });
            } else if label.trim() != label {
                findings.push(SchemaFinding::PaddedLabel {
                    attribute: record.name.clone(),
                    label: label.clone(),
                });
            }
        }
    }

    findings
}

/// Log each finding at `warn`, or fail with all of them when `strict`.
pub fn enforce(findings: Vec<SchemaFinding>, strict: bool) -> crate::Result<()> {
    if findings.is_empty() {
        return Ok(());
    }
    if strict {
        return Err(crate::SchemaError::SchemaAssumptionViolation(findings));
    }
    for finding in &findings {
        tracing::warn!("{}", finding);
    }
    Ok(())
}
