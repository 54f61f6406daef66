// codegen/src/generators/doc_comment.rs

use crate::utils::docs_slug;

/// Sanitize a description for use on a single Rust doc-comment line
///
/// Line breaks and runs of whitespace collapse into single spaces, so text
/// read back from a JSON catalog cannot escape the `///` prefix.
pub fn sanitize_doc_line(line: &str) -> String { line.split_whitespace().collect::<Vec<_>>().join(" ") }

/// HTML link to the documentation page of attribute `name`.
pub fn read_more_link(docs_base_url: &str, name: &str) -> String {
    format!("<a href=\"{}{}/\" target=\"_blank\">Read more</a>", docs_base_url, docs_slug(name))
}

/// Doc text for the enum variant of attribute `name`, without the `///` prefix.
pub fn variant_doc(description: &str, docs_base_url: &str, name: &str) -> String {
    let description = sanitize_doc_line(description);
    let link = read_more_link(docs_base_url, name);
    if description.is_empty() {
        format!("{link}.")
    } else {
        format!("{description} {link}.")
    }
}
