// codegen/src/utils.rs

/// Suffix appended to every generated collection type name.
pub const COLLECTION_SUFFIX: &str = "Attributes";

/// Title-case one word: the first letter of every run of letters is
/// uppercased, the remaining letters lowercased.
///
/// Non-letters are kept and start a new run, so `edgeURL` becomes `Edgeurl`
/// and `x2y` becomes `X2Y`.
fn title_case(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut in_run = false;

    for c in word.chars() {
        if c.is_alphabetic() {
            if in_run {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }

    out
}

/// Convert snake_case to PascalCase
///
/// Splits on `_`, title-cases every segment and concatenates them. Empty
/// segments (leading, trailing or doubled underscores) vanish.
///
/// # Examples
/// ```
/// use codegen::utils::snake_to_pascal_case;
/// assert_eq!(snake_to_pascal_case("label_loc"), "LabelLoc");
/// assert_eq!(snake_to_pascal_case("_background"), "Background");
/// assert_eq!(snake_to_pascal_case("edgeURL"), "Edgeurl");
/// ```
pub fn snake_to_pascal_case(s: &str) -> String { s.split('_').map(title_case).collect() }

/// Name fragment used for `set_*` / `unset_*` accessors of an attribute.
///
/// One leading underscore is dropped and the rest lowercased:
/// `_background` → `background`, `head_lp` → `head_lp`, `edgeURL` → `edgeurl`.
pub fn accessor_suffix(name: &str) -> String {
    name.strip_prefix('_').unwrap_or(name).to_lowercase()
}

/// Path segment of an attribute's documentation page (one leading `_` dropped).
pub fn docs_slug(name: &str) -> &str { name.strip_prefix('_').unwrap_or(name) }

/// Singular display name of an element-kind label (`Graphs` → `Graph`).
pub fn singularize_label(label: &str) -> &str { label.strip_suffix('s').unwrap_or(label) }

/// Collection type name for an element-kind label (`Vertexs` → `VertexAttributes`).
pub fn collection_type_name(label: &str) -> String {
    format!("{}{}", snake_to_pascal_case(singularize_label(label)), COLLECTION_SUFFIX)
}

/// Last path segment of a type path (`indexmap::IndexSet` → `IndexSet`).
pub fn type_ident(path: &str) -> &str { path.rsplit("::").next().unwrap_or(path) }

/// Quote string if necessary.
///
/// Wraps `s` in double quotes when it contains a space and is not already
/// enclosed in quotes. Embedded quotes are not escaped and other whitespace
/// does not trigger quoting. The generated modules carry a copy of this
/// function; both must stay in sync.
pub fn quote(s: &str) -> String {
    if !(s.starts_with('"') && s.ends_with('"')) && s.contains(' ') {
        return format!("\"{s}\"");
    }

    s.into()
}

/// Whether `ident` can be used as a Rust identifier fragment.
pub fn is_identifier(ident: &str) -> bool {
    let mut chars = ident.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Whether `ident` is a keyword that cannot name a type or variant.
pub fn is_reserved_type_name(ident: &str) -> bool { matches!(ident, "Self" | "_") }
