//! SQL identifier handling.
//!
//! Identifiers cannot be bound as parameters, so anything spliced into
//! statement text goes through [`quote_ident`]. Callers resolve names against
//! the catalog with [`resolve`] first; quoting alone only keeps the text
//! well-formed.

/// Wrap an identifier in double quotes, doubling embedded quotes.
pub fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// Fold an identifier the way Postgres stores unquoted names.
///
/// Only ASCII letters are downcased, matching the server under UTF-8.
pub fn fold_case(ident: &str) -> String {
    ident.to_ascii_lowercase()
}

/// Find `requested` among catalog names.
///
/// An exact match wins; otherwise the case-folded spelling is tried. The
/// returned reference is the catalog's own spelling.
pub fn resolve<'a, S: AsRef<str>>(requested: &str, catalog: &'a [S]) -> Option<&'a str> {
    if let Some(hit) = catalog.iter().find(|name| name.as_ref() == requested) {
        return Some(hit.as_ref());
    }
    let folded = fold_case(requested);
    catalog
        .iter()
        .find(|name| name.as_ref() == folded)
        .map(|name| name.as_ref())
}
