use std::collections::HashSet;

use proc_macro2::Span;
use syn::{Error, LitStr, Result};

pub(crate) fn is_valid_sql_ident(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_') {
        return false;
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// A column name from `#[column(name = "...")]`.
pub(crate) fn parse_column_name(lit: &LitStr) -> Result<String> {
    check_ident(lit.value().trim(), lit.span(), "column name")
}

/// A table name from `#[table(name = "...")]`, optionally schema-qualified.
pub(crate) fn parse_table_name(lit: &LitStr) -> Result<String> {
    let raw = lit.value();
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(Error::new(lit.span(), "table name must not be empty"));
    }
    let parts: Vec<&str> = raw.split('.').collect();
    if parts.len() > 2 {
        return Err(Error::new(
            lit.span(),
            "table name must be `table` or `schema.table`",
        ));
    }
    for part in &parts {
        check_ident(part, lit.span(), "table name")?;
    }
    Ok(raw.to_string())
}

/// A name derived from a Rust identifier (raw identifiers like `r#type` are rejected).
pub(crate) fn check_ident(s: &str, span: Span, what: &str) -> Result<String> {
    if s.is_empty() {
        return Err(Error::new(span, format!("{what} must not be empty")));
    }
    if !is_valid_sql_ident(s) {
        return Err(Error::new(
            span,
            format!("{what} `{s}` is not a valid SQL identifier (expected [A-Za-z_][A-Za-z0-9_]*)"),
        ));
    }
    Ok(s.to_string())
}

/// Reject two columns mapped to the same name.
pub(crate) fn check_unique<'a>(
    names: impl IntoIterator<Item = (&'a str, Span)>,
) -> Result<()> {
    let mut seen = HashSet::new();
    for (name, span) in names {
        if !seen.insert(name) {
            return Err(Error::new(span, format!("duplicate column '{name}'")));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers() {
        assert!(is_valid_sql_ident("tab_sample"));
        assert!(is_valid_sql_ident("_x1"));
        assert!(!is_valid_sql_ident("1x"));
        assert!(!is_valid_sql_ident("r#type"));
        assert!(!is_valid_sql_ident("a-b"));
    }

    #[test]
    fn table_names_may_be_qualified() {
        let lit = LitStr::new("public.users", Span::call_site());
        assert_eq!(parse_table_name(&lit).unwrap(), "public.users");

        let lit = LitStr::new("a.b.c", Span::call_site());
        assert!(parse_table_name(&lit).is_err());

        let lit = LitStr::new("users; drop", Span::call_site());
        assert!(parse_table_name(&lit).is_err());
    }

    #[test]
    fn duplicates() {
        let span = Span::call_site();
        assert!(check_unique([("a", span), ("b", span)]).is_ok());
        let err = check_unique([("a", span), ("a", span)]).unwrap_err();
        assert!(err.to_string().contains("duplicate column 'a'"));
    }
}
