//! Validated runtime identifiers.
//!
//! Table and column names known at compile time never pass through here. [`Ident`] is
//! for names that arrive at run time (dynamic `FROM` tables, for instance), which must
//! be checked before they are spliced into SQL:
//!
//! - plain parts match `[A-Za-z_][A-Za-z0-9_$]*` and are written through the context's
//!   quoting policy
//! - `"quoted"` parts may contain anything but NUL (`""` escapes a quote) and are always
//!   written quoted
//! - parts are joined with `.`

use std::iter::Peekable;
use std::str::Chars;

use crate::context::Context;
use crate::error::{Error, Result};
use crate::serialize::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentPart {
    Plain(String),
    Quoted(String),
}

/// A possibly dotted SQL name, e.g. `public.users` or `"Odd Name".id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    parts: Vec<IdentPart>,
}

impl Ident {
    pub fn parse(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Err(Error::validation("identifier cannot be empty"));
        }
        if text.contains('\0') {
            return Err(Error::validation("identifier cannot contain NUL"));
        }

        let mut chars = text.chars().peekable();
        let mut parts = vec![next_part(&mut chars)?];
        while let Some(c) = chars.next() {
            if c != '.' {
                return Err(Error::validation(format!(
                    "expected '.' between identifier parts, got '{c}'"
                )));
            }
            if chars.peek().is_none() {
                return Err(Error::validation("trailing '.' in identifier"));
            }
            parts.push(next_part(&mut chars)?);
        }
        Ok(Self { parts })
    }

    pub fn parts(&self) -> &[IdentPart] {
        &self.parts
    }
}

fn next_part(chars: &mut Peekable<Chars<'_>>) -> Result<IdentPart> {
    if chars.next_if_eq(&'"').is_some() {
        return quoted_part(chars);
    }

    let mut name = String::new();
    while let Some(&c) = chars.peek() {
        if c == '.' {
            break;
        }
        let valid = if name.is_empty() {
            c == '_' || c.is_ascii_alphabetic()
        } else {
            c == '_' || c == '$' || c.is_ascii_alphanumeric()
        };
        if !valid {
            return Err(Error::validation(format!(
                "invalid character '{c}' in identifier"
            )));
        }
        name.push(c);
        chars.next();
    }
    if name.is_empty() {
        return Err(Error::validation("empty identifier part"));
    }
    Ok(IdentPart::Plain(name))
}

fn quoted_part(chars: &mut Peekable<Chars<'_>>) -> Result<IdentPart> {
    let mut name = String::new();
    loop {
        match chars.next() {
            Some('"') if chars.next_if_eq(&'"').is_some() => name.push('"'),
            Some('"') => break,
            Some(c) => name.push(c),
            None => return Err(Error::validation("unclosed quoted identifier")),
        }
    }
    if name.is_empty() {
        return Err(Error::validation("empty quoted identifier"));
    }
    Ok(IdentPart::Quoted(name))
}

impl Serialize for Ident {
    fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                ctx.write_str(".");
            }
            match part {
                IdentPart::Plain(name) => ctx.write_identifier(name),
                IdentPart::Quoted(name) => ctx.write_quoted_identifier(name),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{ContextConfig, IdentifierQuoting, StringContext};
    use crate::serialize::to_sql;

    #[test]
    fn plain_and_dotted() {
        assert_eq!(to_sql(&Ident::parse("users").unwrap()), "users");
        assert_eq!(to_sql(&Ident::parse("public.users").unwrap()), "public.users");
        assert_eq!(Ident::parse("a.b.c").unwrap().parts().len(), 3);
    }

    #[test]
    fn quoted_parts_keep_their_spelling() {
        let ident = Ident::parse(r#"public."Odd ""Name""""#).unwrap();
        assert_eq!(
            ident.parts(),
            [
                IdentPart::Plain("public".into()),
                IdentPart::Quoted(r#"Odd "Name""#.into())
            ]
        );
        assert_eq!(to_sql(&ident), r#"public."Odd ""Name""""#);
    }

    #[test]
    fn plain_parts_follow_the_quoting_policy() {
        let mut ctx = StringContext::with_config(
            ContextConfig::new().with_identifier_quoting(IdentifierQuoting::Backtick),
        );
        Ident::parse("tab_bar").unwrap().serialize(&mut ctx);
        assert_eq!(ctx.as_str(), "`tab_bar`");
    }

    #[test]
    fn rejects_malformed_names() {
        for bad in [
            "",
            "1abc",
            "a-b",
            "a.",
            ".a",
            "a..b",
            r#""open"#,
            r#""""#,
            "a\0b",
            "users; DROP TABLE users",
            r#""a"b"#,
        ] {
            let err = Ident::parse(bad).unwrap_err();
            assert!(matches!(err, Error::Validation(_)), "{bad:?}");
        }
    }
}
