//! Serialization contexts.
//!
//! A [`Context`] accumulates SQL text and owns every dialect decision: how string
//! literals are escaped, how identifiers are quoted and what a parameter placeholder
//! looks like. Connectors supply their own context; [`StringContext`] is a configurable
//! reference implementation.

use serde::{Deserialize, Serialize};

use crate::parameter::ParameterDecl;

/// Output buffer plus dialect policy used while serializing statements.
///
/// The trait is object safe so dynamic clause elements can be serialized through
/// `&mut dyn Context`.
pub trait Context {
    /// Append raw SQL text.
    fn write_str(&mut self, text: &str);

    /// The SQL text written so far.
    fn as_str(&self) -> &str;

    /// Escape the body of a string literal (without the surrounding quotes).
    fn escape(&self, text: &str) -> String {
        text.replace('\'', "''")
    }

    /// Append a table, column or alias name.
    fn write_identifier(&mut self, name: &str) {
        self.write_str(name);
    }

    /// Append a name that must keep its exact spelling, regardless of quoting policy.
    fn write_quoted_identifier(&mut self, name: &str) {
        self.write_str("\"");
        self.write_str(&name.replace('"', "\"\""));
        self.write_str("\"");
    }

    /// Append a boolean literal.
    fn write_boolean(&mut self, value: bool) {
        self.write_str(if value { "TRUE" } else { "FALSE" });
    }

    /// Append a floating point literal.
    ///
    /// Finite values keep their fractional part (`1.0`). NaN and the infinities have no
    /// numeric literal and are written as casts of their string spelling.
    fn write_floating_point(&mut self, value: f64) {
        if value.is_finite() {
            self.write_str(&format!("{value:?}"));
        } else {
            let spelling = if value.is_nan() {
                "NaN"
            } else if value > 0.0 {
                "Infinity"
            } else {
                "-Infinity"
            };
            self.write_str("CAST('");
            self.write_str(spelling);
            self.write_str("' AS DOUBLE PRECISION)");
        }
    }

    /// Append the placeholder for the parameter called `name`.
    fn write_placeholder(&mut self, name: &str) {
        let _ = name;
        self.write_str("?");
    }

    /// Called once per placeholder, right before [`Context::write_placeholder`].
    ///
    /// Connectors normally ignore this; statement preparation uses it to learn the
    /// kind and position of every parameter.
    fn declare_parameter(&mut self, decl: ParameterDecl) {
        let _ = decl;
    }

    /// Consume the context and return the SQL text.
    fn into_sql(self) -> String
    where
        Self: Sized,
    {
        self.as_str().to_owned()
    }
}

impl<C: Context + ?Sized> Context for &mut C {
    fn write_str(&mut self, text: &str) {
        (**self).write_str(text);
    }

    fn as_str(&self) -> &str {
        (**self).as_str()
    }

    fn escape(&self, text: &str) -> String {
        (**self).escape(text)
    }

    fn write_identifier(&mut self, name: &str) {
        (**self).write_identifier(name);
    }

    fn write_quoted_identifier(&mut self, name: &str) {
        (**self).write_quoted_identifier(name);
    }

    fn write_boolean(&mut self, value: bool) {
        (**self).write_boolean(value);
    }

    fn write_floating_point(&mut self, value: f64) {
        (**self).write_floating_point(value);
    }

    fn write_placeholder(&mut self, name: &str) {
        (**self).write_placeholder(name);
    }

    fn declare_parameter(&mut self, decl: ParameterDecl) {
        (**self).declare_parameter(decl);
    }
}

/// How parameter placeholders are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderStyle {
    /// `?`
    #[default]
    Question,
    /// `$1`, `$2`, ...
    Numbered,
    /// `:name`
    Named,
}

/// How identifiers are quoted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierQuoting {
    /// Identifiers are written as-is.
    #[default]
    None,
    /// `"name"`, embedded `"` doubled.
    DoubleQuote,
    /// `` `name` ``, embedded `` ` `` doubled.
    Backtick,
}

/// Dialect settings for [`StringContext`].
///
/// By default placeholders are `?` and identifiers are not quoted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    pub placeholder: PlaceholderStyle,
    pub identifier_quoting: IdentifierQuoting,
}

impl ContextConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder style.
    pub fn with_placeholder(mut self, style: PlaceholderStyle) -> Self {
        self.placeholder = style;
        self
    }

    /// Set the identifier quoting policy.
    pub fn with_identifier_quoting(mut self, quoting: IdentifierQuoting) -> Self {
        self.identifier_quoting = quoting;
        self
    }
}

/// A [`Context`] writing into a `String`.
#[derive(Debug, Clone, Default)]
pub struct StringContext {
    sql: String,
    config: ContextConfig,
    placeholders: usize,
}

impl StringContext {
    /// Create a context with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with the given configuration.
    pub fn with_config(config: ContextConfig) -> Self {
        Self {
            sql: String::new(),
            config,
            placeholders: 0,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &ContextConfig {
        &self.config
    }

    /// Clear the output, keeping the configuration.
    pub fn reset(&mut self) {
        self.sql.clear();
        self.placeholders = 0;
    }

    fn write_quoted(&mut self, quote: char, name: &str) {
        self.sql.push(quote);
        for ch in name.chars() {
            if ch == quote {
                self.sql.push(quote);
            }
            self.sql.push(ch);
        }
        self.sql.push(quote);
    }
}

impl Context for StringContext {
    fn write_str(&mut self, text: &str) {
        self.sql.push_str(text);
    }

    fn as_str(&self) -> &str {
        &self.sql
    }

    fn write_identifier(&mut self, name: &str) {
        match self.config.identifier_quoting {
            IdentifierQuoting::None => self.sql.push_str(name),
            IdentifierQuoting::DoubleQuote => self.write_quoted('"', name),
            IdentifierQuoting::Backtick => self.write_quoted('`', name),
        }
    }

    fn write_quoted_identifier(&mut self, name: &str) {
        match self.config.identifier_quoting {
            IdentifierQuoting::Backtick => self.write_quoted('`', name),
            IdentifierQuoting::None | IdentifierQuoting::DoubleQuote => self.write_quoted('"', name),
        }
    }

    fn write_placeholder(&mut self, name: &str) {
        self.placeholders += 1;
        match self.config.placeholder {
            PlaceholderStyle::Question => self.sql.push('?'),
            PlaceholderStyle::Numbered => {
                self.sql.push('$');
                self.sql.push_str(&self.placeholders.to_string());
            }
            PlaceholderStyle::Named => {
                self.sql.push(':');
                self.sql.push_str(name);
            }
        }
    }

    fn into_sql(self) -> String {
        self.sql
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_escape_doubles_single_quotes() {
        let ctx = StringContext::new();
        assert_eq!(ctx.escape("it's"), "it''s");
    }

    #[test]
    fn non_finite_floats_are_cast_from_strings() {
        let mut ctx = StringContext::new();
        ctx.write_floating_point(2.0);
        ctx.write_str(",");
        ctx.write_floating_point(f64::NAN);
        ctx.write_str(",");
        ctx.write_floating_point(f64::NEG_INFINITY);
        assert_eq!(
            ctx.as_str(),
            "2.0,CAST('NaN' AS DOUBLE PRECISION),CAST('-Infinity' AS DOUBLE PRECISION)"
        );
    }

    #[test]
    fn numbered_placeholders_count_up() {
        let mut ctx = StringContext::with_config(
            ContextConfig::new().with_placeholder(PlaceholderStyle::Numbered),
        );
        ctx.write_placeholder("a");
        ctx.write_str(",");
        ctx.write_placeholder("b");
        assert_eq!(ctx.as_str(), "$1,$2");

        ctx.reset();
        ctx.write_placeholder("a");
        assert_eq!(ctx.into_sql(), "$1");
    }

    #[test]
    fn named_placeholders_use_the_parameter_name() {
        let mut ctx = StringContext::with_config(
            ContextConfig::new().with_placeholder(PlaceholderStyle::Named),
        );
        ctx.write_placeholder("alpha");
        assert_eq!(ctx.as_str(), ":alpha");
    }

    #[test]
    fn identifier_quoting_doubles_embedded_quotes() {
        let mut ctx = StringContext::with_config(
            ContextConfig::new().with_identifier_quoting(IdentifierQuoting::DoubleQuote),
        );
        ctx.write_identifier(r#"we"ird"#);
        assert_eq!(ctx.as_str(), r#""we""ird""#);

        let mut ctx = StringContext::with_config(
            ContextConfig::new().with_identifier_quoting(IdentifierQuoting::Backtick),
        );
        ctx.write_identifier("tab");
        assert_eq!(ctx.as_str(), "`tab`");
    }

    #[test]
    fn config_loads_from_toml() {
        let config: ContextConfig = toml::from_str(
            r#"
            placeholder = "numbered"
            identifier_quoting = "double_quote"
            "#,
        )
        .unwrap();
        assert_eq!(config.placeholder, PlaceholderStyle::Numbered);
        assert_eq!(config.identifier_quoting, IdentifierQuoting::DoubleQuote);

        let partial: ContextConfig = toml::from_str(r#"placeholder = "named""#).unwrap();
        assert_eq!(partial.identifier_quoting, IdentifierQuoting::None);
    }
}
