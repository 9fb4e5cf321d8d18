//! Result rows and fields.
//!
//! A select's result row is a tuple of [`Field`]s, one per select-list entry, whose
//! kinds follow the select list. The connector fills the row in place on every
//! [`ResultSet::next_row`] call.
//!
//! Reading a field is checked: reading from a row that is not valid (before the first
//! row, after the last) and reading the value of a NULL field are errors, or panics
//! when the connector asks for [`ResultPolicy::assert_validity`].

use std::fmt;

use crate::connector::{ResultBinder, ResultCursor, ResultPolicy};
use crate::error::{Error, Result};
use crate::kind::ValueKind;
use crate::macros::for_each_tuple;

/// One value of a result row.
#[derive(Clone, PartialEq)]
pub struct Field<K: ValueKind> {
    value: K::Native,
    is_null: bool,
    is_valid: bool,
    null_is_trivial: bool,
    assert_validity: bool,
}

impl<K: ValueKind> Field<K> {
    /// An invalid, NULL field.
    pub fn new(policy: ResultPolicy, null_is_trivial: bool) -> Self {
        Self {
            value: K::Native::default(),
            is_null: true,
            is_valid: false,
            null_is_trivial,
            assert_validity: policy.assert_validity,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn is_null(&self) -> Result<bool> {
        self.check_valid("accessing is_null in non-existing row")?;
        Ok(self.is_null)
    }

    /// The value. NULL reads as the trivial value when this field treats it so, and is
    /// an error otherwise.
    pub fn value(&self) -> Result<K::Native> {
        self.check_valid("accessing value in non-existing row")?;
        if self.is_null && !self.null_is_trivial {
            return Err(self.fail(Error::null_field("accessing value of NULL field")));
        }
        Ok(self.value.clone())
    }

    /// The value, `None` for NULL.
    pub fn get(&self) -> Result<Option<K::Native>> {
        self.check_valid("accessing value in non-existing row")?;
        Ok((!self.is_null).then(|| self.value.clone()))
    }

    fn check_valid(&self, message: &'static str) -> Result<()> {
        if self.is_valid {
            Ok(())
        } else {
            Err(self.fail(Error::invalid_row(message)))
        }
    }

    fn fail(&self, err: Error) -> Error {
        if self.assert_validity {
            panic!("{err}");
        }
        #[cfg(feature = "tracing")]
        tracing::warn!(target: "typedsql.result", error = %err, kind = K::NAME, "result field access failed");
        err
    }

    fn bind(&mut self, binder: &mut dyn ResultBinder, index: usize) {
        K::bind_result(binder, index, &mut self.value, &mut self.is_null);
    }

    fn validate(&mut self) {
        self.is_valid = true;
    }

    fn invalidate(&mut self) {
        self.is_valid = false;
        self.is_null = true;
        self.value = K::Native::default();
    }
}

impl<K: ValueKind> fmt::Debug for Field<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid {
            f.write_str("<invalid>")
        } else if self.is_null {
            f.write_str("NULL")
        } else {
            fmt::Debug::fmt(&self.value, f)
        }
    }
}

/// A row that a connector can fill.
pub trait ResultRow {
    /// Number of fields.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Let `binder` write every field, field `i` at index `i`.
    fn bind(&mut self, binder: &mut dyn ResultBinder);

    /// Mark the row as holding data.
    fn validate(&mut self);

    /// Mark the row as past the end and reset every field.
    fn invalidate(&mut self);

    fn is_valid(&self) -> bool;
}

macro_rules! impl_result_row {
    ($(($T:ident $I:ident $idx:tt $P:ident))+) => {
        impl<$($T: ValueKind),+> ResultRow for ($(Field<$T>,)+) {
            fn len(&self) -> usize {
                crate::macros::count!($($T)+)
            }

            fn bind(&mut self, binder: &mut dyn ResultBinder) {
                $( self.$idx.bind(binder, $idx); )+
            }

            fn validate(&mut self) {
                $( self.$idx.validate(); )+
            }

            fn invalidate(&mut self) {
                $( self.$idx.invalidate(); )+
            }

            fn is_valid(&self) -> bool {
                self.0.is_valid()
            }
        }
    };
}

for_each_tuple!(impl_result_row);

/// The rows of a select, read one at a time.
pub struct ResultSet<Cur, R> {
    cursor: Cur,
    row: R,
}

impl<Cur: ResultCursor, R: ResultRow> ResultSet<Cur, R> {
    pub(crate) fn new(cursor: Cur, row: R) -> Self {
        Self { cursor, row }
    }

    /// Advance and return the next row, `None` once the rows are exhausted.
    pub fn next_row(&mut self) -> Result<Option<&R>> {
        if self.cursor.next(&mut self.row)? {
            Ok(Some(&self.row))
        } else {
            Ok(None)
        }
    }

    /// The current row; invalid before the first [`next_row`](Self::next_row) and after
    /// the last.
    pub fn front(&self) -> &R {
        &self.row
    }

    /// Read every remaining row through `f`.
    pub fn try_for_each<F>(&mut self, mut f: F) -> Result<()>
    where
        F: FnMut(&R) -> Result<()>,
    {
        while let Some(row) = self.next_row()? {
            f(row)?;
        }
        Ok(())
    }
}

impl<Cur, R: fmt::Debug> fmt::Debug for ResultSet<Cur, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultSet").field("row", &self.row).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::{Boolean, Integral, Text};

    struct Fixed;

    impl ResultBinder for Fixed {
        fn bind_boolean_result(&mut self, _: usize, value: &mut bool, is_null: &mut bool) {
            *value = false;
            *is_null = false;
        }
        fn bind_integral_result(&mut self, index: usize, value: &mut i64, is_null: &mut bool) {
            *value = index as i64 + 40;
            *is_null = false;
        }
        fn bind_floating_point_result(&mut self, _: usize, _: &mut f64, is_null: &mut bool) {
            *is_null = true;
        }
        fn bind_text_result(&mut self, _: usize, value: &mut String, is_null: &mut bool) {
            value.clear();
            *is_null = true;
        }
    }

    fn filled<R: ResultRow>(mut row: R) -> R {
        row.bind(&mut Fixed);
        row.validate();
        row
    }

    #[test]
    fn invalid_rows_are_errors() {
        let field = Field::<Integral>::new(ResultPolicy::new(), false);
        assert!(field.value().unwrap_err().is_invalid_row());
        let err = field.is_null().unwrap_err();
        assert_eq!(err.to_string(), "Invalid row: accessing is_null in non-existing row");
    }

    #[test]
    #[should_panic(expected = "accessing value in non-existing row")]
    fn invalid_rows_panic_when_asserting() {
        let field = Field::<Integral>::new(ResultPolicy::new().assert_validity(true), false);
        let _ = field.value();
    }

    #[test]
    fn null_fields_need_trivial_treatment() {
        let policy = ResultPolicy::new();
        let row = filled((Field::<Integral>::new(policy, false), Field::<Text>::new(policy, false)));
        assert_eq!(row.0.value().unwrap(), 40);
        assert!(row.1.is_null().unwrap());
        assert!(row.1.value().unwrap_err().is_null_field());
        assert_eq!(row.1.get().unwrap(), None);

        let row = filled((Field::<Text>::new(policy, true),));
        assert_eq!(row.0.value().unwrap(), "");
    }

    #[test]
    fn false_is_not_null() {
        let row = filled((Field::<Boolean>::new(ResultPolicy::new(), false),));
        assert!(!row.0.is_null().unwrap());
        assert!(!row.0.value().unwrap());
    }

    #[test]
    fn invalidate_resets_fields() {
        let mut row = filled((Field::<Integral>::new(ResultPolicy::new(), false),));
        assert!(row.is_valid());
        row.invalidate();
        assert!(!row.is_valid());
        assert_eq!(format!("{:?}", row.0), "<invalid>");
    }
}
