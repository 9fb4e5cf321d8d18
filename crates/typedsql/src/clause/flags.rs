use std::fmt;

use crate::context::Context;
use crate::serialize::Serialize;

/// A select flag such as `DISTINCT`.
pub trait SelectFlag: Serialize + Copy + fmt::Debug + Send + Sync + 'static {}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Distinct;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct All;

impl Serialize for Distinct {
    fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) {
        ctx.write_str("DISTINCT");
    }
}

impl Serialize for All {
    fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) {
        ctx.write_str("ALL");
    }
}

impl SelectFlag for Distinct {}
impl SelectFlag for All {}

/// The flag slot of a select, written between `SELECT` and the column list.
#[derive(Debug, Clone, Copy)]
pub struct Flags<F> {
    flag: F,
}

impl<F> Flags<F> {
    pub(crate) fn new(flag: F) -> Self {
        Self { flag }
    }
}

impl<F: SelectFlag> Serialize for Flags<F> {
    fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) {
        self.flag.serialize(ctx);
        ctx.write_str(" ");
    }
}
