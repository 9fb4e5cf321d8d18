use super::LimitClause;
use crate::context::Context;
use crate::serialize::Serialize;

/// `LIMIT n`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit {
    count: u64,
}

impl Limit {
    pub(crate) fn new(count: u64) -> Self {
        Self { count }
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}

impl Serialize for Limit {
    fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) {
        ctx.write_str(" LIMIT ");
        ctx.write_str(&self.count.to_string());
    }
}

impl LimitClause for Limit {}

/// `OFFSET n`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset {
    count: u64,
}

impl Offset {
    pub(crate) fn new(count: u64) -> Self {
        Self { count }
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}

impl Serialize for Offset {
    fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) {
        ctx.write_str(" OFFSET ");
        ctx.write_str(&self.count.to_string());
    }
}
