//! Scripted in-memory connector shared by the integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;

use typedsql::connector::{ParameterBinder, ResultBinder, ResultCursor};
use typedsql::parameter::ParameterList;
use typedsql::result::ResultRow;
use typedsql::{
    Boolean, Connector, ContextConfig, Error, FloatingPoint, Integral, ResultPolicy,
    StringContext, Table, Text,
};

#[derive(Table, Debug, Clone, Copy, Default)]
#[table(name = "tab_person")]
pub struct TabPerson {
    id: Integral,
    #[column(nullable, trivial_is_null)]
    name: Text,
    #[column(nullable)]
    feature: Integral,
    active: Boolean,
    #[column(nullable)]
    score: FloatingPoint,
}

#[derive(Table, Debug, Clone, Copy, Default)]
#[table(name = "tab_feature")]
pub struct TabFeature {
    id: Integral,
    name: Text,
    fatal: Boolean,
}

/// A value in a scripted row or a bound parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum MockValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<i64> for MockValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<&str> for MockValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<bool> for MockValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for MockValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("mock failure: {0}")]
pub struct MockError(pub String);

/// Records every statement and serves scripted rows to the next select.
#[derive(Debug, Default)]
pub struct MockDb {
    pub config: ContextConfig,
    pub policy: ResultPolicy,
    /// SQL of every executed statement, in order.
    pub executed: Vec<String>,
    /// SQL of every prepared statement, in order.
    pub prepared: Vec<String>,
    /// Parameters bound for each prepared run.
    pub bound: Vec<Vec<MockValue>>,
    /// Row count reported by writes.
    pub affected: u64,
    rows: VecDeque<Vec<MockValue>>,
    fail_next: Option<String>,
}

impl MockDb {
    pub fn new() -> Self {
        Self {
            affected: 1,
            ..Self::default()
        }
    }

    pub fn with_policy(policy: ResultPolicy) -> Self {
        Self {
            policy,
            ..Self::new()
        }
    }

    /// Rows handed to the next select.
    pub fn push_row(&mut self, row: Vec<MockValue>) {
        self.rows.push_back(row);
    }

    /// Make the next statement fail with `message`.
    pub fn fail_next(&mut self, message: &str) {
        self.fail_next = Some(message.to_owned());
    }

    pub fn last_sql(&self) -> &str {
        self.executed.last().map(String::as_str).unwrap_or_default()
    }

    fn run(&mut self, sql: &str) -> typedsql::Result<()> {
        self.executed.push(sql.to_owned());
        match self.fail_next.take() {
            Some(message) => Err(Error::connector(MockError(message))),
            None => Ok(()),
        }
    }

    fn cursor(&mut self) -> MockCursor {
        MockCursor {
            rows: std::mem::take(&mut self.rows),
        }
    }

    fn bind(&mut self, params: &ParameterList) {
        let mut binder = MockParams::default();
        params.bind_all(&mut binder);
        self.bound.push(binder.values);
    }
}

#[derive(Debug)]
pub struct MockPrepared {
    pub sql: String,
}

impl Connector for MockDb {
    type Context = StringContext;
    type Cursor = MockCursor;
    type Prepared = MockPrepared;

    fn context(&self) -> StringContext {
        StringContext::with_config(self.config)
    }

    fn result_policy(&self) -> ResultPolicy {
        self.policy
    }

    fn select(&mut self, sql: &str) -> typedsql::Result<MockCursor> {
        self.run(sql)?;
        Ok(self.cursor())
    }

    fn insert(&mut self, sql: &str) -> typedsql::Result<u64> {
        self.run(sql)?;
        Ok(self.affected)
    }

    fn update(&mut self, sql: &str) -> typedsql::Result<u64> {
        self.run(sql)?;
        Ok(self.affected)
    }

    fn remove(&mut self, sql: &str) -> typedsql::Result<u64> {
        self.run(sql)?;
        Ok(self.affected)
    }

    fn prepare_select(&mut self, sql: &str) -> typedsql::Result<MockPrepared> {
        self.prepared.push(sql.to_owned());
        Ok(MockPrepared { sql: sql.to_owned() })
    }

    fn prepare_insert(&mut self, sql: &str) -> typedsql::Result<MockPrepared> {
        self.prepare_select(sql)
    }

    fn prepare_update(&mut self, sql: &str) -> typedsql::Result<MockPrepared> {
        self.prepare_select(sql)
    }

    fn prepare_remove(&mut self, sql: &str) -> typedsql::Result<MockPrepared> {
        self.prepare_select(sql)
    }

    fn run_prepared_select(
        &mut self,
        prepared: &mut MockPrepared,
        params: &ParameterList,
    ) -> typedsql::Result<MockCursor> {
        self.bind(params);
        self.run(&prepared.sql)?;
        Ok(self.cursor())
    }

    fn run_prepared_insert(
        &mut self,
        prepared: &mut MockPrepared,
        params: &ParameterList,
    ) -> typedsql::Result<u64> {
        self.bind(params);
        self.run(&prepared.sql)?;
        Ok(self.affected)
    }

    fn run_prepared_update(
        &mut self,
        prepared: &mut MockPrepared,
        params: &ParameterList,
    ) -> typedsql::Result<u64> {
        self.run_prepared_insert(prepared, params)
    }

    fn run_prepared_remove(
        &mut self,
        prepared: &mut MockPrepared,
        params: &ParameterList,
    ) -> typedsql::Result<u64> {
        self.run_prepared_insert(prepared, params)
    }
}

#[derive(Debug)]
pub struct MockCursor {
    rows: VecDeque<Vec<MockValue>>,
}

impl ResultCursor for MockCursor {
    fn next(&mut self, row: &mut dyn ResultRow) -> typedsql::Result<bool> {
        match self.rows.pop_front() {
            Some(values) => {
                row.bind(&mut MockRow(&values));
                row.validate();
                Ok(true)
            }
            None => {
                row.invalidate();
                Ok(false)
            }
        }
    }
}

struct MockRow<'a>(&'a [MockValue]);

impl MockRow<'_> {
    fn value(&self, index: usize) -> &MockValue {
        self.0.get(index).unwrap_or(&MockValue::Null)
    }
}

impl ResultBinder for MockRow<'_> {
    fn bind_boolean_result(&mut self, index: usize, value: &mut bool, is_null: &mut bool) {
        *is_null = !matches!(self.value(index), MockValue::Bool(_));
        *value = matches!(self.value(index), MockValue::Bool(true));
    }

    fn bind_integral_result(&mut self, index: usize, value: &mut i64, is_null: &mut bool) {
        match self.value(index) {
            MockValue::Int(v) => {
                *value = *v;
                *is_null = false;
            }
            _ => {
                *value = 0;
                *is_null = true;
            }
        }
    }

    fn bind_floating_point_result(&mut self, index: usize, value: &mut f64, is_null: &mut bool) {
        match self.value(index) {
            MockValue::Float(v) => {
                *value = *v;
                *is_null = false;
            }
            _ => {
                *value = 0.0;
                *is_null = true;
            }
        }
    }

    fn bind_text_result(&mut self, index: usize, value: &mut String, is_null: &mut bool) {
        value.clear();
        match self.value(index) {
            MockValue::Text(v) => {
                value.push_str(v);
                *is_null = false;
            }
            _ => *is_null = true,
        }
    }
}

#[derive(Default)]
struct MockParams {
    values: Vec<MockValue>,
}

impl MockParams {
    fn put(&mut self, index: usize, value: MockValue) {
        if self.values.len() <= index {
            self.values.resize(index + 1, MockValue::Null);
        }
        self.values[index] = value;
    }
}

impl ParameterBinder for MockParams {
    fn bind_boolean_parameter(&mut self, index: usize, value: bool, is_null: bool) {
        self.put(index, if is_null { MockValue::Null } else { MockValue::Bool(value) });
    }

    fn bind_integral_parameter(&mut self, index: usize, value: i64, is_null: bool) {
        self.put(index, if is_null { MockValue::Null } else { MockValue::Int(value) });
    }

    fn bind_floating_point_parameter(&mut self, index: usize, value: f64, is_null: bool) {
        self.put(index, if is_null { MockValue::Null } else { MockValue::Float(value) });
    }

    fn bind_text_parameter(&mut self, index: usize, value: &str, is_null: bool) {
        self.put(
            index,
            if is_null {
                MockValue::Null
            } else {
                MockValue::Text(value.to_owned())
            },
        );
    }
}
