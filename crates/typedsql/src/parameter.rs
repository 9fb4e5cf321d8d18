//! Named placeholders and the values bound to them.
//!
//! A [`Parameter`] is an expression node that serializes to a placeholder. When a
//! statement is prepared, every placeholder is recorded in order into a
//! [`ParameterList`], whose slots are typed by the parameter's kind. Slots start out NULL
//! and are bound positionally through the connector's [`ParameterBinder`].

use std::any::Any;
use std::fmt;
use std::marker::PhantomData;

use crate::connector::ParameterBinder;
use crate::context::Context;
use crate::error::{Error, Result};
use crate::expr::Expression;
use crate::kind::{CanBeNull, NotNull, Nullability, ValueKind};
use crate::scope::InScope;
use crate::serialize::Serialize;
use crate::table::Column;

/// A named placeholder of kind `K`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Parameter<K, N = NotNull> {
    name: &'static str,
    _marker: PhantomData<(K, N)>,
}

impl<K: ValueKind, N: Nullability> Parameter<K, N> {
    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// A placeholder called `name` of kind `K`.
pub fn parameter<K: ValueKind>(name: &'static str) -> Parameter<K> {
    Parameter {
        name,
        _marker: PhantomData,
    }
}

/// A placeholder with the kind and nullability of `column`, named after it.
pub fn parameter_for<C: Column>(column: C) -> Parameter<C::Kind, C::Nullability> {
    let _ = column;
    Parameter {
        name: C::NAME,
        _marker: PhantomData,
    }
}

impl<K: ValueKind, N: Nullability> Serialize for Parameter<K, N> {
    fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) {
        ctx.declare_parameter(ParameterDecl::new::<K>(self.name));
        ctx.write_placeholder(self.name);
    }
}

impl<K: ValueKind, N: Nullability> Expression for Parameter<K, N> {
    type Kind = K;
    type Nullability = N;
}

impl<S, K, N> InScope<S, ()> for Parameter<K, N> {}

/// Kind and name of one placeholder, reported to [`Context::declare_parameter`].
#[derive(Clone, Copy)]
pub struct ParameterDecl {
    name: &'static str,
    kind: &'static str,
    slot: fn() -> Box<dyn ParameterSlot>,
}

impl ParameterDecl {
    pub fn new<K: ValueKind>(name: &'static str) -> Self {
        Self {
            name,
            kind: K::NAME,
            slot: ParameterValue::<K>::boxed,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// A fresh, NULL slot for this parameter.
    pub fn new_slot(&self) -> Box<dyn ParameterSlot> {
        (self.slot)()
    }
}

impl fmt::Debug for ParameterDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParameterDecl")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}

/// Type-erased parameter storage.
pub trait ParameterSlot: Any + fmt::Debug + Send + Sync {
    fn kind(&self) -> &'static str;
    fn is_null(&self) -> bool;
    fn set_null(&mut self);
    fn bind(&self, binder: &mut dyn ParameterBinder, index: usize);
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Storage for one parameter of kind `K`. NULL until a value is set.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterValue<K: ValueKind> {
    value: K::Native,
    is_null: bool,
}

impl<K: ValueKind> Default for ParameterValue<K> {
    fn default() -> Self {
        Self {
            value: K::Native::default(),
            is_null: true,
        }
    }
}

impl<K: ValueKind> ParameterValue<K> {
    fn boxed() -> Box<dyn ParameterSlot> {
        Box::new(Self::default())
    }

    /// The value, or `None` while the parameter is NULL.
    pub fn get(&self) -> Option<&K::Native> {
        (!self.is_null).then_some(&self.value)
    }

    pub fn set(&mut self, value: K::Native) {
        self.value = value;
        self.is_null = false;
    }
}

impl<K: ValueKind> ParameterSlot for ParameterValue<K> {
    fn kind(&self) -> &'static str {
        K::NAME
    }

    fn is_null(&self) -> bool {
        self.is_null
    }

    fn set_null(&mut self) {
        self.value = K::Native::default();
        self.is_null = true;
    }

    fn bind(&self, binder: &mut dyn ParameterBinder, index: usize) {
        K::bind_parameter(binder, index, &self.value, self.is_null);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// The parameters of a prepared statement, in placeholder order.
///
/// A name used by several placeholders owns several slots; setting the name sets all
/// of them.
#[derive(Debug, Default)]
pub struct ParameterList {
    slots: Vec<(&'static str, Box<dyn ParameterSlot>)>,
}

impl ParameterList {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, decl: ParameterDecl) {
        self.slots.push((decl.name(), decl.new_slot()));
    }

    /// Number of placeholders.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Parameter names in placeholder order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.slots.iter().map(|(name, _)| *name)
    }

    /// Set `param` to `value`.
    pub fn set<K, N, V>(&mut self, param: &Parameter<K, N>, value: V) -> Result<()>
    where
        K: ValueKind,
        N: Nullability,
        V: Into<K::Native>,
    {
        let value = value.into();
        self.for_each_slot(param, |slot| slot.set(value.clone()))
    }

    /// Set a nullable `param` to NULL.
    pub fn set_null<K: ValueKind>(&mut self, param: &Parameter<K, CanBeNull>) -> Result<()> {
        self.for_each_slot(param, |slot| slot.set_null())
    }

    /// The current value of `param`, `None` while it is NULL.
    pub fn get<K: ValueKind, N: Nullability>(
        &self,
        param: &Parameter<K, N>,
    ) -> Result<Option<&K::Native>> {
        let (_, slot) = self
            .slots
            .iter()
            .find(|(name, _)| *name == param.name())
            .ok_or_else(|| unknown(param.name()))?;
        slot.as_any()
            .downcast_ref::<ParameterValue<K>>()
            .map(ParameterValue::get)
            .ok_or_else(|| mismatch::<K>(param.name(), slot.kind()))
    }

    /// Hand every slot to `binder`, in placeholder order.
    pub fn bind_all(&self, binder: &mut dyn ParameterBinder) {
        for (index, (_, slot)) in self.slots.iter().enumerate() {
            slot.bind(binder, index);
        }
    }

    fn for_each_slot<K, N, F>(&mut self, param: &Parameter<K, N>, mut f: F) -> Result<()>
    where
        K: ValueKind,
        N: Nullability,
        F: FnMut(&mut ParameterValue<K>),
    {
        let mut found = false;
        for (name, slot) in &self.slots {
            if *name != param.name() {
                continue;
            }
            if !slot.as_any().is::<ParameterValue<K>>() {
                return Err(mismatch::<K>(param.name(), slot.kind()));
            }
            found = true;
        }
        if !found {
            return Err(unknown(param.name()));
        }
        for (name, slot) in &mut self.slots {
            if *name != param.name() {
                continue;
            }
            if let Some(value) = slot.as_any_mut().downcast_mut::<ParameterValue<K>>() {
                f(value);
            }
        }
        Ok(())
    }
}

fn unknown(name: &str) -> Error {
    Error::parameter(format!("statement has no parameter named '{name}'"))
}

fn mismatch<K: ValueKind>(name: &str, declared: &str) -> Error {
    Error::parameter(format!(
        "parameter '{name}' is declared as {declared}, not {}",
        K::NAME
    ))
}

/// Wraps a connector context and records every placeholder written through it.
pub(crate) struct ParameterRecorder<C> {
    inner: C,
    params: ParameterList,
}

impl<C: Context> ParameterRecorder<C> {
    pub(crate) fn new(inner: C) -> Self {
        Self {
            inner,
            params: ParameterList::new(),
        }
    }

    pub(crate) fn finish(self) -> (String, ParameterList) {
        (self.inner.into_sql(), self.params)
    }
}

impl<C: Context> Context for ParameterRecorder<C> {
    fn write_str(&mut self, text: &str) {
        self.inner.write_str(text);
    }

    fn as_str(&self) -> &str {
        self.inner.as_str()
    }

    fn escape(&self, text: &str) -> String {
        self.inner.escape(text)
    }

    fn write_identifier(&mut self, name: &str) {
        self.inner.write_identifier(name);
    }

    fn write_quoted_identifier(&mut self, name: &str) {
        self.inner.write_quoted_identifier(name);
    }

    fn write_boolean(&mut self, value: bool) {
        self.inner.write_boolean(value);
    }

    fn write_floating_point(&mut self, value: f64) {
        self.inner.write_floating_point(value);
    }

    fn write_placeholder(&mut self, name: &str) {
        self.inner.write_placeholder(name);
    }

    fn declare_parameter(&mut self, decl: ParameterDecl) {
        self.params.push(decl);
        self.inner.declare_parameter(decl);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::StringContext;
    use crate::kind::{Boolean, Integral, Text};
    use crate::serialize::{SerializeList, to_sql};
    use crate::test_schema::tab_sample;

    fn record<T: SerializeList>(nodes: &T) -> (String, ParameterList) {
        let mut recorder = ParameterRecorder::new(StringContext::new());
        nodes.serialize_list(&mut recorder, ",");
        recorder.finish()
    }

    #[test]
    fn parameter_serializes_as_placeholder() {
        assert_eq!(to_sql(&parameter::<Integral>("alpha")), "?");
    }

    #[test]
    fn parameter_for_takes_column_name_and_nullability() {
        let p = parameter_for(tab_sample::Beta);
        assert_eq!(p.name(), "beta");
        let _: Parameter<Text, CanBeNull> = p;
    }

    #[test]
    fn slots_start_null_and_bind_in_order() {
        let a = parameter::<Integral>("a");
        let b = parameter::<Text>("b");
        let (_, mut params) = record(&(a, b));
        assert_eq!(params.names().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(params.get(&a).unwrap(), None);

        params.set(&a, 7).unwrap();
        params.set(&b, "x").unwrap();
        assert_eq!(params.get(&a).unwrap(), Some(&7));
        assert_eq!(params.get(&b).unwrap().map(String::as_str), Some("x"));
    }

    #[test]
    fn repeated_names_share_a_value() {
        let a = parameter::<Integral>("a");
        let (sql, mut params) = record(&(a, a));
        assert_eq!(sql, "?,?");
        assert_eq!(params.len(), 2);
        params.set(&a, 3).unwrap();

        #[derive(Default)]
        struct Seen(Vec<(usize, i64, bool)>);
        impl ParameterBinder for Seen {
            fn bind_boolean_parameter(&mut self, _: usize, _: bool, _: bool) {}
            fn bind_integral_parameter(&mut self, index: usize, value: i64, is_null: bool) {
                self.0.push((index, value, is_null));
            }
            fn bind_floating_point_parameter(&mut self, _: usize, _: f64, _: bool) {}
            fn bind_text_parameter(&mut self, _: usize, _: &str, _: bool) {}
        }
        let mut seen = Seen::default();
        params.bind_all(&mut seen);
        assert_eq!(seen.0, [(0, 3, false), (1, 3, false)]);
    }

    #[test]
    fn unknown_and_mismatched_parameters_are_errors() {
        let (_, mut params) = record(&(parameter::<Boolean>("flag"),));
        let err = params.set(&parameter::<Boolean>("other"), true).unwrap_err();
        assert!(err.to_string().contains("no parameter named 'other'"));

        let err = params.set(&parameter::<Integral>("flag"), 1).unwrap_err();
        assert!(err.to_string().contains("declared as boolean"));
    }

    #[test]
    fn failed_set_leaves_every_slot_unchanged() {
        let a = parameter::<Integral>("a");
        let (_, mut params) = record(&(a, parameter::<Text>("a")));
        let err = params.set(&a, 5).unwrap_err();
        assert!(err.to_string().contains("declared as text"));
        assert_eq!(params.get(&a).unwrap(), None);
    }

    #[test]
    fn nullable_parameters_can_be_reset_to_null() {
        let p = parameter_for(tab_sample::Beta);
        let (_, mut params) = record(&(p,));
        params.set(&p, "x").unwrap();
        params.set_null(&p).unwrap();
        assert_eq!(params.get(&p).unwrap(), None);
    }
}
