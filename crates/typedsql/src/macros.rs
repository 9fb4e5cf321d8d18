//! Internal macros.

/// Invoke `$mac` once per supported tuple arity.
///
/// Each element is `(Type IndexType index Position)`; the index type and position are
/// used by the scope impls in [`crate::scope`].
macro_rules! for_each_tuple {
    ($mac:ident) => {
        $mac! { (A IA 0 At0) }
        $mac! { (A IA 0 At0) (B IB 1 At1) }
        $mac! { (A IA 0 At0) (B IB 1 At1) (D ID 2 At2) }
        $mac! { (A IA 0 At0) (B IB 1 At1) (D ID 2 At2) (E IE 3 At3) }
        $mac! { (A IA 0 At0) (B IB 1 At1) (D ID 2 At2) (E IE 3 At3) (F IF 4 At4) }
        $mac! { (A IA 0 At0) (B IB 1 At1) (D ID 2 At2) (E IE 3 At3) (F IF 4 At4) (G IG 5 At5) }
        $mac! { (A IA 0 At0) (B IB 1 At1) (D ID 2 At2) (E IE 3 At3) (F IF 4 At4) (G IG 5 At5)
                (H IH 6 At6) }
        $mac! { (A IA 0 At0) (B IB 1 At1) (D ID 2 At2) (E IE 3 At3) (F IF 4 At4) (G IG 5 At5)
                (H IH 6 At6) (J IJ 7 At7) }
        $mac! { (A IA 0 At0) (B IB 1 At1) (D ID 2 At2) (E IE 3 At3) (F IF 4 At4) (G IG 5 At5)
                (H IH 6 At6) (J IJ 7 At7) (K IK 8 At8) }
        $mac! { (A IA 0 At0) (B IB 1 At1) (D ID 2 At2) (E IE 3 At3) (F IF 4 At4) (G IG 5 At5)
                (H IH 6 At6) (J IJ 7 At7) (K IK 8 At8) (L IL 9 At9) }
        $mac! { (A IA 0 At0) (B IB 1 At1) (D ID 2 At2) (E IE 3 At3) (F IF 4 At4) (G IG 5 At5)
                (H IH 6 At6) (J IJ 7 At7) (K IK 8 At8) (L IL 9 At9) (M IM 10 At10) }
        $mac! { (A IA 0 At0) (B IB 1 At1) (D ID 2 At2) (E IE 3 At3) (F IF 4 At4) (G IG 5 At5)
                (H IH 6 At6) (J IJ 7 At7) (K IK 8 At8) (L IL 9 At9) (M IM 10 At10)
                (N IN 11 At11) }
        $mac! { (A IA 0 At0) (B IB 1 At1) (D ID 2 At2) (E IE 3 At3) (F IF 4 At4) (G IG 5 At5)
                (H IH 6 At6) (J IJ 7 At7) (K IK 8 At8) (L IL 9 At9) (M IM 10 At10)
                (N IN 11 At11) (O IO 12 At12) }
        $mac! { (A IA 0 At0) (B IB 1 At1) (D ID 2 At2) (E IE 3 At3) (F IF 4 At4) (G IG 5 At5)
                (H IH 6 At6) (J IJ 7 At7) (K IK 8 At8) (L IL 9 At9) (M IM 10 At10)
                (N IN 11 At11) (O IO 12 At12) (P IP 13 At13) }
        $mac! { (A IA 0 At0) (B IB 1 At1) (D ID 2 At2) (E IE 3 At3) (F IF 4 At4) (G IG 5 At5)
                (H IH 6 At6) (J IJ 7 At7) (K IK 8 At8) (L IL 9 At9) (M IM 10 At10)
                (N IN 11 At11) (O IO 12 At12) (P IP 13 At13) (Q IQ 14 At14) }
        $mac! { (A IA 0 At0) (B IB 1 At1) (D ID 2 At2) (E IE 3 At3) (F IF 4 At4) (G IG 5 At5)
                (H IH 6 At6) (J IJ 7 At7) (K IK 8 At8) (L IL 9 At9) (M IM 10 At10)
                (N IN 11 At11) (O IO 12 At12) (P IP 13 At13) (Q IQ 14 At14) (R IR 15 At15) }
    };
}

/// Count identifiers.
macro_rules! count {
    () => { 0usize };
    ($head:ident $($tail:ident)*) => { 1usize + $crate::macros::count!($($tail)*) };
}

/// Emit a `debug` event with the SQL handed to the connector.
macro_rules! trace_sql {
    ($kind:expr, $sql:expr) => {{
        #[cfg(feature = "tracing")]
        {
            tracing::debug!(target: "typedsql.sql", kind = $kind, sql = %$sql, "executing statement");
        }
        #[cfg(not(feature = "tracing"))]
        {
            let _ = (&$kind, &$sql);
        }
    }};
}

pub(crate) use count;
pub(crate) use for_each_tuple;
pub(crate) use trace_sql;
