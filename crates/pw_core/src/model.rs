//! Typed domain model: Category, Constraint, Row, Suite, Pair.
//!
//! These are built from the raw tables held by [`crate::problem::Problem`]
//! once they have passed [`pw_solve`](../pw_solve/index.html)'s structural
//! checks. Newtype wrappers (`CategoryName`, `Value`) follow the teacher's
//! `vm_core::tokens` convention of giving domain concepts their own types
//! instead of passing bare `String`s around, without imposing a charset
//! restriction the specification never asks for.

use std::fmt;

/// The name of a category (parameter), e.g. `"browser"`.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct CategoryName(String);

impl CategoryName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for CategoryName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CategoryName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// One allowed label for a category, e.g. `"firefox"`.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Value(String);

impl Value {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A (category, value) assignment.
pub type Binding = (CategoryName, Value);

/// A named parameter with its ordered, non-empty set of allowed values.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Category {
    pub name: CategoryName,
    pub values: Vec<Value>,
}

impl Category {
    pub fn new(name: impl Into<CategoryName>, values: Vec<Value>) -> Self {
        Self { name: name.into(), values }
    }

    /// A category with exactly one value.
    pub fn is_degenerate(&self) -> bool {
        self.values.len() == 1
    }

    /// A category with two or more values.
    pub fn is_useful(&self) -> bool {
        self.values.len() >= 2
    }

    /// Build a `Category` from a raw options row: `row[0]` is the name,
    /// `row[1..]` are the values. Panics are impossible; an empty row
    /// yields an empty name and no values (structurally invalid, caught by
    /// the input validator before this is ever called).
    pub fn from_raw_row(row: &[String]) -> Self {
        let name = row.first().cloned().unwrap_or_default();
        let values = row.iter().skip(1).cloned().map(Value::from).collect();
        Self { name: CategoryName::from(name), values }
    }
}

/// A forbidden combination: an ordered sequence of bindings. Every
/// category referenced must exist in Options and every value must belong
/// to that category's allowed set — enforced by the input validator, not
/// by this type.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Constraint(pub Vec<Binding>);

impl Constraint {
    /// Build a `Constraint` from a raw constraints row: alternating
    /// category/value tokens. A row with odd length silently drops its
    /// final token; the input validator rejects odd-length rows before
    /// this conversion is used for anything load-bearing.
    pub fn from_raw_row(row: &[String]) -> Self {
        let bindings = row
            .chunks_exact(2)
            .map(|pair| (CategoryName::from(pair[0].clone()), Value::from(pair[1].clone())))
            .collect();
        Constraint(bindings)
    }

    /// True iff every binding of `self` is present in `row`'s bindings
    /// (set-containment, per the specification's "superset" test). A
    /// constraint that repeats a category is a multiset collapsed to a
    /// set by this check — idempotent, not rejected.
    pub fn is_subset_of(&self, row_bindings: &[Binding]) -> bool {
        self.0.iter().all(|(c, v)| {
            row_bindings.iter().any(|(rc, rv)| rc == c && rv == v)
        })
    }
}

/// An ordered sequence of (category, value) bindings under test. A
/// well-formed row binds each category at most once; a complete row binds
/// every useful category exactly once (and, after degenerate absorption,
/// every category exactly once).
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Row(pub Vec<Binding>);

impl Row {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, binding: Binding) {
        self.0.push(binding);
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.0
    }

    /// True iff no constraint in `constraints` is a subset of this row.
    pub fn respects(&self, constraints: &[Constraint]) -> bool {
        !constraints.iter().any(|c| c.is_subset_of(&self.0))
    }
}

/// An ordered sequence of rows.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Suite(pub Vec<Row>);

impl Suite {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn rows(&self) -> &[Row] {
        &self.0
    }

    pub fn push(&mut self, row: Row) {
        self.0.push(row);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// An unordered combination of two distinct categories together with a
/// value chosen from each. Represented as an ordered 4-tuple with `i < j`
/// in Options order — the canonical ordering named by the specification.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Pair {
    pub cat_i: CategoryName,
    pub val_i: Value,
    pub cat_j: CategoryName,
    pub val_j: Value,
}

impl Pair {
    pub fn new(cat_i: CategoryName, val_i: Value, cat_j: CategoryName, val_j: Value) -> Self {
        Self { cat_i, val_i, cat_j, val_j }
    }

    /// The two bindings this pair asserts.
    pub fn bindings(&self) -> (Binding, Binding) {
        (
            (self.cat_i.clone(), self.val_i.clone()),
            (self.cat_j.clone(), self.val_j.clone()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_degenerate_vs_useful() {
        let c = Category::new("A", vec![Value::from("1")]);
        assert!(c.is_degenerate());
        assert!(!c.is_useful());

        let u = Category::new("B", vec![Value::from("x"), Value::from("y")]);
        assert!(!u.is_degenerate());
        assert!(u.is_useful());
    }

    #[test]
    fn constraint_subset_check() {
        let row: Vec<Binding> = vec![
            (CategoryName::from("A"), Value::from("1")),
            (CategoryName::from("B"), Value::from("x")),
        ];
        let c = Constraint(vec![(CategoryName::from("A"), Value::from("1"))]);
        assert!(c.is_subset_of(&row));

        let c2 = Constraint(vec![(CategoryName::from("A"), Value::from("2"))]);
        assert!(!c2.is_subset_of(&row));
    }

    #[test]
    fn constraint_repeated_category_is_idempotent() {
        // A constraint that repeats a category collapses to the same set;
        // it should not require both occurrences to independently match
        // distinct bindings (there is only one binding for "A" in a row).
        let row: Vec<Binding> = vec![(CategoryName::from("A"), Value::from("1"))];
        let c = Constraint(vec![
            (CategoryName::from("A"), Value::from("1")),
            (CategoryName::from("A"), Value::from("1")),
        ]);
        assert!(c.is_subset_of(&row));
    }

    #[test]
    fn row_respects_constraints() {
        let mut row = Row::new();
        row.push((CategoryName::from("A"), Value::from("1")));
        row.push((CategoryName::from("B"), Value::from("x")));

        let blocking = Constraint(vec![
            (CategoryName::from("A"), Value::from("1")),
            (CategoryName::from("B"), Value::from("x")),
        ]);
        assert!(!row.respects(&[blocking]));

        let harmless = Constraint(vec![(CategoryName::from("A"), Value::from("2"))]);
        assert!(row.respects(&[harmless]));
    }

    #[test]
    fn category_from_raw_row() {
        let row = vec!["A".to_string(), "1".to_string(), "2".to_string()];
        let c = Category::from_raw_row(&row);
        assert_eq!(c.name.as_str(), "A");
        assert_eq!(c.values.len(), 2);
    }
}
