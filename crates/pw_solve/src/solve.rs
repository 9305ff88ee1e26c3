//! Pair enumeration and randomized row construction.
//!
//! Grounded in `original_source/code/solver.cpp`'s `SOLVER` class, with two
//! defects in that source fixed rather than carried over:
//!
//! 1. `if (result = 100)` is an assignment, not a comparison, so the
//!    degenerate-category branch in the original is always taken. Here the
//!    equivalent check is a real `==` (expressed as a match).
//! 2. The odd-arity fallback drew a value index over the whole row
//!    (`rand() % options[i].size()`), which can land on index `0` — the
//!    category name slot — and emit it as if it were a value. The
//!    correction is actually present in the source as a commented-out line
//!    just above the bug (`(rand() % (options.size() - 1)) + 1`); since
//!    [`pw_core::model::Category::values`] never stores the category name
//!    alongside its values, drawing uniformly over `0..values.len()` here
//!    already is that fix.

use std::collections::HashSet;

use pw_core::diagnostic::Diagnostic;
use pw_core::model::{Category, CategoryName, Constraint, Pair, Row, Suite};
use pw_core::rng::RowRng;

/// Enumerate every cross-category (category, value) pair, `i < j` in the
/// order `categories` is given — the canonical pair ordering named by the
/// specification. Mirrors `SOLVER::generatePairs`.
pub fn generate_pairs(categories: &[Category]) -> Vec<Pair> {
    let mut pairs = Vec::new();
    for i in 0..categories.len() {
        for vi in &categories[i].values {
            for j in (i + 1)..categories.len() {
                for vj in &categories[j].values {
                    pairs.push(Pair::new(
                        categories[i].name.clone(),
                        vi.clone(),
                        categories[j].name.clone(),
                        vj.clone(),
                    ));
                }
            }
        }
    }
    pairs
}

/// True iff `row` contains, for every binding in `constraint`, a matching
/// (category, value) pair — i.e. the row is a superset of the forbidden
/// combination, so the row must be rejected.
fn violates_any(row: &Row, constraints: &[Constraint]) -> bool {
    !row.respects(constraints)
}

/// Build one complete row: repeatedly draw a cross-category pair — with
/// high probability from the still-available `pairs`, otherwise from the
/// full `all_pairs` — until at most one category remains unbound, then (for
/// an odd category count) bind the last category to a uniformly random
/// value. Mirrors `SOLVER::generateRow`.
///
/// Indices of entries drawn from `pairs` (not `all_pairs`) that ended up
/// committed to the row are appended to `to_delete`, so the caller can
/// remove them from `pairs` once the row as a whole is accepted.
pub fn generate_row(
    categories: &[Category],
    pairs: &[Pair],
    all_pairs: &[Pair],
    to_delete: &mut Vec<usize>,
    rng: &mut RowRng,
) -> Row {
    let mut row = Row::new();
    let mut remaining: HashSet<CategoryName> = categories.iter().map(|c| c.name.clone()).collect();

    while remaining.len() > 1 {
        let use_remaining = !pairs.is_empty() && rng.prefer_remaining(pairs.len());

        if use_remaining {
            let idx = rng.gen_index(pairs.len()).expect("pairs is non-empty");
            let pair = &pairs[idx];
            if remaining.contains(&pair.cat_i) && remaining.contains(&pair.cat_j) {
                let (b1, b2) = pair.bindings();
                remaining.remove(&b1.0);
                remaining.remove(&b2.0);
                row.push(b1);
                row.push(b2);
                to_delete.push(idx);
            }
        } else {
            let idx = rng.gen_index(all_pairs.len()).expect("all_pairs is non-empty");
            let pair = &all_pairs[idx];
            if remaining.contains(&pair.cat_i) && remaining.contains(&pair.cat_j) {
                let (b1, b2) = pair.bindings();
                remaining.remove(&b1.0);
                remaining.remove(&b2.0);
                row.push(b1);
                row.push(b2);
            }
        }
    }

    if let Some(last) = remaining.into_iter().next() {
        if let Some(category) = categories.iter().find(|c| c.name == last) {
            let idx = rng.gen_index(category.values.len()).expect("category has at least one value");
            row.push((category.name.clone(), category.values[idx].clone()));
        }
    }

    row
}

/// Generate a full suite for `categories` under `constraints`.
///
/// Categories with a single value ("degenerate") are excluded from pair
/// generation and row construction, then appended to every committed row
/// afterward; rows that become constraint violations once those degenerate
/// bindings are added are dropped. If every category is degenerate, no rows
/// are produced at all (there is nothing to pair) and an informational
/// message is emitted — this mirrors the source's behavior exactly rather
/// than synthesizing a single all-degenerate row it never produced.
///
/// Terminates after 1000 *consecutive* rejected rows (the counter resets on
/// every committed row), the reading of the specification's termination
/// rule that actually matches its prose; the original source's counter is
/// never reset, making its rule cumulative instead.
pub fn solve(
    categories: &[Category],
    constraints: &[Constraint],
    rng: &mut RowRng,
    diag: &mut dyn Diagnostic,
) -> Suite {
    let useful: Vec<Category> = categories.iter().filter(|c| c.is_useful()).cloned().collect();
    let degenerate: Vec<&Category> = categories.iter().filter(|c| c.is_degenerate()).collect();

    let mut suite = Suite::new();

    if useful.is_empty() {
        diag.emit("this program does very little if your options file only contains categories with one value");
        return suite;
    }

    let pairs_all = generate_pairs(&useful);
    let mut pairs = pairs_all.clone();

    let mut consecutive_rejections = 0u32;
    while !pairs.is_empty() {
        let mut to_delete = Vec::new();
        let row = generate_row(&useful, &pairs, &pairs_all, &mut to_delete, rng);

        if !violates_any(&row, constraints) {
            suite.push(row);
            to_delete.sort_unstable_by(|a, b| b.cmp(a));
            for idx in to_delete {
                pairs.remove(idx);
            }
            consecutive_rejections = 0;
        } else {
            consecutive_rejections += 1;
        }

        if consecutive_rejections > 1000 {
            break;
        }
    }

    if !degenerate.is_empty() {
        for row in suite.0.iter_mut() {
            for cat in &degenerate {
                row.push((cat.name.clone(), cat.values[0].clone()));
            }
        }
        suite.0.retain(|row| !violates_any(row, constraints));
    }

    suite
}

#[cfg(test)]
mod tests {
    use super::*;
    use pw_core::diagnostic::NullDiagnostic;
    use pw_core::rng::RowRng;

    fn cat(name: &str, values: &[&str]) -> Category {
        Category::new(name, values.iter().map(|v| (*v).into()).collect())
    }

    #[test]
    fn generate_pairs_covers_every_cross_category_combination() {
        let categories = vec![cat("A", &["1", "2"]), cat("B", &["x", "y"])];
        let pairs = generate_pairs(&categories);
        assert_eq!(pairs.len(), 4);
    }

    #[test]
    fn generate_pairs_empty_for_single_category() {
        let categories = vec![cat("A", &["1", "2", "3"])];
        assert!(generate_pairs(&categories).is_empty());
    }

    #[test]
    fn solve_produces_rows_binding_every_category() {
        let categories = vec![cat("A", &["1", "2"]), cat("B", &["x", "y"])];
        let mut rng = RowRng::from_seed(1);
        let mut diag = NullDiagnostic;
        let suite = solve(&categories, &[], &mut rng, &mut diag);
        assert!(!suite.is_empty());
        for row in suite.rows() {
            assert_eq!(row.bindings().len(), 2);
        }
    }

    #[test]
    fn solve_respects_constraints() {
        let categories = vec![cat("A", &["1", "2"]), cat("B", &["x", "y"])];
        let constraints = vec![Constraint(vec![
            (CategoryName::from("A"), "1".into()),
            (CategoryName::from("B"), "x".into()),
        ])];
        let mut rng = RowRng::from_seed(2);
        let mut diag = NullDiagnostic;
        let suite = solve(&categories, &constraints, &mut rng, &mut diag);
        for row in suite.rows() {
            assert!(row.respects(&constraints));
        }
    }

    #[test]
    fn solve_absorbs_degenerate_categories_into_every_row() {
        let categories = vec![cat("A", &["1", "2"]), cat("B", &["x", "y"]), cat("C", &["only"])];
        let mut rng = RowRng::from_seed(3);
        let mut diag = NullDiagnostic;
        let suite = solve(&categories, &[], &mut rng, &mut diag);
        assert!(!suite.is_empty());
        for row in suite.rows() {
            assert!(row.bindings().iter().any(|(c, v)| c.as_str() == "C" && v.as_str() == "only"));
        }
    }

    #[test]
    fn solve_on_all_degenerate_categories_yields_no_rows() {
        let categories = vec![cat("A", &["only"]), cat("B", &["single"])];
        let mut rng = RowRng::from_seed(4);
        let mut diag = NullDiagnostic;
        let suite = solve(&categories, &[], &mut rng, &mut diag);
        assert!(suite.is_empty());
    }

    #[test]
    fn odd_category_count_never_emits_category_name_as_a_value() {
        let categories = vec![cat("A", &["1", "2"]), cat("B", &["x", "y"]), cat("C", &["p", "q", "r"])];
        let mut rng = RowRng::from_seed(5);
        let mut diag = NullDiagnostic;
        let suite = solve(&categories, &[], &mut rng, &mut diag);
        for row in suite.rows() {
            for (cat_name, value) in row.bindings() {
                assert_ne!(value.as_str(), cat_name.as_str());
                let category = categories.iter().find(|c| &c.name == cat_name).unwrap();
                assert!(category.values.iter().any(|v| v == value));
            }
        }
    }
}
