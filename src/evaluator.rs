use crate::ast::Query;
use crate::store::{ResultSet, StateStore, StoreError};

/// Evaluates normalized queries against a record store.
///
/// One lookup is issued per clause, in clause order, and AND semantics are
/// realized by intersecting the result sets on record key. The store handle
/// is injected once at construction and reused for every query.
pub struct Evaluator<S> {
    store: S,
}

impl<S: StateStore> Evaluator<S> {
    pub fn new(store: S) -> Self {
        Evaluator { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Evaluate a query to the set of records satisfying every clause.
    ///
    /// A lookup failure aborts the whole evaluation; partial results are
    /// discarded, never returned. An empty result set is a normal outcome,
    /// distinct from failure.
    pub fn evaluate(&self, query: &Query) -> Result<ResultSet, StoreError> {
        let mut sets = Vec::with_capacity(query.len());
        for clause in query {
            sets.push(self.store.find(clause.field, clause.op, &clause.value)?);
        }

        let Some((first, rest)) = sets.split_first() else {
            return Ok(ResultSet::new());
        };
        if rest.is_empty() {
            return Ok(first.clone());
        }

        // Intersect on record key, then project the surviving keys back to
        // the first set's records.
        let mut common: Vec<&String> = first
            .keys()
            .filter(|key| rest.iter().all(|set| set.contains_key(*key)))
            .collect();
        common.sort();

        Ok(common
            .into_iter()
            .map(|key| (key.clone(), first[key].clone()))
            .collect())
    }
}
