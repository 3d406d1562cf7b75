use serde_json::Value;

/// Source of random indices. Injected so tests can substitute a
/// deterministic picker.
pub trait RandomSource: Send + Sync {
    /// Return an index in `[0, len)`. Callers guarantee `len > 0`.
    fn pick(&self, len: usize) -> usize;
}

/// Production random source with no reproducibility guarantee.
pub struct FastrandSource;

impl RandomSource for FastrandSource {
    fn pick(&self, len: usize) -> usize {
        fastrand::usize(..len)
    }
}

/// One chosen element plus the rest of the list, in original relative order.
#[derive(Debug)]
pub struct SelectionResult {
    pub chosen: Value,
    pub residual: Vec<Value>,
}

/// Pick one element uniformly at random and remove it. Only defined for
/// non-empty lists; the orchestrator short-circuits the empty case before
/// calling this.
pub fn select_and_remove(mut list: Vec<Value>, source: &dyn RandomSource) -> SelectionResult {
    debug_assert!(!list.is_empty());

    let index = source.pick(list.len());
    let chosen = list.remove(index);

    SelectionResult {
        chosen,
        residual: list,
    }
}
