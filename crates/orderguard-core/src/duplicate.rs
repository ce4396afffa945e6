use std::collections::HashSet;

/// Order id reported as already processed by [`KnownDuplicates::default`].
pub const SENTINEL_DUPLICATE_ORDER_ID: &str = "DUPLICATE-ORDER-123";

/// Decides whether an order id has already been processed.
///
/// Storage-backed implementations belong to the caller; the engine only asks.
pub trait DuplicateCheck: Send + Sync {
    /// Returns true when `order_id` was seen before.
    fn is_duplicate(&self, order_id: &str) -> bool;
}

impl<F> DuplicateCheck for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_duplicate(&self, order_id: &str) -> bool {
        self(order_id)
    }
}

/// Fixed set of already-processed order ids.
#[derive(Debug, Clone)]
pub struct KnownDuplicates {
    ids: HashSet<String>,
}

impl KnownDuplicates {
    /// Builds the set from the given ids.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of known ids.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True when the set is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl Default for KnownDuplicates {
    fn default() -> Self {
        Self::new([SENTINEL_DUPLICATE_ORDER_ID])
    }
}

impl DuplicateCheck for KnownDuplicates {
    fn is_duplicate(&self, order_id: &str) -> bool {
        self.ids.contains(order_id)
    }
}

/// Check that never reports a duplicate.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverDuplicate;

impl DuplicateCheck for NeverDuplicate {
    fn is_duplicate(&self, _order_id: &str) -> bool {
        false
    }
}
