// ── Single cached query ──
//
// One `QueryEntry` per logical query. State is broadcast through a
// `watch` channel; staleness is an atomic flag claimed by whoever kicks
// off the background refetch.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::watch;

/// Lifecycle status of a cached query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum QueryStatus {
    Loading,
    Success,
    Error,
}

/// Point-in-time state of a cached query.
///
/// `data` survives refetches: a query re-entering `Loading` (or failing)
/// keeps the last successful value so consumers can keep rendering it
/// (stale-while-revalidate).
#[derive(Debug)]
pub struct QueryState<T> {
    pub status: QueryStatus,
    pub data: Option<Arc<T>>,
    pub error: Option<String>,
}

impl<T> QueryState<T> {
    fn initial() -> Self {
        Self {
            status: QueryStatus::Loading,
            data: None,
            error: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == QueryStatus::Loading
    }

    pub fn has_error(&self) -> bool {
        self.status == QueryStatus::Error
    }

    /// The cached value, or the type's default when nothing has been
    /// fetched yet. Consumers never have to handle a missing value.
    pub fn data_or_default(&self) -> Arc<T>
    where
        T: Default,
    {
        self.data
            .clone()
            .unwrap_or_else(|| Arc::new(T::default()))
    }
}

// Manual impl: `data` is behind an `Arc`, so `T: Clone` is not required.
impl<T> Clone for QueryState<T> {
    fn clone(&self) -> Self {
        Self {
            status: self.status,
            data: self.data.clone(),
            error: self.error.clone(),
        }
    }
}

/// A single cached query with reactive state broadcast.
///
/// Entries start `Loading` and stale, so the first snapshot access
/// triggers the initial fetch. Each `begin()`/`resolve()`-or-`reject()`
/// pair is one fetch; completions are applied in arrival order
/// (last-writer-wins — there is no in-flight cancellation).
pub struct QueryEntry<T> {
    state: watch::Sender<QueryState<T>>,
    stale: AtomicBool,
}

impl<T: Send + Sync + 'static> QueryEntry<T> {
    pub(crate) fn new() -> Self {
        let (state, _) = watch::channel(QueryState::initial());
        Self {
            state,
            stale: AtomicBool::new(true),
        }
    }

    /// Current state (cheap clone, data behind `Arc`).
    pub fn state(&self) -> QueryState<T> {
        self.state.borrow().clone()
    }

    /// Subscribe to state changes via a `watch::Receiver`.
    pub fn subscribe(&self) -> watch::Receiver<QueryState<T>> {
        self.state.subscribe()
    }

    /// Enter `Loading`, keeping any previously cached data.
    pub(crate) fn begin(&self) {
        self.state.send_modify(|s| {
            s.status = QueryStatus::Loading;
            s.error = None;
        });
    }

    /// Complete a fetch successfully.
    pub(crate) fn resolve(&self, value: T) {
        self.state.send_modify(|s| {
            s.status = QueryStatus::Success;
            s.data = Some(Arc::new(value));
            s.error = None;
        });
    }

    /// Complete a fetch with an error, keeping any previously cached data.
    pub(crate) fn reject(&self, message: String) {
        self.state.send_modify(|s| {
            s.status = QueryStatus::Error;
            s.error = Some(message);
        });
    }

    /// Mark the cached data stale; the next access triggers a refetch.
    pub fn invalidate(&self) {
        self.stale.store(true, Ordering::Release);
    }

    /// Atomically claim the stale flag. Returns `true` exactly once per
    /// invalidation, so concurrent accessors spawn a single refetch.
    pub(crate) fn take_stale(&self) -> bool {
        self.stale.swap(false, Ordering::AcqRel)
    }

    pub fn is_stale(&self) -> bool {
        self.stale.load(Ordering::Acquire)
    }
}
