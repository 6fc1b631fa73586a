// ── Search filtering and debounce ──

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::trace;

use crate::model::Product;

/// Predicate over products, applied to the derived list.
pub enum ProductFilter {
    /// Matches everything.
    All,
    /// Case-insensitive substring match over name, description and
    /// materials.
    Text(String),
    /// Arbitrary predicate.
    Custom(Box<dyn Fn(&Product) -> bool + Send + Sync>),
}

impl ProductFilter {
    /// Build a filter from a raw search term. A term that is empty
    /// after trimming matches everything.
    pub fn from_term(term: &str) -> Self {
        let trimmed = term.trim();
        if trimmed.is_empty() {
            Self::All
        } else {
            Self::Text(trimmed.to_lowercase())
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Text(needle) => {
                product.name.to_lowercase().contains(needle)
                    || product.description.to_lowercase().contains(needle)
                    || product.materials.to_lowercase().contains(needle)
            }
            Self::Custom(pred) => pred(product),
        }
    }

    /// Drop every product the filter rejects, preserving order.
    pub fn retain(&self, products: &mut Vec<Arc<Product>>) {
        if matches!(self, Self::All) {
            return;
        }
        products.retain(|p| self.matches(p));
    }
}

impl std::fmt::Debug for ProductFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Text(t) => f.debug_tuple("Text").field(t).finish(),
            Self::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// Debounces raw search input into an applied search term.
///
/// Every call to [`input`](Self::input) publishes the raw term
/// immediately and arms a settle timer; the applied term only updates
/// once the timer elapses without further input. In-flight timers are
/// cancelled by newer input.
pub struct SearchDebouncer {
    raw: watch::Sender<String>,
    applied: Arc<watch::Sender<String>>,
    settle: Duration,
    pending: Mutex<Option<CancellationToken>>,
}

impl SearchDebouncer {
    pub fn new(settle: Duration) -> Self {
        let (raw, _) = watch::channel(String::new());
        let (applied, _) = watch::channel(String::new());
        Self {
            raw,
            applied: Arc::new(applied),
            settle,
            pending: Mutex::new(None),
        }
    }

    /// Record a keystroke. The applied term updates after the settle
    /// interval elapses with no further input.
    ///
    /// Must be called from within a tokio runtime.
    pub fn input(&self, term: impl Into<String>) {
        let term = term.into();
        self.raw.send_replace(term.clone());

        let token = CancellationToken::new();
        let previous = {
            let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
            pending.replace(token.clone())
        };
        if let Some(prev) = previous {
            prev.cancel();
        }

        let applied = Arc::clone(&self.applied);
        let settle = self.settle;
        tokio::spawn(async move {
            tokio::select! {
                biased;
                () = token.cancelled() => {
                    trace!(%term, "search input superseded");
                }
                () = tokio::time::sleep(settle) => {
                    applied.send_replace(term);
                }
            }
        });
    }

    /// The term as last typed, with no debounce applied.
    pub fn raw(&self) -> String {
        self.raw.borrow().clone()
    }

    /// The term currently in effect.
    pub fn applied(&self) -> String {
        self.applied.borrow().clone()
    }

    /// Watch the applied term for changes.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.applied.subscribe()
    }
}

impl std::fmt::Debug for SearchDebouncer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchDebouncer")
            .field("settle", &self.settle)
            .field("raw", &*self.raw.borrow())
            .field("applied", &*self.applied.borrow())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(name: &str, description: &str, materials: &str) -> Product {
        Product {
            name: name.to_owned(),
            description: description.to_owned(),
            materials: materials.to_owned(),
            ..Product::default()
        }
    }

    #[test]
    fn blank_term_matches_everything() {
        let filter = ProductFilter::from_term("   ");
        assert!(matches!(filter, ProductFilter::All));
        assert!(filter.matches(&product("Mug", "", "")));
    }

    #[test]
    fn text_filter_is_case_insensitive_across_fields() {
        let filter = ProductFilter::from_term("CoTTon");
        assert!(filter.matches(&product("Tote bag", "", "Cotton, Canvas")));
        assert!(filter.matches(&product("Cotton scarf", "", "")));
        assert!(filter.matches(&product("Scarf", "100% cotton weave", "")));
        assert!(!filter.matches(&product("Mug", "Ceramic", "Clay")));
    }

    #[test]
    fn retain_preserves_order() {
        let filter = ProductFilter::from_term("wool");
        let mut products = vec![
            Arc::new(product("Wool hat", "", "")),
            Arc::new(product("Mug", "", "")),
            Arc::new(product("Scarf", "warm wool", "")),
        ];
        filter.retain(&mut products);
        let names: Vec<_> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Wool hat", "Scarf"]);
    }

    #[tokio::test(start_paused = true)]
    async fn applied_term_lags_by_settle_interval() {
        let debouncer = SearchDebouncer::new(Duration::from_millis(300));
        debouncer.input("cotton");
        assert_eq!(debouncer.raw(), "cotton");
        assert_eq!(debouncer.applied(), "");

        // Let the settle timer arm before advancing the clock.
        tokio::task::yield_now().await;
        tokio::time::advance(Duration::from_millis(299)).await;
        tokio::task::yield_now().await;
        assert_eq!(debouncer.applied(), "");

        tokio::time::advance(Duration::from_millis(2)).await;
        tokio::task::yield_now().await;
        assert_eq!(debouncer.applied(), "cotton");
    }

    #[tokio::test(start_paused = true)]
    async fn newer_input_cancels_older_timer() {
        let debouncer = SearchDebouncer::new(Duration::from_millis(300));
        debouncer.input("co");
        tokio::task::yield_now().await;
        tokio::time::advance(Duration::from_millis(200)).await;
        tokio::task::yield_now().await;
        debouncer.input("cotton");
        tokio::task::yield_now().await;

        // The first timer would have fired here; it must not.
        tokio::time::advance(Duration::from_millis(150)).await;
        tokio::task::yield_now().await;
        assert_eq!(debouncer.applied(), "");

        tokio::time::advance(Duration::from_millis(200)).await;
        tokio::task::yield_now().await;
        assert_eq!(debouncer.applied(), "cotton");
    }
}
