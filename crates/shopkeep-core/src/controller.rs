// ── Catalog controller ──
//
// The main entry point for consumers. Owns the query cache, the modal
// state machine, the notice channel, and the debounced search term,
// and routes every mutation through the API client.

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use tokio::sync::{broadcast, watch};
use tracing::{debug, warn};

use shopkeep_api::{ProductClient, ProductRecord, TransportConfig};

use crate::config::CatalogConfig;
use crate::error::CoreError;
use crate::model::{Product, ProductDraft, ProductId};
use crate::notice::Notice;
use crate::query::{QueryCache, QueryKey, QueryState};
use crate::search::{ProductFilter, SearchDebouncer};
use crate::stream::QueryStream;
use crate::view;

const NOTICE_CHANNEL_SIZE: usize = 32;

// ── ModalState ───────────────────────────────────────────────────

/// Modal dialog state observable by consumers.
///
/// At most one modal is open at a time; opening one replaces whatever
/// was open before.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Create,
    Edit(Product),
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// The form draft this state seeds, or `None` when closed.
    pub fn draft(&self) -> Option<ProductDraft> {
        match self {
            Self::Closed => None,
            Self::Create => Some(ProductDraft::blank()),
            Self::Edit(product) => Some(ProductDraft::from_product(product)),
        }
    }
}

// ── Catalog ──────────────────────────────────────────────────────

/// Handle to the catalog data layer.
///
/// Cheaply cloneable via `Arc<CatalogInner>`; clones share the cache,
/// the modal state, and the notice channel.
#[derive(Clone)]
pub struct Catalog {
    inner: Arc<CatalogInner>,
}

struct CatalogInner {
    client: ProductClient,
    cache: QueryCache,
    modal: watch::Sender<ModalState>,
    notice_tx: broadcast::Sender<Notice>,
    search: SearchDebouncer,
}

impl Catalog {
    pub fn new(config: CatalogConfig) -> Result<Self, CoreError> {
        let CatalogConfig {
            base_url,
            timeout,
            search_settle,
        } = config;
        let transport = TransportConfig { timeout };
        let client = ProductClient::new(base_url, &transport).map_err(|e| CoreError::Config {
            message: e.to_string(),
        })?;
        let (modal, _) = watch::channel(ModalState::Closed);
        let (notice_tx, _) = broadcast::channel(NOTICE_CHANNEL_SIZE);
        Ok(Self {
            inner: Arc::new(CatalogInner {
                client,
                cache: QueryCache::new(),
                modal,
                notice_tx,
                search: SearchDebouncer::new(search_settle),
            }),
        })
    }

    /// Direct access to the query cache.
    pub fn cache(&self) -> &QueryCache {
        &self.inner.cache
    }

    // ── Queries ──────────────────────────────────────────────────

    /// Current collection state.
    ///
    /// If the entry is stale a background refresh is spawned; the
    /// stale data (or the loading state) is returned immediately and
    /// the cache transitions once the fetch lands.
    pub fn products(&self) -> QueryState<Vec<Product>> {
        self.spawn_refresh_if_stale(&QueryKey::Products);
        self.inner.cache.products().state()
    }

    /// Current state of one product's detail query.
    pub fn product(&self, id: &ProductId) -> QueryState<Product> {
        self.spawn_refresh_if_stale(&QueryKey::Detail(id.clone()));
        self.inner.cache.detail(id).state()
    }

    /// Subscribe to collection transitions, refreshing if stale.
    pub fn subscribe_products(&self) -> QueryStream<Vec<Product>> {
        self.spawn_refresh_if_stale(&QueryKey::Products);
        QueryStream::new(self.inner.cache.products().subscribe())
    }

    /// Subscribe to one product's detail transitions, refreshing if
    /// stale.
    pub fn subscribe_product(&self, id: &ProductId) -> QueryStream<Product> {
        self.spawn_refresh_if_stale(&QueryKey::Detail(id.clone()));
        QueryStream::new(self.inner.cache.detail(id).subscribe())
    }

    /// Refresh a query unconditionally, completing when the fetch has
    /// landed in the cache.
    pub async fn refetch(&self, key: &QueryKey) {
        self.refresh(key).await;
    }

    fn spawn_refresh_if_stale(&self, key: &QueryKey) {
        let stale = match key {
            QueryKey::Products => self.inner.cache.products().take_stale(),
            QueryKey::Detail(id) => self.inner.cache.detail(id).take_stale(),
        };
        if stale {
            let this = self.clone();
            let key = key.clone();
            tokio::spawn(async move {
                this.refresh(&key).await;
            });
        }
    }

    async fn refresh(&self, key: &QueryKey) {
        match key {
            QueryKey::Products => self.refresh_products().await,
            QueryKey::Detail(id) => self.refresh_detail(id).await,
        }
    }

    async fn refresh_products(&self) {
        let entry = self.inner.cache.products();
        entry.take_stale();
        entry.begin();
        match self.inner.client.list_all().await {
            Ok(records) => {
                let products: Vec<Product> = records.into_iter().map(Product::from).collect();
                debug!(count = products.len(), "product list refreshed");
                entry.resolve(products);
            }
            Err(err) => {
                let err = CoreError::from(err);
                warn!(error = %err, "product list refresh failed");
                entry.reject(err.to_string());
            }
        }
    }

    async fn refresh_detail(&self, id: &ProductId) {
        let entry = self.inner.cache.detail(id);
        entry.take_stale();
        entry.begin();
        match self.inner.client.get_by_id(id.as_str()).await {
            Ok(record) => {
                debug!(%id, "product refreshed");
                entry.resolve(Product::from(record));
            }
            Err(err) => {
                let err = CoreError::from(err);
                warn!(%id, error = %err, "product refresh failed");
                entry.reject(err.to_string());
            }
        }
    }

    // ── Mutations ────────────────────────────────────────────────

    /// Submit the modal form.
    ///
    /// Drafts carrying the placeholder id are finalized with a fresh
    /// id and creation timestamp; edit drafts go through unchanged.
    /// Whatever the server says, the modal closes and the collection
    /// is refetched; the cache itself is only invalidated on success.
    ///
    /// Returns `Err` only for validation failures, before any request
    /// is made. Server-side failures surface as an error notice.
    pub async fn submit(&self, draft: &ProductDraft) -> Result<(), CoreError> {
        draft.validate()?;
        let record = self.finalize(draft);
        match self.inner.client.upsert(&record).await {
            Ok(saved) => {
                debug!(id = %saved.id, "product saved");
                self.notify(Notice::success("Product saved!"));
                self.inner.cache.invalidate(&QueryKey::Products);
            }
            Err(err) => {
                warn!(error = %err, "upsert failed");
                self.notify(Notice::error("Something went wrong"));
            }
        }
        self.close_modal();
        self.refresh_products().await;
        Ok(())
    }

    fn finalize(&self, draft: &ProductDraft) -> ProductRecord {
        let mut record = ProductRecord::from(draft);
        if draft.id.is_placeholder() {
            let count = self.inner.cache.products().state().data_or_default().len();
            record.id = (count + 1).to_string();
            record.created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        }
        record
    }

    /// Delete a product.
    ///
    /// An empty id is a no-op: no request, no notice, no
    /// invalidation. The detail entry for a deleted id is left alone;
    /// only the collection is invalidated.
    pub async fn delete(&self, id: &ProductId) {
        if id.is_empty() {
            debug!("delete skipped: empty id");
            return;
        }
        match self.inner.client.delete_by_id(id.as_str()).await {
            Ok(()) => {
                debug!(%id, "product deleted");
                self.notify(Notice::success("Product deleted!"));
                self.inner.cache.invalidate(&QueryKey::Products);
            }
            Err(err) => {
                warn!(%id, error = %err, "delete failed");
                self.notify(Notice::error("Something went wrong"));
            }
        }
    }

    // ── Modal ────────────────────────────────────────────────────

    pub fn modal(&self) -> ModalState {
        self.inner.modal.borrow().clone()
    }

    pub fn subscribe_modal(&self) -> watch::Receiver<ModalState> {
        self.inner.modal.subscribe()
    }

    pub fn open_create(&self) {
        self.inner.modal.send_replace(ModalState::Create);
    }

    pub fn open_edit(&self, product: Product) {
        self.inner.modal.send_replace(ModalState::Edit(product));
    }

    pub fn close_modal(&self) {
        self.inner.modal.send_replace(ModalState::Closed);
    }

    // ── Notices ──────────────────────────────────────────────────

    /// Subscribe to mutation notices. Only notices sent after the
    /// subscription are received.
    pub fn notices(&self) -> broadcast::Receiver<Notice> {
        self.inner.notice_tx.subscribe()
    }

    fn notify(&self, notice: Notice) {
        // No receivers is fine; notices are advisory.
        let _ = self.inner.notice_tx.send(notice);
    }

    // ── Search ───────────────────────────────────────────────────

    /// Record a search keystroke. The applied term updates after the
    /// configured settle interval.
    pub fn set_search(&self, term: impl Into<String>) {
        self.inner.search.input(term);
    }

    /// The term as last typed.
    pub fn search_term(&self) -> String {
        self.inner.search.raw()
    }

    /// The term currently filtering results.
    pub fn applied_search(&self) -> String {
        self.inner.search.applied()
    }

    /// Watch the applied term for changes.
    pub fn subscribe_search(&self) -> watch::Receiver<String> {
        self.inner.search.subscribe()
    }

    /// The cached collection, newest-first, filtered by the applied
    /// search term. Empty while the collection is still loading.
    pub fn search_results(&self) -> Vec<Arc<Product>> {
        let data = self.inner.cache.products().state().data_or_default();
        let mut list = view::derive_list(&data);
        ProductFilter::from_term(&self.inner.search.applied()).retain(&mut list);
        list
    }
}
