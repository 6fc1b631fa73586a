// Collection endpoint operations
//
// The four catalog operations: list, fetch-by-id, create-or-replace,
// and delete. Failure of any of these is a single generic fetch error
// to the caller — classification happens upstream.

use tracing::debug;

use crate::client::ProductClient;
use crate::error::Error;
use crate::record::ProductRecord;

impl ProductClient {
    /// List the full collection.
    ///
    /// `GET {base}`
    pub async fn list_all(&self) -> Result<Vec<ProductRecord>, Error> {
        debug!("listing products");
        self.get(self.base_url().clone()).await
    }

    /// Fetch a single record by id.
    ///
    /// `GET {base}/{id}`
    pub async fn get_by_id(&self, id: &str) -> Result<ProductRecord, Error> {
        debug!(id, "fetching product");
        let url = self.item_url(id)?;
        self.get(url).await
    }

    /// Create or fully replace a record.
    ///
    /// `POST {base}` — the server decides between creation and
    /// replacement based on whether the submitted `id` already exists.
    /// Returns the persisted record.
    pub async fn upsert(&self, record: &ProductRecord) -> Result<ProductRecord, Error> {
        debug!(id = %record.id, "upserting product");
        self.post(self.base_url().clone(), record).await
    }

    /// Delete a record by id.
    ///
    /// `DELETE {base}/{id}`. An empty id is a defined guard, not an
    /// error: the call returns immediately without issuing a request.
    pub async fn delete_by_id(&self, id: &str) -> Result<(), Error> {
        if id.is_empty() {
            debug!("delete skipped: empty id");
            return Ok(());
        }
        debug!(id, "deleting product");
        let url = self.item_url(id)?;
        self.delete(url).await
    }
}
