use async_trait::async_trait;
use carlot_model::{ImageId, ListingView, NewListing, ReferenceKind, StockId};

use crate::error::Result;

/// Port for the catalog store operations consumed by the presentation shell.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Return the id of the reference row with exactly `name`, inserting it
    /// first if absent. After a successful call exactly one row with that
    /// name exists.
    async fn resolve_or_create(
        &self,
        kind: ReferenceKind,
        name: &str,
    ) -> Result<i64>;

    /// Create one full listing (model + image + stock, resolving both
    /// reference rows) in a single transaction and return the new stock id.
    async fn add_listing(&self, listing: NewListing) -> Result<StockId>;

    /// The joined catalog view, optionally filtered by a case-sensitive
    /// substring match on manufacturer or model name.
    async fn list_catalog(
        &self,
        query: Option<&str>,
    ) -> Result<Vec<ListingView>>;

    /// Raw stored bytes for `image_id`. Zero-length bytes are reported as
    /// absent, matching the serving behavior callers rely on.
    async fn get_image_bytes(&self, image_id: ImageId) -> Result<Vec<u8>>;
}
