//! Shared data model definitions for the Carlot vehicle catalog.

pub mod ids;
pub mod listing;

// Intentionally curated re-exports for downstream consumers.
pub use ids::{BodyStyleId, ImageId, ManufacturerId, ModelId, StockId};
pub use listing::{
    BodyStyle, Image, ListingView, Manufacturer, Model, NewListing,
    ReferenceKind, Stock,
};
