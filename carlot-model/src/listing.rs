//! Catalog entities and the flattened listing view.
//!
//! A listing is one [`Stock`] row plus its dedicated [`Model`] and [`Image`]
//! rows, with non-owning references into the shared [`Manufacturer`] and
//! [`BodyStyle`] reference tables.

use chrono::NaiveDate;

use crate::ids::{BodyStyleId, ImageId, ManufacturerId, ModelId, StockId};

/// Which reference-data table a resolve-or-create call targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReferenceKind {
    Manufacturer,
    BodyStyle,
}

impl std::fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Manufacturer => write!(f, "manufacturer"),
            Self::BodyStyle => write!(f, "bodystyle"),
        }
    }
}

/// Deduplicated manufacturer reference row. Append-only, looked up by exact
/// name, never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Manufacturer {
    pub id: ManufacturerId,
    pub name: String,
}

/// Deduplicated bodystyle reference row. Same lifecycle as [`Manufacturer`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct BodyStyle {
    pub id: BodyStyleId,
    pub name: String,
}

/// Per-listing model attributes. Created fresh for every listing; not
/// deduplicated across listings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Model {
    pub id: ModelId,
    pub name: String,
    pub horsepower: i64,
    pub torque: i64,
    pub eco_rating: i64,
    pub safety_rating: i64,
    pub seats: i64,
}

/// Stored image bytes plus a label derived from the listing
/// (`"<model_name>_<year>"`). Bytes may be zero-length, never null.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Image {
    pub id: ImageId,
    pub bytes: Vec<u8>,
    pub label: String,
}

/// One catalog listing: references into the reference tables plus ownership
/// of its model and image rows.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Stock {
    pub id: StockId,
    pub manufacturer_id: ManufacturerId,
    pub bodystyle_id: BodyStyleId,
    pub model_id: ModelId,
    pub image_id: ImageId,
    pub year: NaiveDate,
    pub price: f64,
    pub distance: i64,
}

/// Raw input for a composite listing write.
///
/// `year` is the submitted 4-digit year string; the store validates it and
/// pins the stored date to January 1st of that year. `image` is the raw
/// upload, absent when no file was submitted.
#[derive(Debug, Clone, Default)]
pub struct NewListing {
    pub manufacturer: String,
    pub bodystyle: String,
    pub model_name: String,
    pub horsepower: i64,
    pub torque: i64,
    pub eco_rating: i64,
    pub safety_rating: i64,
    pub seats: i64,
    pub year: String,
    pub price: f64,
    pub distance: i64,
    pub image: Option<Vec<u8>>,
}

/// Flattened row of the five-way catalog join.
///
/// Carries the image id rather than the bytes; bytes are fetched separately
/// through the image lookup.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct ListingView {
    pub stock_id: StockId,
    pub manufacturer: String,
    pub bodystyle: String,
    pub model_name: String,
    pub horsepower: i64,
    pub torque: i64,
    pub eco_rating: i64,
    pub safety_rating: i64,
    pub seats: i64,
    pub year: NaiveDate,
    pub price: f64,
    pub distance: i64,
    pub image_id: ImageId,
}
