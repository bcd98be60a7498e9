//! Strongly typed surrogate identifiers.
//!
//! Every id wraps the `i64` rowid the store assigns on insert. Ids carry no
//! business meaning and are never minted outside the store.

macro_rules! store_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize)
        )]
        #[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
        #[cfg_attr(feature = "sqlx", sqlx(transparent))]
        pub struct $name(pub i64);

        impl $name {
            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

store_id!(
    /// Identifier of a manufacturer reference row.
    ManufacturerId
);
store_id!(
    /// Identifier of a bodystyle reference row.
    BodyStyleId
);
store_id!(
    /// Identifier of a model row. Models are listing-private, one per stock.
    ModelId
);
store_id!(
    /// Identifier of an image row. Images are listing-private, one per stock.
    ImageId
);
store_id!(
    /// Identifier of a stock row, the listing itself.
    StockId
);
