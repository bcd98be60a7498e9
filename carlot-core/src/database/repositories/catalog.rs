use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use sqlx::sqlite::SqliteConnection;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::debug;

use carlot_model::{
    Image, ImageId, ListingView, NewListing, ReferenceKind, StockId,
};

use crate::database::ports::catalog::CatalogRepository;
use crate::error::{CatalogError, Result};

#[derive(Clone, Debug)]
pub struct SqliteCatalogRepository {
    pool: SqlitePool,
}

impl SqliteCatalogRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

const CATALOG_SELECT: &str = r#"
SELECT
    s.id AS stock_id,
    mf.name AS manufacturer,
    bs.name AS bodystyle,
    md.name AS model_name,
    md.horsepower AS horsepower,
    md.torque AS torque,
    md.eco_rating AS eco_rating,
    md.safety_rating AS safety_rating,
    md.seats AS seats,
    s.year AS year,
    s.price AS price,
    s.distance AS distance,
    s.image_id AS image_id
FROM stocks s
INNER JOIN manufacturers mf ON mf.id = s.manufacturer_id
INNER JOIN bodystyles bs ON bs.id = s.bodystyle_id
INNER JOIN models md ON md.id = s.model_id
INNER JOIN images img ON img.id = s.image_id
"#;

#[async_trait]
impl CatalogRepository for SqliteCatalogRepository {
    async fn resolve_or_create(
        &self,
        kind: ReferenceKind,
        name: &str,
    ) -> Result<i64> {
        let mut tx = self.pool().begin().await?;
        let id = resolve_reference(&mut tx, kind, name).await?;
        tx.commit().await?;
        Ok(id)
    }

    async fn add_listing(&self, listing: NewListing) -> Result<StockId> {
        let year = validate_listing(&listing)?;

        let mut tx = self.pool().begin().await?;

        let manufacturer_id = resolve_reference(
            &mut tx,
            ReferenceKind::Manufacturer,
            &listing.manufacturer,
        )
        .await?;
        let bodystyle_id = resolve_reference(
            &mut tx,
            ReferenceKind::BodyStyle,
            &listing.bodystyle,
        )
        .await?;

        let model_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO models (name, horsepower, torque, eco_rating, safety_rating, seats)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            RETURNING id
            "#,
        )
        .bind(&listing.model_name)
        .bind(listing.horsepower)
        .bind(listing.torque)
        .bind(listing.eco_rating)
        .bind(listing.safety_rating)
        .bind(listing.seats)
        .fetch_one(&mut *tx)
        .await?;

        // An absent upload is stored as a zero-length blob, never NULL.
        let bytes = listing.image.unwrap_or_default();
        let label = format!("{}_{}", listing.model_name, year.year());
        let image_id: i64 = sqlx::query_scalar(
            "INSERT INTO images (bytes, label) VALUES (?1, ?2) RETURNING id",
        )
        .bind(&bytes)
        .bind(&label)
        .fetch_one(&mut *tx)
        .await?;

        let stock_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO stocks (manufacturer_id, bodystyle_id, model_id, image_id, year, price, distance)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            RETURNING id
            "#,
        )
        .bind(manufacturer_id)
        .bind(bodystyle_id)
        .bind(model_id)
        .bind(image_id)
        .bind(year)
        .bind(listing.price)
        .bind(listing.distance)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        debug!(
            stock_id,
            manufacturer = %listing.manufacturer,
            model = %listing.model_name,
            "listing created"
        );
        Ok(StockId(stock_id))
    }

    async fn list_catalog(
        &self,
        query: Option<&str>,
    ) -> Result<Vec<ListingView>> {
        let mut builder = QueryBuilder::<Sqlite>::new(CATALOG_SELECT);

        // instr() rather than LIKE: the filter is a case-sensitive substring
        // match, and SQLite's LIKE is case-insensitive for ASCII.
        if let Some(needle) = query.filter(|q| !q.is_empty()) {
            builder
                .push(" WHERE instr(mf.name, ")
                .push_bind(needle)
                .push(") > 0 OR instr(md.name, ")
                .push_bind(needle)
                .push(") > 0");
        }
        builder.push(" ORDER BY s.id");

        let views = builder
            .build_query_as::<ListingView>()
            .fetch_all(self.pool())
            .await?;
        Ok(views)
    }

    async fn get_image_bytes(&self, image_id: ImageId) -> Result<Vec<u8>> {
        let image: Option<Image> =
            sqlx::query_as("SELECT id, bytes, label FROM images WHERE id = ?1")
                .bind(image_id)
                .fetch_optional(self.pool())
                .await?;

        // A zero-length blob is an absent upload; serve it as missing.
        match image {
            Some(image) if !image.bytes.is_empty() => Ok(image.bytes),
            _ => Err(CatalogError::NotFound(format!(
                "no image bytes stored for id {image_id}"
            ))),
        }
    }
}

/// Find-or-create a reference row inside an open transaction.
///
/// Lookup by exact name first; if absent, insert. A UNIQUE violation on the
/// insert means another writer won the race between lookup and insert, so
/// the existing row is re-fetched instead of surfacing the violation.
async fn resolve_reference(
    conn: &mut SqliteConnection,
    kind: ReferenceKind,
    name: &str,
) -> Result<i64> {
    if name.trim().is_empty() {
        return Err(CatalogError::Validation(format!(
            "{kind} name must not be empty"
        )));
    }

    let table = reference_table(kind);

    let existing: Option<i64> =
        sqlx::query_scalar(&format!("SELECT id FROM {table} WHERE name = ?1"))
            .bind(name)
            .fetch_optional(&mut *conn)
            .await?;
    if let Some(id) = existing {
        return Ok(id);
    }

    let inserted: std::result::Result<i64, sqlx::Error> = sqlx::query_scalar(
        &format!("INSERT INTO {table} (name) VALUES (?1) RETURNING id"),
    )
    .bind(name)
    .fetch_one(&mut *conn)
    .await;

    match inserted {
        Ok(id) => {
            debug!(%kind, name, id, "reference row created");
            Ok(id)
        }
        Err(err) if is_unique_violation(&err) => {
            let id: i64 = sqlx::query_scalar(&format!(
                "SELECT id FROM {table} WHERE name = ?1"
            ))
            .bind(name)
            .fetch_one(&mut *conn)
            .await?;
            debug!(%kind, name, id, "lost insert race, reusing existing row");
            Ok(id)
        }
        Err(err) => Err(err.into()),
    }
}

fn reference_table(kind: ReferenceKind) -> &'static str {
    match kind {
        ReferenceKind::Manufacturer => "manufacturers",
        ReferenceKind::BodyStyle => "bodystyles",
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db)
            if matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation)
    )
}

/// Check every scalar field of a listing and parse the 4-digit year into the
/// stored date (January 1st of that year).
fn validate_listing(listing: &NewListing) -> Result<NaiveDate> {
    for (field, value) in [
        ("manufacturer", &listing.manufacturer),
        ("bodystyle", &listing.bodystyle),
        ("model name", &listing.model_name),
    ] {
        if value.trim().is_empty() {
            return Err(CatalogError::Validation(format!(
                "{field} must not be empty"
            )));
        }
    }

    for (field, value) in [
        ("horsepower", listing.horsepower),
        ("torque", listing.torque),
        ("distance", listing.distance),
    ] {
        if value < 0 {
            return Err(CatalogError::Validation(format!(
                "{field} must not be negative, got {value}"
            )));
        }
    }

    if listing.seats < 1 {
        return Err(CatalogError::Validation(format!(
            "seats must be at least 1, got {}",
            listing.seats
        )));
    }
    if listing.price < 0.0 {
        return Err(CatalogError::Validation(format!(
            "price must not be negative, got {}",
            listing.price
        )));
    }

    parse_listing_year(&listing.year)
}

fn parse_listing_year(raw: &str) -> Result<NaiveDate> {
    if raw.len() != 4 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CatalogError::Validation(format!(
            "year must be a 4-digit year, got `{raw}`"
        )));
    }
    let year: i32 = raw.parse().map_err(|_| {
        CatalogError::Validation(format!("year `{raw}` is out of range"))
    })?;
    NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(|| {
        CatalogError::Validation(format!("year `{raw}` is out of range"))
    })
}
