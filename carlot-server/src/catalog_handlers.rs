use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use axum::{
    Json,
    extract::{Multipart, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use carlot_core::CatalogRepository;
use carlot_model::{ListingView, NewListing, StockId};

use crate::{
    AppState,
    api_types::ApiResponse,
    errors::{AppError, AppResult},
};

#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    query: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreatedListing {
    pub stock_id: StockId,
}

/// The joined catalog view, optionally filtered by `?query=` on
/// manufacturer or model name.
pub async fn list_catalog_handler(
    State(state): State<AppState>,
    Query(params): Query<CatalogQuery>,
) -> AppResult<Json<ApiResponse<Vec<ListingView>>>> {
    let views = state.catalog.list_catalog(params.query.as_deref()).await?;
    Ok(Json(ApiResponse::success(views)))
}

/// Create a full listing from a multipart form submission.
pub async fn create_listing_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<ApiResponse<CreatedListing>>)> {
    let listing = parse_listing_form(&mut multipart).await?;
    let stock_id = state.catalog.add_listing(listing).await?;

    info!(%stock_id, "listing created");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(CreatedListing { stock_id })),
    ))
}

async fn parse_listing_form(
    multipart: &mut Multipart,
) -> Result<NewListing, AppError> {
    let mut fields: HashMap<String, String> = HashMap::new();
    let mut image: Option<Vec<u8>> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        AppError::bad_request(format!("malformed multipart form: {e}"))
    })? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if name == "image" {
            let bytes = field.bytes().await.map_err(|e| {
                AppError::bad_request(format!(
                    "failed to read image upload: {e}"
                ))
            })?;
            // An empty file part counts as no upload.
            if !bytes.is_empty() {
                image = Some(bytes.to_vec());
            }
        } else {
            let value = field.text().await.map_err(|e| {
                AppError::bad_request(format!(
                    "failed to read form field `{name}`: {e}"
                ))
            })?;
            fields.insert(name, value);
        }
    }

    Ok(NewListing {
        manufacturer: require(&mut fields, "manufacturer")?,
        bodystyle: require(&mut fields, "bodystyle")?,
        model_name: require(&mut fields, "model_name")?,
        horsepower: parse_number(&mut fields, "horsepower")?,
        torque: parse_number(&mut fields, "torque")?,
        eco_rating: parse_number(&mut fields, "eco_rating")?,
        safety_rating: parse_number(&mut fields, "safety_rating")?,
        seats: parse_number(&mut fields, "seats")?,
        year: require(&mut fields, "year")?,
        price: parse_number(&mut fields, "price")?,
        distance: parse_number(&mut fields, "distance")?,
        image,
    })
}

fn require(
    fields: &mut HashMap<String, String>,
    name: &str,
) -> Result<String, AppError> {
    fields.remove(name).ok_or_else(|| {
        AppError::bad_request(format!("missing form field `{name}`"))
    })
}

fn parse_number<T>(
    fields: &mut HashMap<String, String>,
    name: &str,
) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = require(fields, name)?;
    raw.trim().parse().map_err(|e| {
        AppError::bad_request(format!(
            "form field `{name}` is not a valid number: {e}"
        ))
    })
}
