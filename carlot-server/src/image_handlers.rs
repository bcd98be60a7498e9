use axum::{
    extract::{Path, State},
    http::{HeaderMap, header},
    response::{IntoResponse, Response},
};

use carlot_core::CatalogRepository;
use carlot_model::ImageId;

use crate::{AppState, errors::AppResult};

/// Serve stored image bytes.
/// Path format: /images/{id}
pub async fn serve_image_handler(
    State(state): State<AppState>,
    Path(image_id): Path<i64>,
) -> AppResult<Response> {
    let bytes = state.catalog.get_image_bytes(ImageId(image_id)).await?;

    let mut headers = HeaderMap::new();
    // Uploads carry no recorded format; the catalog only holds JPEGs.
    headers.insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("image/jpeg"),
    );
    headers.insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("public, max-age=31536000"),
    );

    Ok((headers, bytes).into_response())
}
