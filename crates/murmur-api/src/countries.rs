use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use axum_extra::extract::{Query, WithRejection};

use murmur_core::validate;
use murmur_types::api::CountryQuery;

use crate::auth::{AppState, blocking};
use crate::error::ApiError;

/// GET /countries lists every country, or only those in the requested regions.
pub async fn list_countries(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<CountryQuery>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    // `?region=` with an empty value means no filter
    let regions: Vec<String> = query.region.into_iter().filter(|r| !r.is_empty()).collect();
    if let Some(bad) = regions.iter().find(|r| !validate::region(r)) {
        return Err(ApiError::InvalidInput(format!("unknown region {bad}")));
    }

    let countries = blocking(&state, move |db| Ok(db.list_countries(&regions)?)).await?;
    Ok(Json(countries))
}

pub async fn get_country(
    State(state): State<AppState>,
    Path(alpha2): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    if !validate::country_code(&alpha2) {
        return Err(ApiError::InvalidInput("invalid alpha2".to_string()));
    }

    let country = blocking(&state, move |db| Ok(db.get_country(&alpha2)?))
        .await?
        .ok_or(ApiError::NotFound("Country with this code was not found."))?;
    Ok(Json(country))
}
