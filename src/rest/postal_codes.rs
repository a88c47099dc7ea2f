use crate::form::listing::normalize_postal_code;
use crate::rest::error::RestApiError;
use crate::rest::error::RestResult as Res;
use crate::service::postal::PostalLookup;
use crate::Error;
use actix_web::get;
use actix_web::web::{Data, Json, Path};
use serde::Deserialize;
use serde::Serialize;

#[derive(Serialize, Deserialize)]
pub struct GetItem {
    pub postal_code: String,
    pub address: String,
}

#[get("/{code}")]
pub async fn get(code: Path<String>, lookup: Data<PostalLookup>) -> Res<GetItem> {
    let code = code.into_inner();
    let address = lookup.address(&code).await.map_err(|e| match e {
        Error::InvalidInput(message) => RestApiError::invalid_input(message),
        e => RestApiError::upstream(e.to_string()),
    })?;
    match address {
        Some(address) => Ok(Json(GetItem {
            postal_code: normalize_postal_code(&code).unwrap_or(code),
            address,
        })),
        None => Err(RestApiError::not_found(format!(
            "No address found for postal code {code}"
        ))),
    }
}
