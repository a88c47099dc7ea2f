use super::postal::PostalLookup;
use crate::db;
use crate::form::{ListingRequest, ListingRequestForm, ValidationErrors};
use crate::{Error, Result};
use deadpool_sqlite::Pool;
use serde::Deserialize;
use serde::Serialize;
use std::time::Duration;
use tracing::{error, info, warn};
use uuid::Uuid;

const TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct Submission {
    pub id: String,
    pub address: String,
    pub forwarded: bool,
}

#[derive(Debug)]
pub enum SubmitError {
    Invalid(ValidationErrors),
    Forward { id: String, message: String },
    Internal(Error),
}

impl From<Error> for SubmitError {
    fn from(error: Error) -> Self {
        SubmitError::Internal(error)
    }
}

/// Forwards listing requests to the external intake endpoint.
#[derive(Clone)]
pub struct ListingIntake {
    client: reqwest::Client,
    url: String,
    postal: PostalLookup,
}

impl ListingIntake {
    pub fn new(url: impl Into<String>, postal: PostalLookup) -> Result<Self> {
        Ok(ListingIntake {
            client: reqwest::Client::builder().timeout(TIMEOUT).build()?,
            url: url.into(),
            postal,
        })
    }

    /// Validates the form, fills a missing address from the postal code,
    /// records the request and forwards it. The record keeps the forwarding
    /// outcome either way.
    pub async fn submit(
        &self,
        form: &ListingRequestForm,
        pool: &Pool,
    ) -> Result<Submission, SubmitError> {
        let mut request = form.validate().map_err(SubmitError::Invalid)?;
        if request.address.is_empty() {
            if let Some(address) = self.postal.address(&request.postal_code).await? {
                request.address = address;
            }
        }
        let id = Uuid::new_v4().to_string();
        db::listing_request::queries::insert(id.clone(), request.clone(), pool).await?;
        let forward_error = self.forward(&request).await.err().map(|e| e.to_string());
        let record =
            db::listing_request::queries::set_forward_result(id.clone(), forward_error.clone(), pool)
                .await?;
        match forward_error {
            None => {
                info!(id, name = request.name, "Forwarded listing request");
                Ok(Submission {
                    id,
                    address: record.fields.address,
                    forwarded: record.forwarded,
                })
            }
            Some(message) => {
                error!(id, error = message, "Failed to forward listing request");
                Err(SubmitError::Forward { id, message })
            }
        }
    }

    async fn forward(&self, request: &ListingRequest) -> Result<()> {
        let res = self.client.post(&self.url).json(request).send().await?;
        if !res.status().is_success() {
            warn!(status = res.status().as_u16(), "Listing intake rejected request");
            return Err(Error::Upstream(format!(
                "Listing intake returned {}",
                res.status()
            )));
        }
        Ok(())
    }
}
