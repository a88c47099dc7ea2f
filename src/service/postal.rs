use crate::form::listing::normalize_postal_code;
use crate::{Error, Result};
use serde::Deserialize;
use std::time::Duration;
use tracing::{error, info};

const TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Deserialize)]
struct Response {
    results: Option<Vec<AddressResult>>,
}

#[derive(Deserialize)]
struct AddressResult {
    #[serde(default)]
    address1: String,
    #[serde(default)]
    address2: String,
    #[serde(default)]
    address3: String,
}

/// Postal code to address lookup backed by a zipcloud compatible API.
#[derive(Clone)]
pub struct PostalLookup {
    client: reqwest::Client,
    url: String,
}

impl PostalLookup {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        Ok(PostalLookup {
            client: reqwest::Client::builder().timeout(TIMEOUT).build()?,
            url: url.into(),
        })
    }

    /// Prefecture, city and town of the first match. Lookup failures are
    /// logged and reported as no match.
    pub async fn address(&self, postal_code: &str) -> Result<Option<String>> {
        let postal_code = normalize_postal_code(postal_code).ok_or_else(|| {
            Error::InvalidInput(format!("Invalid postal code: {postal_code}"))
        })?;
        match self.query(&postal_code).await {
            Ok(address) => {
                info!(postal_code, found = address.is_some(), "Looked up postal code");
                Ok(address)
            }
            Err(e) => {
                error!(postal_code, error = %e, "Postal code lookup failed");
                Ok(None)
            }
        }
    }

    async fn query(&self, postal_code: &str) -> Result<Option<String>> {
        let res = self
            .client
            .get(&self.url)
            .query(&[("zipcode", postal_code)])
            .send()
            .await?;
        if !res.status().is_success() {
            return Err(Error::Upstream(format!(
                "Postal lookup returned {}",
                res.status()
            )));
        }
        let res: Response = res.json().await?;
        Ok(res
            .results
            .unwrap_or_default()
            .into_iter()
            .next()
            .map(|it| format!("{}{}{}", it.address1, it.address2, it.address3)))
    }
}

#[cfg(test)]
pub mod test {
    use super::PostalLookup;
    use crate::{Error, Result};
    use actix_web::web::{Json, Query};
    use actix_web::{test, web, App, HttpServer};
    use serde_json::{json, Value};
    use std::collections::HashMap;

    /// Knows a single postal code, 0294102.
    pub fn mock_lookup() -> Result<String> {
        let server = HttpServer::new(|| {
            App::new().route(
                "/api/search",
                web::get().to(|args: Query<HashMap<String, String>>| async move {
                    let res: Value = match args.get("zipcode").map(String::as_str) {
                        Some("0294102") => json!({
                            "status": 200,
                            "results": [{
                                "address1": "岩手県",
                                "address2": "西磐井郡平泉町",
                                "address3": "平泉"
                            }]
                        }),
                        _ => json!({"status": 200, "results": null}),
                    };
                    Json(res)
                }),
            )
        })
        .workers(1)
        .bind(("127.0.0.1", 0))?;
        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());
        Ok(format!("http://{addr}/api/search"))
    }

    #[test]
    async fn address() -> Result<()> {
        let lookup = PostalLookup::new(mock_lookup()?)?;
        assert_eq!(
            Some("岩手県西磐井郡平泉町平泉".to_string()),
            lookup.address("029-4102").await?
        );
        assert_eq!(None, lookup.address("1000001").await?);
        Ok(())
    }

    #[test]
    async fn invalid_postal_code() -> Result<()> {
        let lookup = PostalLookup::new("http://127.0.0.1:9/api/search")?;
        assert!(matches!(
            lookup.address("12").await,
            Err(Error::InvalidInput(_))
        ));
        Ok(())
    }

    #[test]
    async fn unreachable_service() -> Result<()> {
        let lookup = PostalLookup::new("http://127.0.0.1:9/api/search")?;
        assert_eq!(None, lookup.address("0294102").await?);
        Ok(())
    }
}
