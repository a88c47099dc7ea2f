use crate::category::Category;
use crate::spot::Spot;
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{error, info};

const TIMEOUT: Duration = Duration::from_secs(10);

/// Remote spot and category source. Fetches never fail towards the caller:
/// any network, status or decoding problem is logged and turns into an empty
/// list.
#[derive(Clone)]
pub struct SpotSource {
    client: reqwest::Client,
    api_url: String,
}

impl SpotSource {
    pub fn new(api_url: impl Into<String>) -> Result<Self> {
        Ok(SpotSource {
            client: reqwest::Client::builder().timeout(TIMEOUT).build()?,
            api_url: api_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub async fn fetch_spots(&self) -> Vec<Spot> {
        match self.get_json::<Vec<Spot>>("spots").await {
            Ok(spots) => {
                info!(count = spots.len(), "Fetched spots");
                spots
            }
            Err(e) => {
                error!(api_url = self.api_url, error = %e, "Failed to fetch spots");
                vec![]
            }
        }
    }

    pub async fn fetch_categories(&self) -> Vec<Category> {
        match self.get_json::<Vec<Category>>("categories").await {
            Ok(categories) => {
                info!(count = categories.len(), "Fetched categories");
                categories
            }
            Err(e) => {
                error!(api_url = self.api_url, error = %e, "Failed to fetch categories");
                vec![]
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}/{}", self.api_url, path);
        let res = self.client.get(&url).send().await?;
        if !res.status().is_success() {
            return Err(Error::Upstream(format!("GET {url} returned {}", res.status())));
        }
        Ok(res.json().await?)
    }
}

#[cfg(test)]
pub mod test {
    use super::SpotSource;
    use crate::Result;
    use actix_web::web::Json;
    use actix_web::{test, web, App, HttpResponse, HttpServer};
    use serde_json::{json, Value};

    /// Serves `spots` and `categories` on a random local port, returns the
    /// api base url.
    pub fn mock_api(spots: Value, categories: Value) -> Result<String> {
        let server = HttpServer::new(move || {
            let spots = spots.clone();
            let categories = categories.clone();
            App::new()
                .route(
                    "/api/spots",
                    web::get().to(move || {
                        let spots = spots.clone();
                        async move { Json(spots) }
                    }),
                )
                .route(
                    "/api/categories",
                    web::get().to(move || {
                        let categories = categories.clone();
                        async move { Json(categories) }
                    }),
                )
                .route(
                    "/api/broken",
                    web::get().to(|| async { HttpResponse::InternalServerError().finish() }),
                )
        })
        .workers(1)
        .bind(("127.0.0.1", 0))?;
        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());
        Ok(format!("http://{addr}/api"))
    }

    #[test]
    async fn unreachable_source_yields_empty_lists() -> Result<()> {
        let source = SpotSource::new("http://127.0.0.1:9/api")?;
        assert!(source.fetch_spots().await.is_empty());
        assert!(source.fetch_categories().await.is_empty());
        Ok(())
    }

    #[test]
    async fn fetch() -> Result<()> {
        let api_url = mock_api(
            json!([{"id":"1","name":"X","lat":38.9,"lng":141.1,"category":"寺院","phone":"","email":"","link":""}]),
            json!([{"category_name":"寺院","color_code":"#ff0000"}]),
        )?;
        let source = SpotSource::new(format!("{api_url}/"))?;
        let spots = source.fetch_spots().await;
        assert_eq!(1, spots.len());
        assert_eq!("X", spots[0].name);
        let categories = source.fetch_categories().await;
        assert_eq!("#ff0000", categories[0].color_code);
        Ok(())
    }

    #[test]
    async fn non_success_status_is_an_error() -> Result<()> {
        let api_url = mock_api(json!([]), json!([]))?;
        let source = SpotSource::new(api_url)?;
        assert!(source.get_json::<Value>("broken").await.is_err());
        assert!(source.get_json::<Value>("missing").await.is_err());
        Ok(())
    }

    #[test]
    async fn malformed_payload_yields_empty_list() -> Result<()> {
        let api_url = mock_api(json!({"not": "a list"}), json!([{"category_name": 1}]))?;
        let source = SpotSource::new(api_url)?;
        assert!(source.fetch_spots().await.is_empty());
        assert!(source.fetch_categories().await.is_empty());
        Ok(())
    }
}
