use actix_web::{
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    middleware::Next,
    Error, HttpMessage,
};
use std::time::Instant;
use tracing::info;

/// Attached by handlers which return collections.
pub struct RequestExtension {
    pub entities: i64,
}

impl RequestExtension {
    pub fn new(entities: usize) -> Self {
        RequestExtension {
            entities: entities as i64,
        }
    }
}

pub async fn handle_request(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let started_at = Instant::now();
    let req_method = req.method().as_str().to_string();
    let req_path = req.path().to_string();
    let req_query_string = req.query_string().to_string();
    let res = next.call(req).await;
    let Ok(res) = res else { return res };
    let entities = res
        .request()
        .extensions()
        .get::<RequestExtension>()
        .map(|it| it.entities);
    info!(
        req_method,
        req_path,
        req_query_string,
        res_status = res.status().as_u16(),
        res_time_sec = started_at.elapsed().as_secs_f64(),
        entities,
    );
    Ok(res)
}
