use crate::category::Category;
use crate::log::RequestExtension;
use crate::rest::error::RestResult as Res;
use crate::service::session::Session;
use actix_web::get;
use actix_web::web::{Data, Json};
use actix_web::{HttpMessage, HttpRequest};

#[get("")]
pub async fn get(req: HttpRequest, session: Data<Session>) -> Res<Vec<Category>> {
    let categories = session.categories();
    req.extensions_mut()
        .insert(RequestExtension::new(categories.len()));
    Ok(Json(categories))
}
