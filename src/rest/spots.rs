use crate::form::SpotIntakeForm;
use crate::log::RequestExtension;
use crate::map::LatLng;
use crate::rest::error::RestApiError;
use crate::rest::error::RestResult as Res;
use crate::service::session::Session;
use crate::spot::Spot;
use actix_web::web::{Data, Json};
use actix_web::{get, post, HttpMessage, HttpRequest, HttpResponse};
use deadpool_sqlite::Pool;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct PostArgs {
    #[serde(flatten)]
    form: SpotIntakeForm,
    lat: f64,
    lng: f64,
}

#[get("")]
pub async fn get(req: HttpRequest, session: Data<Session>) -> Res<Vec<Spot>> {
    let spots = session.spots();
    req.extensions_mut()
        .insert(RequestExtension::new(spots.len()));
    Ok(Json(spots))
}

#[post("")]
pub async fn post(
    args: Json<PostArgs>,
    session: Data<Session>,
    pool: Data<Pool>,
) -> Result<HttpResponse, RestApiError> {
    let at = LatLng {
        lat: args.lat,
        lng: args.lng,
    };
    let spot = session.add_spot(&args.form, at, &pool).await?;
    Ok(HttpResponse::Created().json(spot))
}

#[cfg(test)]
mod test {
    use crate::db;
    use crate::rest::error::{self, RestApiErrorBody};
    use crate::service::session::Session;
    use crate::spot::Spot;
    use crate::Result;
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;
    use actix_web::web::{scope, Data, JsonConfig};
    use actix_web::{test, App};
    use serde_json::json;
    use std::collections::HashSet;

    fn body(category: &str) -> serde_json::Value {
        json!({
            "name": "中尊寺",
            "email": "info@example.org",
            "link": "https://example.org",
            "phone": "0191-46-2211",
            "category": category,
            "lat": 38.0,
            "lng": 141.0,
        })
    }

    #[test]
    async fn get_lists_spots_in_order() -> Result<()> {
        let session = Session::mock(vec![Spot::mock("2", "山"), Spot::mock("1", "寺院")], vec![]);
        let app = test::init_service(
            App::new()
                .app_data(Data::new(session))
                .service(scope("/").service(super::get)),
        )
        .await;
        let req = TestRequest::get().uri("/").to_request();
        let res: Vec<Spot> = test::call_and_read_body_json(&app, req).await;
        let ids: Vec<&str> = res.iter().map(|it| it.id.as_str()).collect();
        assert_eq!(vec!["2", "1"], ids);
        Ok(())
    }

    #[test]
    async fn post_without_category_is_rejected() -> Result<()> {
        let session = Data::new(Session::mock(vec![Spot::mock("1", "寺院")], vec![]));
        let app = test::init_service(
            App::new()
                .app_data(session.clone())
                .app_data(Data::new(db::test::pool().await))
                .service(scope("/").service(super::post)),
        )
        .await;
        let req = TestRequest::post().uri("/").set_json(body("")).to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(StatusCode::BAD_REQUEST, res.status());
        let res: RestApiErrorBody = test::read_body_json(res).await;
        assert_eq!("invalid_input", res.code);
        let field = res.fields.iter().find(|it| it.field == "category").unwrap();
        assert_eq!("Please choose a category.", field.message);
        assert_eq!(1, session.spots().len());
        Ok(())
    }

    #[test]
    async fn post_adds_spot_with_fresh_id() -> Result<()> {
        let session = Data::new(Session::mock(
            vec![Spot::mock("1", "寺院"), Spot::mock("2", "山")],
            vec![],
        ));
        let app = test::init_service(
            App::new()
                .app_data(session.clone())
                .app_data(Data::new(db::test::pool().await))
                .service(scope("/").service(super::post)),
        )
        .await;
        let req = TestRequest::post().uri("/").set_json(body("寺院")).to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(StatusCode::CREATED, res.status());
        let spot: Spot = test::read_body_json(res).await;
        assert_eq!(38.0, spot.lat);
        assert_eq!(141.0, spot.lng);
        let spots = session.spots();
        assert_eq!(3, spots.len());
        let ids: HashSet<&str> = spots.iter().map(|it| it.id.as_str()).collect();
        assert_eq!(3, ids.len());
        Ok(())
    }

    #[test]
    async fn post_without_coordinates_is_rejected() -> Result<()> {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(Session::mock(vec![], vec![])))
                .app_data(Data::new(db::test::pool().await))
                .app_data(JsonConfig::default().error_handler(error::json_error_handler))
                .service(scope("/").service(super::post)),
        )
        .await;
        let req = TestRequest::post()
            .uri("/")
            .set_json(json!({"name": "X"}))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(StatusCode::BAD_REQUEST, res.status());
        let res: RestApiErrorBody = test::read_body_json(res).await;
        assert_eq!("invalid_input", res.code);
        Ok(())
    }
}
