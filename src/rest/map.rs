use crate::log::RequestExtension;
use crate::map::render::MapRender;
use crate::map::MapView;
use crate::rest::error::RestApiError;
use crate::rest::error::RestResult as Res;
use crate::service::map_image;
use crate::service::session::Session;
use actix_web::get;
use actix_web::web::{self, Data, Json, Query};
use actix_web::{HttpMessage, HttpRequest, HttpResponse};
use geojson::FeatureCollection;
use serde::Deserialize;
use tracing::error;

#[derive(Deserialize)]
pub struct Args {
    #[serde(default)]
    category: String,
    /// Comma separated layer names.
    #[serde(default)]
    hidden: String,
}

impl Args {
    fn view(&self, session: &Session) -> MapView {
        let hidden: Vec<String> = self
            .hidden
            .split(',')
            .map(str::trim)
            .filter(|it| !it.is_empty())
            .map(str::to_string)
            .collect();
        session.map_view(&self.category, &hidden)
    }
}

#[get("")]
pub async fn get(req: HttpRequest, args: Query<Args>, session: Data<Session>) -> Res<MapRender> {
    let render = args.view(&session).render();
    req.extensions_mut()
        .insert(RequestExtension::new(render.cards.len()));
    Ok(Json(render))
}

#[get("/geojson")]
pub async fn get_geojson(
    req: HttpRequest,
    args: Query<Args>,
    session: Data<Session>,
) -> Res<FeatureCollection> {
    let collection = args.view(&session).to_geojson();
    req.extensions_mut()
        .insert(RequestExtension::new(collection.features.len()));
    Ok(Json(collection))
}

#[get("/png")]
pub async fn get_png(
    args: Query<Args>,
    session: Data<Session>,
) -> Result<HttpResponse, RestApiError> {
    let view = args.view(&session);
    let png = web::block(move || map_image::render_png(&view))
        .await
        .map_err(|e| {
            error!(error = %e, "Map rendering task failed");
            RestApiError::upstream("Failed to render the map")
        })?
        .map_err(|e| {
            error!(error = %e, "Failed to render the map");
            RestApiError::upstream(format!("Failed to render the map: {e}"))
        })?;
    Ok(HttpResponse::Ok().content_type("image/png").body(png))
}

#[cfg(test)]
mod test {
    use crate::category::Category;
    use crate::map::render::MapRender;
    use crate::service::session::Session;
    use crate::spot::Spot;
    use crate::Result;
    use actix_web::test::TestRequest;
    use actix_web::web::{scope, Data};
    use actix_web::{test, App};
    use geojson::FeatureCollection;

    fn session() -> Session {
        Session::mock(
            vec![
                Spot::mock("1", "寺院"),
                Spot::mock("2", "山"),
                Spot::mock("3", "温泉"),
            ],
            vec![
                Category::new("寺院", "#ff0000"),
                Category::new("山", "#00ff00"),
            ],
        )
    }

    #[test]
    async fn get_empty_session() -> Result<()> {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(Session::mock(vec![], vec![])))
                .service(scope("/map").service(super::get)),
        )
        .await;
        let req = TestRequest::get().uri("/map").to_request();
        let res: MapRender = test::call_and_read_body_json(&app, req).await;
        assert!(res.legend.is_empty());
        assert!(res.layers.is_empty());
        assert_eq!(12, res.viewport.zoom);
        Ok(())
    }

    #[test]
    async fn get_with_category_and_hidden_layers() -> Result<()> {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(session()))
                .service(scope("/map").service(super::get)),
        )
        .await;
        let req = TestRequest::get()
            .uri("/map?category=%E5%AF%BA%E9%99%A2&hidden=%E5%B1%B1")
            .to_request();
        let res: MapRender = test::call_and_read_body_json(&app, req).await;
        assert_eq!("寺院", res.selected_category);
        assert_eq!(1, res.cards.len());
        assert_eq!(2, res.layers.len());
        assert_eq!(1, res.layers[0].markers.len());
        assert!(!res.layers[1].visible);
        Ok(())
    }

    #[test]
    async fn get_geojson_skips_hidden_layers() -> Result<()> {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(session()))
                .service(scope("/map").service(super::get_geojson)),
        )
        .await;
        let req = TestRequest::get()
            .uri("/map/geojson?hidden=%E5%B1%B1")
            .to_request();
        let res: FeatureCollection = test::call_and_read_body_json(&app, req).await;
        // service area, 寺院 and the fallback layer
        assert_eq!(3, res.features.len());
        Ok(())
    }
}
