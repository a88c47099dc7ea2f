use super::{LatLng, MapView};
use geo::{Destination, Distance, Haversine, LineString, Point, Polygon};
use geojson::{feature::Id, Feature, FeatureCollection, Geometry, JsonObject};
use serde_json::json;

pub const SERVICE_AREA_VERTICES: usize = 64;

pub fn service_area_polygon(center: LatLng, radius_m: f64, vertices: usize) -> Polygon<f64> {
    let origin = Point::new(center.lng, center.lat);
    let points: Vec<Point<f64>> = (0..vertices)
        .map(|i| {
            let bearing = 360.0 * i as f64 / vertices as f64;
            Haversine::destination(origin, bearing, radius_m)
        })
        .collect();
    Polygon::new(LineString::from(points), vec![])
}

pub fn distance_m(a: LatLng, b: LatLng) -> f64 {
    Haversine::distance(Point::new(a.lng, a.lat), Point::new(b.lng, b.lat))
}

impl MapView {
    /// Service area polygon followed by every marker of the visible layers.
    pub fn to_geojson(&self) -> FeatureCollection {
        let settings = self.settings();
        let area = service_area_polygon(
            settings.center,
            settings.service_area_radius_m,
            SERVICE_AREA_VERTICES,
        );
        let mut area_props = JsonObject::new();
        area_props.insert("kind".into(), json!("service_area"));
        area_props.insert("radius_m".into(), json!(settings.service_area_radius_m));
        let mut features = vec![Feature {
            bbox: None,
            geometry: Some(Geometry::new(geojson::Value::from(&area))),
            id: None,
            properties: Some(area_props),
            foreign_members: None,
        }];
        for layer in self.layers().into_iter().filter(|it| it.visible) {
            for marker in layer.markers {
                let in_service_area = distance_m(settings.center, marker.position)
                    <= settings.service_area_radius_m;
                let mut props = JsonObject::new();
                props.insert("kind".into(), json!("spot"));
                props.insert("name".into(), json!(marker.name));
                props.insert("category".into(), json!(marker.category));
                props.insert("color".into(), json!(marker.color));
                props.insert("layer".into(), json!(layer.name));
                props.insert("phone".into(), json!(marker.phone));
                props.insert("email".into(), json!(marker.email));
                props.insert("link".into(), json!(marker.link));
                props.insert("in_service_area".into(), json!(in_service_area));
                features.push(Feature {
                    bbox: None,
                    geometry: Some(Geometry::new(geojson::Value::Point(vec![
                        marker.position.lng,
                        marker.position.lat,
                    ]))),
                    id: Some(Id::String(marker.id)),
                    properties: Some(props),
                    foreign_members: None,
                });
            }
        }
        FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }
}
