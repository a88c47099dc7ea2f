use crate::category::palette::{rgb, DEFAULT_FALLBACK_COLOR};
use crate::map::export::service_area_polygon;
use crate::map::{LatLng, MapView};
use crate::Result;
use staticmap::tools::{CircleBuilder, Color, LineBuilder};
use staticmap::{StaticMap, StaticMapBuilder};

pub const WIDTH: u32 = 600;
pub const HEIGHT: u32 = 400;
const MARKER_RADIUS: f32 = 7.;
// lightblue
const SERVICE_AREA_RGB: [u8; 3] = [173, 216, 230];

/// Position and tint of every marker on a visible layer. Colors which aren't
/// hex codes fall back to the palette fallback, then to the default blue.
pub fn marker_tints(view: &MapView) -> Vec<(LatLng, [u8; 3])> {
    let fallback = rgb(view.palette().fallback())
        .or_else(|| rgb(DEFAULT_FALLBACK_COLOR))
        .unwrap_or([51, 136, 255]);
    view.layers()
        .into_iter()
        .filter(|it| it.visible)
        .flat_map(|it| it.markers)
        .map(|it| (it.position, rgb(&it.color).unwrap_or(fallback)))
        .collect()
}

/// Builds the map without touching the network, tiles are only fetched on
/// encoding.
pub fn build(view: &MapView) -> Result<StaticMap> {
    let viewport = view.viewport();
    let settings = view.settings();
    let mut map = StaticMapBuilder::default()
        .width(WIDTH)
        .height(HEIGHT)
        .zoom(viewport.zoom)
        .lat_center(viewport.center.lat)
        .lon_center(viewport.center.lng)
        .url_template(settings.tile_url.clone())
        .build()?;
    let area = service_area_polygon(settings.center, settings.service_area_radius_m, 64);
    let [r, g, b] = SERVICE_AREA_RGB;
    let outline = LineBuilder::new()
        .lat_coordinates(area.exterior().coords().map(|it| it.y).collect::<Vec<_>>())
        .lon_coordinates(area.exterior().coords().map(|it| it.x).collect::<Vec<_>>())
        .width(3.)
        .simplify(true)
        .color(Color::new(true, r, g, b, 255))
        .build()?;
    map.add_tool(outline);
    for (position, [r, g, b]) in marker_tints(view) {
        let marker = CircleBuilder::new()
            .lat_coordinate(position.lat)
            .lon_coordinate(position.lng)
            .color(Color::new(true, r, g, b, 255))
            .radius(MARKER_RADIUS)
            .build()?;
        map.add_tool(marker);
    }
    Ok(map)
}

/// Blocking, fetches tiles.
pub fn render_png(view: &MapView) -> Result<Vec<u8>> {
    let mut map = build(view)?;
    Ok(map.encode_png()?)
}
