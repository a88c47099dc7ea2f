use rusqlite::Row;
use std::sync::OnceLock;

pub const TABLE_NAME: &str = "conf";

pub enum Columns {
    ApiUrl,
    ListingIntakeUrl,
    PostalLookupUrl,
    TileUrl,
    CenterLat,
    CenterLng,
    ServiceAreaRadiusM,
    DefaultZoom,
    RecenterZoom,
    LongPressThresholdMs,
    FallbackColor,
    PersistSpots,
}

impl Columns {
    pub fn as_str(&self) -> &'static str {
        match self {
            Columns::ApiUrl => "api_url",
            Columns::ListingIntakeUrl => "listing_intake_url",
            Columns::PostalLookupUrl => "postal_lookup_url",
            Columns::TileUrl => "tile_url",
            Columns::CenterLat => "center_lat",
            Columns::CenterLng => "center_lng",
            Columns::ServiceAreaRadiusM => "service_area_radius_m",
            Columns::DefaultZoom => "default_zoom",
            Columns::RecenterZoom => "recenter_zoom",
            Columns::LongPressThresholdMs => "long_press_threshold_ms",
            Columns::FallbackColor => "fallback_color",
            Columns::PersistSpots => "persist_spots",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Conf {
    pub api_url: String,
    pub listing_intake_url: String,
    pub postal_lookup_url: String,
    pub tile_url: String,
    pub center_lat: f64,
    pub center_lng: f64,
    pub service_area_radius_m: f64,
    pub default_zoom: i64,
    pub recenter_zoom: i64,
    pub long_press_threshold_ms: i64,
    pub fallback_color: String,
    pub persist_spots: bool,
}

impl Conf {
    pub fn projection() -> &'static str {
        static PROJECTION: OnceLock<String> = OnceLock::new();
        PROJECTION.get_or_init(|| {
            [
                Columns::ApiUrl,
                Columns::ListingIntakeUrl,
                Columns::PostalLookupUrl,
                Columns::TileUrl,
                Columns::CenterLat,
                Columns::CenterLng,
                Columns::ServiceAreaRadiusM,
                Columns::DefaultZoom,
                Columns::RecenterZoom,
                Columns::LongPressThresholdMs,
                Columns::FallbackColor,
                Columns::PersistSpots,
            ]
            .iter()
            .map(Columns::as_str)
            .collect::<Vec<_>>()
            .join(", ")
        })
    }

    pub const fn mapper() -> fn(&Row) -> rusqlite::Result<Self> {
        |row| {
            Ok(Self {
                api_url: row.get(Columns::ApiUrl.as_str())?,
                listing_intake_url: row.get(Columns::ListingIntakeUrl.as_str())?,
                postal_lookup_url: row.get(Columns::PostalLookupUrl.as_str())?,
                tile_url: row.get(Columns::TileUrl.as_str())?,
                center_lat: row.get(Columns::CenterLat.as_str())?,
                center_lng: row.get(Columns::CenterLng.as_str())?,
                service_area_radius_m: row.get(Columns::ServiceAreaRadiusM.as_str())?,
                default_zoom: row.get(Columns::DefaultZoom.as_str())?,
                recenter_zoom: row.get(Columns::RecenterZoom.as_str())?,
                long_press_threshold_ms: row.get(Columns::LongPressThresholdMs.as_str())?,
                fallback_color: row.get(Columns::FallbackColor.as_str())?,
                persist_spots: row.get(Columns::PersistSpots.as_str())?,
            })
        }
    }

    #[cfg(test)]
    pub fn mock() -> Conf {
        Conf {
            api_url: "http://127.0.0.1:9/api".into(),
            listing_intake_url: "http://127.0.0.1:9/api/stores".into(),
            postal_lookup_url: "http://127.0.0.1:9/api/search".into(),
            tile_url: "https://tile.openstreetmap.org/{z}/{x}/{y}.png".into(),
            center_lat: 38.988587,
            center_lng: 141.099241,
            service_area_radius_m: 50_000.0,
            default_zoom: 12,
            recenter_zoom: 14,
            long_press_threshold_ms: 500,
            fallback_color: "#3388ff".into(),
            persist_spots: false,
        }
    }
}
