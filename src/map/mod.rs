pub mod filter;
pub mod export;
pub mod gesture;
pub mod render;

use crate::category::palette::DEFAULT_FALLBACK_COLOR;
use crate::category::{Category, CategoryPalette};
use crate::db::conf::schema::Conf;
use crate::form::{SpotIntakeForm, ValidationErrors};
use crate::spot::{Spot, SpotStore};
use gesture::PressGesture;
use serde::Deserialize;
use serde::Serialize;
use std::collections::HashSet;
use std::time::{Duration, Instant};
use tracing::info;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub center: LatLng,
    pub zoom: u8,
}

#[derive(Clone, Debug)]
pub struct MapSettings {
    pub center: LatLng,
    pub default_zoom: u8,
    pub recenter_zoom: u8,
    pub service_area_radius_m: f64,
    pub tile_url: String,
    pub long_press_threshold: Duration,
    pub fallback_color: String,
}

impl Default for MapSettings {
    fn default() -> Self {
        MapSettings {
            center: LatLng {
                lat: 38.988587,
                lng: 141.099241,
            },
            default_zoom: 12,
            recenter_zoom: 14,
            service_area_radius_m: 50_000.0,
            tile_url: "https://tile.openstreetmap.org/{z}/{x}/{y}.png".into(),
            long_press_threshold: gesture::DEFAULT_LONG_PRESS_THRESHOLD,
            fallback_color: DEFAULT_FALLBACK_COLOR.into(),
        }
    }
}

impl From<&Conf> for MapSettings {
    fn from(conf: &Conf) -> Self {
        MapSettings {
            center: LatLng {
                lat: conf.center_lat,
                lng: conf.center_lng,
            },
            default_zoom: conf.default_zoom.clamp(0, 19) as u8,
            recenter_zoom: conf.recenter_zoom.clamp(0, 19) as u8,
            service_area_radius_m: conf.service_area_radius_m,
            tile_url: conf.tile_url.clone(),
            long_press_threshold: Duration::from_millis(conf.long_press_threshold_ms.max(0) as u64),
            fallback_color: conf.fallback_color.clone(),
        }
    }
}

/// Interactive map state: loaded content, category filter, layer toggles,
/// viewport and the spot intake affordance.
///
/// A fresh view has no spots and no categories and renders fine, so hosts can
/// show it before the data source answers.
pub struct MapView {
    settings: MapSettings,
    spots: Vec<Spot>,
    categories: Vec<Category>,
    palette: CategoryPalette,
    selected_category: String,
    hidden_layers: HashSet<String>,
    fallback_hidden: bool,
    viewport: Viewport,
    gesture: PressGesture,
    intake_anchor: Option<LatLng>,
}

impl MapView {
    pub fn new(settings: MapSettings) -> Self {
        let palette = CategoryPalette::build(&[], settings.fallback_color.clone());
        let viewport = Viewport {
            center: settings.center,
            zoom: settings.default_zoom,
        };
        let gesture = PressGesture::new(settings.long_press_threshold);
        MapView {
            settings,
            spots: vec![],
            categories: vec![],
            palette,
            selected_category: String::new(),
            hidden_layers: HashSet::new(),
            fallback_hidden: false,
            viewport,
            gesture,
            intake_anchor: None,
        }
    }

    pub fn load(&mut self, spots: Vec<Spot>, categories: Vec<Category>) {
        self.palette = CategoryPalette::build(&categories, self.settings.fallback_color.clone());
        self.categories = categories;
        self.spots = spots;
    }

    pub fn reload_spots(&mut self, spots: Vec<Spot>) {
        self.spots = spots;
    }

    pub fn settings(&self) -> &MapSettings {
        &self.settings
    }

    pub fn palette(&self) -> &CategoryPalette {
        &self.palette
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn select_category(&mut self, category: &str) {
        self.selected_category = category.trim().to_string();
    }

    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    pub fn displayed_spots(&self) -> Vec<Spot> {
        filter::filter_spots(&self.spots, &self.selected_category)
    }

    pub fn toggle_layer(&mut self, name: &str) {
        if !self.hidden_layers.remove(name) {
            self.hidden_layers.insert(name.to_string());
        }
    }

    pub fn set_hidden_layers<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hidden_layers = names.into_iter().map(Into::into).collect();
    }

    /// Visibility of a category layer. The fallback layer is toggled
    /// separately, a category may legitimately be named `""`.
    pub fn is_layer_visible(&self, name: &str) -> bool {
        !self.hidden_layers.contains(name)
    }

    pub fn toggle_fallback_layer(&mut self) {
        self.fallback_hidden = !self.fallback_hidden;
    }

    pub fn is_fallback_layer_visible(&self) -> bool {
        !self.fallback_hidden
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn pan_to(&mut self, center: LatLng, zoom: u8) {
        self.viewport = Viewport { center, zoom };
    }

    pub fn recenter(&mut self) {
        self.viewport = Viewport {
            center: self.settings.center,
            zoom: self.settings.recenter_zoom,
        };
    }

    pub fn secondary_click(&mut self, position: LatLng) {
        self.open_intake(position);
    }

    pub fn press(&mut self, at: Instant, position: LatLng) {
        self.gesture.press(at, position);
    }

    pub fn tick(&mut self, now: Instant) {
        if let Some(position) = self.gesture.tick(now) {
            self.open_intake(position);
        }
    }

    pub fn release(&mut self, now: Instant) {
        if let Some(position) = self.gesture.release(now) {
            self.open_intake(position);
        }
    }

    pub fn gesture(&self) -> &PressGesture {
        &self.gesture
    }

    pub fn intake_anchor(&self) -> Option<LatLng> {
        self.intake_anchor
    }

    pub fn close_intake(&mut self) {
        self.intake_anchor = None;
    }

    /// Validates the form against the open anchor and adds the spot to the
    /// store. Invalid submissions leave the store and the anchor untouched.
    pub fn submit_intake(
        &mut self,
        form: &SpotIntakeForm,
        store: &SpotStore,
    ) -> Result<Spot, ValidationErrors> {
        let Some(anchor) = self.intake_anchor else {
            let mut errors = ValidationErrors::default();
            errors.add("position", "Long-press or right-click the map to pick a position.");
            return Err(errors);
        };
        let candidate = form.validate(anchor)?;
        let spot = store.add(candidate);
        info!(id = spot.id, category = spot.category, "Added spot from the map");
        self.intake_anchor = None;
        self.spots = store.list();
        Ok(spot)
    }

    fn open_intake(&mut self, position: LatLng) {
        info!(lat = position.lat, lng = position.lng, "Opening spot intake form");
        self.intake_anchor = Some(position);
    }
}
