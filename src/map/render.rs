use super::{filter, LatLng, MapView, Viewport};
use crate::spot::Spot;
use serde::Deserialize;
use serde::Serialize;

pub const SERVICE_AREA_COLOR: &str = "lightblue";
pub const SERVICE_AREA_FILL_OPACITY: f64 = 0.2;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MapRender {
    pub viewport: Viewport,
    pub tile_url: String,
    pub service_area: ServiceArea,
    pub category_options: Vec<CategoryOption>,
    pub selected_category: String,
    pub layers: Vec<Layer>,
    pub legend: Vec<LegendEntry>,
    pub cards: Vec<Spot>,
    pub intake: Option<LatLng>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServiceArea {
    pub center: LatLng,
    pub radius_m: f64,
    pub color: String,
    pub fill_color: String,
    pub fill_opacity: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CategoryOption {
    pub value: String,
    pub label: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Layer {
    pub name: String,
    pub color: String,
    pub visible: bool,
    /// Holds spots whose category has no palette entry.
    pub fallback: bool,
    pub markers: Vec<Marker>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Marker {
    pub id: String,
    pub position: LatLng,
    pub color: String,
    pub name: String,
    pub category: String,
    pub phone: String,
    pub email: String,
    pub link: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub category: String,
    pub color: String,
}

impl Marker {
    fn new(spot: &Spot, color: &str) -> Marker {
        Marker {
            id: spot.id.clone(),
            position: LatLng {
                lat: spot.lat,
                lng: spot.lng,
            },
            color: color.to_string(),
            name: spot.name.clone(),
            category: spot.category.clone(),
            phone: spot.phone.clone(),
            email: spot.email.clone(),
            link: spot.link.clone(),
        }
    }
}

impl MapView {
    /// One layer per palette category in legend order, followed by the
    /// fallback layer if any displayed spot has an unknown category.
    pub fn layers(&self) -> Vec<Layer> {
        let displayed = self.displayed_spots();
        let palette = self.palette();
        let mut layers: Vec<Layer> = palette
            .entries()
            .map(|(name, color)| Layer {
                name: name.to_string(),
                color: color.to_string(),
                visible: self.is_layer_visible(name),
                fallback: false,
                markers: displayed
                    .iter()
                    .filter(|it| it.category == name)
                    .map(|it| Marker::new(it, color))
                    .collect(),
            })
            .collect();
        let orphans: Vec<Marker> = displayed
            .iter()
            .filter(|it| !palette.contains(&it.category))
            .map(|it| Marker::new(it, palette.fallback()))
            .collect();
        if !orphans.is_empty() {
            layers.push(Layer {
                name: String::new(),
                color: palette.fallback().to_string(),
                visible: self.is_fallback_layer_visible(),
                fallback: true,
                markers: orphans,
            });
        }
        layers
    }

    pub fn render(&self) -> MapRender {
        let settings = self.settings();
        let mut category_options = vec![CategoryOption {
            value: String::new(),
            label: "All categories".into(),
        }];
        category_options.extend(self.palette().entries().map(|(name, _)| CategoryOption {
            value: name.to_string(),
            label: name.to_string(),
        }));
        MapRender {
            viewport: self.viewport(),
            tile_url: settings.tile_url.clone(),
            service_area: ServiceArea {
                center: settings.center,
                radius_m: settings.service_area_radius_m,
                color: SERVICE_AREA_COLOR.into(),
                fill_color: SERVICE_AREA_COLOR.into(),
                fill_opacity: SERVICE_AREA_FILL_OPACITY,
            },
            category_options,
            selected_category: if filter::is_all(self.selected_category()) {
                String::new()
            } else {
                self.selected_category().to_string()
            },
            layers: self.layers(),
            legend: self
                .palette()
                .entries()
                .map(|(category, color)| LegendEntry {
                    category: category.to_string(),
                    color: color.to_string(),
                })
                .collect(),
            cards: self.displayed_spots(),
            intake: self.intake_anchor(),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::category::Category;
    use crate::map::{MapSettings, MapView};
    use crate::spot::Spot;

    #[test]
    fn empty_load_renders_empty_map() {
        let mut view = MapView::new(MapSettings::default());
        view.load(vec![], vec![]);
        let render = view.render();
        assert!(render.legend.is_empty());
        assert!(render.layers.is_empty());
        assert!(render.cards.is_empty());
        assert_eq!(1, render.category_options.len());
        assert_eq!(50_000.0, render.service_area.radius_m);
    }

    #[test]
    fn single_marker_in_category_layer() {
        let mut view = MapView::new(MapSettings::default());
        let spot = Spot {
            id: "1".into(),
            name: "X".into(),
            lat: 38.9,
            lng: 141.1,
            category: "寺院".into(),
            phone: "".into(),
            email: "".into(),
            link: "".into(),
        };
        view.load(vec![spot], vec![Category::new("寺院", "#ff0000")]);
        let render = view.render();
        assert_eq!(1, render.layers.len());
        let layer = &render.layers[0];
        assert_eq!("寺院", layer.name);
        assert_eq!(1, layer.markers.len());
        assert_eq!("1", layer.markers[0].id);
        assert_eq!("#ff0000", layer.markers[0].color);
        assert_eq!(38.9, layer.markers[0].position.lat);
    }

    #[test]
    fn unknown_category_goes_to_fallback_layer() {
        let mut view = MapView::new(MapSettings::default());
        view.load(
            vec![Spot::mock("1", "寺院"), Spot::mock("2", "温泉")],
            vec![Category::new("寺院", "#ff0000"), Category::new("山", "#00ff00")],
        );
        let layers = view.layers();
        assert_eq!(3, layers.len());
        assert!(layers[1].markers.is_empty());
        let fallback = &layers[2];
        assert!(fallback.fallback);
        assert_eq!("2", fallback.markers[0].id);
        assert_eq!("#3388ff", fallback.markers[0].color);
    }

    #[test]
    fn filter_applies_to_layers_and_cards() {
        let mut view = MapView::new(MapSettings::default());
        view.load(
            vec![Spot::mock("1", "寺院"), Spot::mock("2", "山")],
            vec![Category::new("寺院", "#ff0000"), Category::new("山", "#00ff00")],
        );
        view.select_category("山");
        view.toggle_layer("寺院");
        let render = view.render();
        assert_eq!("山", render.selected_category);
        assert!(render.layers[0].markers.is_empty());
        assert!(!render.layers[0].visible);
        assert_eq!(1, render.layers[1].markers.len());
        assert_eq!(1, render.cards.len());
        assert_eq!(2, render.legend.len());
        let options: Vec<&str> = render
            .category_options
            .iter()
            .map(|it| it.value.as_str())
            .collect();
        assert_eq!(vec!["", "寺院", "山"], options);
    }

    #[test]
    fn blank_category_name_is_not_the_fallback_layer() {
        let mut view = MapView::new(MapSettings::default());
        view.load(
            vec![Spot::mock("1", ""), Spot::mock("2", "温泉")],
            vec![Category::new("", "#ff0000")],
        );
        view.toggle_layer("");
        let layers = view.layers();
        assert_eq!(2, layers.len());
        assert!(!layers[0].fallback);
        assert!(!layers[0].visible);
        assert_eq!("1", layers[0].markers[0].id);
        assert!(layers[1].fallback);
        assert!(layers[1].visible);
        assert_eq!("2", layers[1].markers[0].id);
        view.toggle_fallback_layer();
        let layers = view.layers();
        assert!(!layers[0].visible);
        assert!(!layers[1].visible);
        view.toggle_layer("");
        assert!(view.layers()[0].visible);
        assert!(!view.layers()[1].visible);
    }
}
