pub mod store;
pub use store::SpotStore;

use serde::Deserialize;
use serde::Serialize;

/// A point of interest. Contact fields are shown verbatim and may be empty.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Spot {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub category: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub link: String,
}

/// A spot which hasn't been assigned an id yet.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NewSpot {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub category: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub link: String,
}

impl NewSpot {
    pub fn with_id(self, id: String) -> Spot {
        Spot {
            id,
            name: self.name,
            lat: self.lat,
            lng: self.lng,
            category: self.category,
            phone: self.phone,
            email: self.email,
            link: self.link,
        }
    }

    #[cfg(test)]
    pub fn mock(name: &str, category: &str) -> NewSpot {
        NewSpot {
            name: name.into(),
            lat: 38.988587,
            lng: 141.099241,
            category: category.into(),
            phone: "0191-46-0000".into(),
            email: "info@example.org".into(),
            link: "https://example.org".into(),
        }
    }
}

impl Spot {
    #[cfg(test)]
    pub fn mock(id: &str, category: &str) -> Spot {
        NewSpot::mock(&format!("Spot {id}"), category).with_id(id.into())
    }
}
