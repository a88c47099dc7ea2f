use super::validation::{is_email, is_web_link, ValidationErrors};
use crate::map::LatLng;
use crate::spot::NewSpot;
use serde::Deserialize;
use serde::Serialize;
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// Categories a visitor can pick when placing a new spot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AsRefStr, Display, EnumIter, EnumString)]
pub enum IntakeCategory {
    #[strum(serialize = "寺院")]
    Temple,
    #[strum(serialize = "山")]
    Mountain,
}

impl IntakeCategory {
    pub fn options() -> Vec<String> {
        IntakeCategory::iter().map(|it| it.to_string()).collect()
    }
}

/// Fields entered by the user. The position comes from the map anchor.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SpotIntakeForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub category: String,
}

impl SpotIntakeForm {
    pub fn validate(&self, at: LatLng) -> Result<NewSpot, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        if self.name.trim().is_empty() {
            errors.add("name", "Name is required.");
        }
        if !is_email(self.email.trim()) {
            errors.add("email", "Please enter a valid email address.");
        }
        let link = self.link.trim();
        if !link.is_empty() && !is_web_link(link) {
            errors.add("link", "Link must be an http(s) URL.");
        }
        if self.phone.trim().is_empty() {
            errors.add("phone", "Phone number is required.");
        }
        let category = if self.category.is_empty() {
            errors.add("category", "Please choose a category.");
            None
        } else {
            match IntakeCategory::from_str(&self.category) {
                Ok(category) => Some(category),
                Err(_) => {
                    errors.add(
                        "category",
                        format!("Category must be one of: {}", IntakeCategory::options().join(", ")),
                    );
                    None
                }
            }
        };
        errors.into_result(|| NewSpot {
            name: self.name.trim().into(),
            lat: at.lat,
            lng: at.lng,
            category: category.map(|it| it.to_string()).unwrap_or_default(),
            phone: self.phone.trim().into(),
            email: self.email.trim().into(),
            link: link.into(),
        })
    }

    #[cfg(test)]
    pub fn mock() -> SpotIntakeForm {
        SpotIntakeForm {
            name: "Chuson-ji Free Wi-Fi".into(),
            email: "wifi@example.org".into(),
            link: "https://example.org".into(),
            phone: "0191-46-2211".into(),
            category: "寺院".into(),
        }
    }
}
