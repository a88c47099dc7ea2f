use super::validation::{is_email, is_web_link, ValidationErrors};
use regex::Regex;
use serde::Deserialize;
use serde::Serialize;
use std::sync::OnceLock;

/// Details a business owner fills in to get listed on the map.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ListingRequestForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub category_id: i64,
    #[serde(default)]
    pub phone: String,
}

/// Payload forwarded to the intake endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ListingRequest {
    pub name: String,
    pub postal_code: String,
    pub address: String,
    pub email: String,
    pub link: String,
    pub category_id: i64,
    pub phone: String,
}

/// Accepts `0210000` and `021-0000`, returns the bare 7 digits.
pub fn normalize_postal_code(value: &str) -> Option<String> {
    static POSTAL_CODE: OnceLock<Regex> = OnceLock::new();
    let value = value.trim();
    let caps = POSTAL_CODE
        .get_or_init(|| Regex::new(r"^([0-9]{3})-?([0-9]{4})$").expect("valid postal code regex"))
        .captures(value)?;
    Some(format!("{}{}", &caps[1], &caps[2]))
}

impl ListingRequestForm {
    pub fn validate(&self) -> Result<ListingRequest, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        if self.name.trim().is_empty() {
            errors.add("name", "Store name is required.");
        }
        let postal_code = normalize_postal_code(&self.postal_code);
        if postal_code.is_none() {
            errors.add("postal_code", "Postal code must have 7 digits.");
        }
        let email = self.email.trim();
        if !email.is_empty() && !is_email(email) {
            errors.add("email", "Please enter a valid email address.");
        }
        let link = self.link.trim();
        if !link.is_empty() && !is_web_link(link) {
            errors.add("link", "Website must be an http(s) URL.");
        }
        if self.category_id <= 0 {
            errors.add("category_id", "Please select a category.");
        }
        errors.into_result(|| ListingRequest {
            name: self.name.trim().into(),
            postal_code: postal_code.unwrap_or_default(),
            address: self.address.trim().into(),
            email: email.into(),
            link: link.into(),
            category_id: self.category_id,
            phone: self.phone.trim().into(),
        })
    }

    #[cfg(test)]
    pub fn mock() -> ListingRequestForm {
        ListingRequestForm {
            name: "Hiraizumi Cafe".into(),
            postal_code: "029-4102".into(),
            address: "".into(),
            email: "cafe@example.org".into(),
            link: "https://cafe.example.org".into(),
            category_id: 1,
            phone: "0191-00-0000".into(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{normalize_postal_code, ListingRequestForm};

    #[test]
    fn postal_code() {
        assert_eq!(Some("0294102".into()), normalize_postal_code("0294102"));
        assert_eq!(Some("0294102".into()), normalize_postal_code(" 029-4102 "));
        assert_eq!(None, normalize_postal_code("029410"));
        assert_eq!(None, normalize_postal_code("02941022"));
        assert_eq!(None, normalize_postal_code("029_4102"));
    }

    #[test]
    fn valid_form() {
        let req = ListingRequestForm::mock().validate().unwrap();
        assert_eq!("0294102", req.postal_code);
        assert_eq!("", req.address);
        assert_eq!(1, req.category_id);
    }

    #[test]
    fn optional_contact_fields() {
        let form = ListingRequestForm {
            email: "".into(),
            link: "".into(),
            phone: "".into(),
            ..ListingRequestForm::mock()
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn unselected_category() {
        let form = ListingRequestForm {
            category_id: 0,
            ..ListingRequestForm::mock()
        };
        assert!(form.validate().unwrap_err().has("category_id"));
    }

    #[test]
    fn invalid_fields() {
        let errors = ListingRequestForm {
            name: " ".into(),
            postal_code: "12".into(),
            email: "nope".into(),
            link: "nope".into(),
            ..ListingRequestForm::mock()
        }
        .validate()
        .unwrap_err();
        let fields: Vec<&str> = errors.0.iter().map(|it| it.field.as_str()).collect();
        assert_eq!(vec!["name", "postal_code", "email", "link"], fields);
    }
}
