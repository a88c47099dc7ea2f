pub mod palette;
pub use palette::CategoryPalette;

use serde::Deserialize;
use serde::Serialize;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Category {
    pub category_name: String,
    pub color_code: String,
}

impl Category {
    pub fn new(category_name: impl Into<String>, color_code: impl Into<String>) -> Self {
        Category {
            category_name: category_name.into(),
            color_code: color_code.into(),
        }
    }
}
