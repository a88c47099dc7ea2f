use super::Category;
use std::collections::HashMap;

/// Leaflet's default marker blue, used for spots with unknown categories.
pub const DEFAULT_FALLBACK_COLOR: &str = "#3388ff";

/// Category name to color mapping for one session.
///
/// Entries keep the position of the first occurrence of a name, while the
/// color follows the last occurrence.
#[derive(Clone, Debug)]
pub struct CategoryPalette {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
    fallback: String,
}

impl CategoryPalette {
    pub fn build(categories: &[Category], fallback: impl Into<String>) -> CategoryPalette {
        let mut entries: Vec<(String, String)> = vec![];
        let mut index: HashMap<String, usize> = HashMap::new();
        for category in categories {
            match index.get(&category.category_name) {
                Some(&pos) => entries[pos].1 = category.color_code.clone(),
                None => {
                    index.insert(category.category_name.clone(), entries.len());
                    entries.push((category.category_name.clone(), category.color_code.clone()));
                }
            }
        }
        CategoryPalette {
            entries,
            index,
            fallback: fallback.into(),
        }
    }

    pub fn color_of(&self, name: &str) -> &str {
        match self.index.get(name) {
            Some(&pos) => &self.entries[pos].1,
            None => &self.fallback,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, color)| (name.as_str(), color.as_str()))
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

impl Default for CategoryPalette {
    fn default() -> Self {
        CategoryPalette::build(&[], DEFAULT_FALLBACK_COLOR)
    }
}

/// Parses `#rgb` and `#rrggbb` colors. Named CSS colors aren't supported.
pub fn rgb(color: &str) -> Option<[u8; 3]> {
    let hex = color.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => {
            let mut res = [0; 3];
            for (i, c) in hex.chars().enumerate() {
                let v = c.to_digit(16)? as u8;
                res[i] = v * 16 + v;
            }
            Some(res)
        }
        6 => {
            let mut res = [0; 3];
            for (i, chunk) in res.iter_mut().enumerate() {
                *chunk = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).ok()?;
            }
            Some(res)
        }
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::{rgb, CategoryPalette, DEFAULT_FALLBACK_COLOR};
    use crate::category::Category;

    #[test]
    fn color_of_known_category() {
        let palette = CategoryPalette::build(
            &[Category::new("寺院", "#ff0000"), Category::new("山", "#00ff00")],
            DEFAULT_FALLBACK_COLOR,
        );
        assert_eq!("#ff0000", palette.color_of("寺院"));
        assert_eq!("#00ff00", palette.color_of("山"));
    }

    #[test]
    fn color_of_is_total() {
        let palette = CategoryPalette::build(&[Category::new("寺院", "#ff0000")], "#123456");
        for name in ["", "all", "温泉", "寺院 ", "\u{0}"] {
            assert_eq!("#123456", palette.color_of(name));
        }
        assert_eq!(DEFAULT_FALLBACK_COLOR, CategoryPalette::default().color_of("寺院"));
    }

    #[test]
    fn last_write_wins_first_position_kept() {
        let palette = CategoryPalette::build(
            &[
                Category::new("寺院", "#ff0000"),
                Category::new("山", "#00ff00"),
                Category::new("寺院", "#0000ff"),
            ],
            DEFAULT_FALLBACK_COLOR,
        );
        assert_eq!("#0000ff", palette.color_of("寺院"));
        let entries: Vec<(&str, &str)> = palette.entries().collect();
        assert_eq!(vec![("寺院", "#0000ff"), ("山", "#00ff00")], entries);
    }

    #[test]
    fn parse_rgb() {
        assert_eq!(Some([255, 0, 0]), rgb("#ff0000"));
        assert_eq!(Some([0x33, 0x88, 0xff]), rgb("#38f"));
        assert_eq!(None, rgb("lightblue"));
        assert_eq!(None, rgb("#ff00"));
        assert_eq!(None, rgb("#gg0000"));
    }
}
