use crate::spot::Spot;

/// Selector value meaning "no filter", in addition to the empty string.
pub const ALL_CATEGORIES: &str = "all";

/// A category literally named `all` can't be selected on its own, selecting
/// it shows every spot.
pub fn is_all(selected: &str) -> bool {
    selected.is_empty() || selected == ALL_CATEGORIES
}

/// Spots to display for the given category selector. An empty or `all`
/// selector returns the input unchanged.
pub fn filter_spots(spots: &[Spot], selected: &str) -> Vec<Spot> {
    if is_all(selected) {
        return spots.to_vec();
    }
    spots
        .iter()
        .filter(|it| it.category == selected)
        .cloned()
        .collect()
}
