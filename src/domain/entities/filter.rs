use std::collections::BTreeSet;

use crate::domain::entities::dog::SortOrder;
use crate::domain::errors::ListingError;

/// A single user edit to the listing filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterMsg {
    SetBreeds(BTreeSet<String>),
    ToggleBreed(String),
    SetAgeRange(Option<u32>, Option<u32>),
    SetSearchQuery(String),
    SetSortOrder(SortOrder),
    ToggleSortOrder,
    Clear,
}

/// Server-side search filters. Every setter reports whether a value
/// actually changed so the owner can reset pagination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    breeds: BTreeSet<String>,
    age_min: Option<u32>,
    age_max: Option<u32>,
    search_query: String,
    sort_order: SortOrder,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn breeds(&self) -> &BTreeSet<String> {
        &self.breeds
    }

    pub fn has_breed(&self, name: &str) -> bool {
        self.breeds.contains(name)
    }

    pub fn age_min(&self) -> Option<u32> {
        self.age_min
    }

    pub fn age_max(&self) -> Option<u32> {
        self.age_max
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn set_breeds(&mut self, breeds: BTreeSet<String>) -> bool {
        if self.breeds == breeds {
            return false;
        }
        self.breeds = breeds;
        true
    }

    pub fn toggle_breed(&mut self, name: &str) -> bool {
        if !self.breeds.remove(name) {
            self.breeds.insert(name.to_string());
        }
        true
    }

    /// An inverted range is rejected and leaves the current bounds in place.
    pub fn set_age_range(&mut self, min: Option<u32>, max: Option<u32>) -> Result<bool, ListingError> {
        check_age_range(min, max)?;
        if self.age_min == min && self.age_max == max {
            return Ok(false);
        }
        self.age_min = min;
        self.age_max = max;
        Ok(true)
    }

    pub fn set_search_query(&mut self, text: &str) -> bool {
        if self.search_query == text {
            return false;
        }
        self.search_query = text.to_string();
        true
    }

    pub fn set_sort_order(&mut self, order: SortOrder) -> bool {
        if self.sort_order == order {
            return false;
        }
        self.sort_order = order;
        true
    }

    pub fn toggle_sort_order(&mut self) -> bool {
        self.sort_order = self.sort_order.toggled();
        true
    }

    /// Resets breeds, age bounds and the search query. Sort order is
    /// independent of the filters and survives a clear.
    pub fn clear(&mut self) -> bool {
        let changed = !self.breeds.is_empty()
            || self.age_min.is_some()
            || self.age_max.is_some()
            || !self.search_query.is_empty();
        self.breeds.clear();
        self.age_min = None;
        self.age_max = None;
        self.search_query.clear();
        changed
    }

    /// Returns whether the filters changed. Only an age range can fail.
    pub fn apply(&mut self, msg: FilterMsg) -> Result<bool, ListingError> {
        let changed = match msg {
            FilterMsg::SetBreeds(breeds) => self.set_breeds(breeds),
            FilterMsg::ToggleBreed(name) => self.toggle_breed(&name),
            FilterMsg::SetAgeRange(min, max) => self.set_age_range(min, max)?,
            FilterMsg::SetSearchQuery(text) => self.set_search_query(&text),
            FilterMsg::SetSortOrder(order) => self.set_sort_order(order),
            FilterMsg::ToggleSortOrder => self.toggle_sort_order(),
            FilterMsg::Clear => self.clear(),
        };
        Ok(changed)
    }

    pub fn validate(&self) -> Result<(), ListingError> {
        check_age_range(self.age_min, self.age_max)
    }
}

fn check_age_range(min: Option<u32>, max: Option<u32>) -> Result<(), ListingError> {
    match (min, max) {
        (Some(min), Some(max)) if min > max => Err(ListingError::Validation(format!(
            "minimum age ({min}) must not exceed maximum age ({max})"
        ))),
        _ => Ok(()),
    }
}

/// Parses an age input box: blank means unset.
pub fn parse_age_bound(text: &str) -> Result<Option<u32>, ListingError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<u32>()
        .map(Some)
        .map_err(|_| ListingError::Validation(format!("age must be a whole number, got \"{trimmed}\"")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;

    #[test]
    fn toggle_breed_adds_then_removes() {
        let mut filters = FilterState::new();

        assert!(filters.toggle_breed("Pug"));
        assert!(filters.has_breed("Pug"));
        assert!(filters.toggle_breed("Pug"));
        assert!(!filters.has_breed("Pug"));
    }

    #[test]
    fn setters_report_unchanged_values() {
        let mut filters = FilterState::new();

        assert!(!filters.set_search_query(""));
        assert!(filters.set_search_query("lab"));
        assert!(!filters.set_search_query("lab"));
        assert!(!filters.set_sort_order(SortOrder::Asc));
        assert_eq!(filters.set_age_range(Some(1), None), Ok(true));
        assert_eq!(filters.set_age_range(Some(1), None), Ok(false));
        assert!(!filters.set_breeds(BTreeSet::new()));
    }

    #[test]
    fn clear_keeps_sort_order() {
        let mut filters = FilterState::new();
        filters.toggle_breed("Akita");
        filters.set_age_range(Some(2), Some(5)).expect("valid range");
        filters.set_search_query("ak");
        filters.set_sort_order(SortOrder::Desc);

        assert!(filters.clear());

        assert!(filters.breeds().is_empty());
        assert_eq!(filters.age_min(), None);
        assert_eq!(filters.age_max(), None);
        assert_eq!(filters.search_query(), "");
        assert_eq!(filters.sort_order(), SortOrder::Desc);
        assert!(!filters.clear(), "second clear should change nothing");
    }

    #[test]
    fn inverted_age_range_is_rejected_without_changing_bounds() {
        let mut filters = FilterState::new();
        filters.set_age_range(Some(1), Some(4)).expect("valid range");

        let result = filters.set_age_range(Some(9), Some(3));

        assert!(matches!(result, Err(ListingError::Validation(_))));
        assert_eq!(filters.age_min(), Some(1));
        assert_eq!(filters.age_max(), Some(4));
        assert_eq!(filters.validate(), Ok(()));

        assert_eq!(filters.set_age_range(Some(3), Some(3)), Ok(true));
        assert_eq!(filters.set_age_range(None, Some(3)), Ok(true));
        assert_eq!(filters.validate(), Ok(()));
    }

    #[test]
    fn parse_age_bound_accepts_blank_and_numbers() {
        assert_eq!(parse_age_bound(""), Ok(None));
        assert_eq!(parse_age_bound("  "), Ok(None));
        assert_eq!(parse_age_bound(" 4 "), Ok(Some(4)));
        assert!(matches!(parse_age_bound("-1"), Err(ListingError::Validation(_))));
        assert!(matches!(parse_age_bound("two"), Err(ListingError::Validation(_))));
    }

    #[test]
    fn apply_routes_messages_to_setters() {
        let mut filters = FilterState::new();

        assert_eq!(filters.apply(FilterMsg::ToggleBreed("Boxer".to_string())), Ok(true));
        assert_eq!(filters.apply(FilterMsg::ToggleSortOrder), Ok(true));
        assert_eq!(filters.apply(FilterMsg::SetSearchQuery("box".to_string())), Ok(true));
        assert!(filters.apply(FilterMsg::SetAgeRange(Some(5), Some(1))).is_err());

        assert!(filters.has_breed("Boxer"));
        assert_eq!(filters.sort_order(), SortOrder::Desc);
        assert_eq!(filters.search_query(), "box");
    }

    proptest! {
        #[test]
        fn toggles_leave_breeds_toggled_an_odd_number_of_times(
            toggles in proptest::collection::vec(prop::sample::select(vec!["Pug", "Akita", "Boxer", "Beagle"]), 0..40)
        ) {
            let mut filters = FilterState::new();
            let mut counts: HashMap<&str, usize> = HashMap::new();
            for name in toggles.iter().copied() {
                filters.toggle_breed(name);
                *counts.entry(name).or_default() += 1;
            }

            for name in ["Pug", "Akita", "Boxer", "Beagle"] {
                let odd = counts.get(name).copied().unwrap_or(0) % 2 == 1;
                prop_assert_eq!(filters.has_breed(name), odd);
            }
        }
    }
}
