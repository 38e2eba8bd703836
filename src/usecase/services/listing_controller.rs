use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::domain::entities::dog::{Dog, DogId, SortOrder};
use crate::domain::entities::favorites::FavoritesSet;
use crate::domain::entities::filter::{FilterMsg, FilterState};
use crate::domain::errors::ListingError;
use crate::usecase::ports::adoption_api::{AdoptionApi, ApiError};
use crate::usecase::search::cursor::SearchCursorTracker;
use crate::usecase::search::query_params::{build_search_params, encode_search_params, SearchParams};

/// One search plus its hydrated records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingPage {
    pub dogs: Vec<Dog>,
    pub total: u64,
    pub next: Option<String>,
    pub prev: Option<String>,
}

/// Parameters for a refresh, tagged with the generation that issued them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRequest {
    pub generation: u64,
    pub params: SearchParams,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    Applied,
    /// A newer request was issued after this one; its result was dropped.
    Stale,
    Failed(ListingError),
}

/// Search, then hydrate the returned ids in one batched detail call.
pub async fn fetch_listing_page<A>(api: &A, params: &SearchParams) -> Result<ListingPage, ApiError>
where
    A: AdoptionApi + ?Sized,
{
    let response = api.search(params).await?;
    let dogs = if response.result_ids.is_empty() {
        Vec::new()
    } else {
        api.dogs(&response.result_ids).await?
    };

    Ok(ListingPage {
        dogs,
        total: response.total,
        next: response.next,
        prev: response.prev,
    })
}

/// Owns the listing filters, pagination and favorites, and the result set
/// shown for them.
///
/// A refresh is split in two so the network call can run without holding
/// the controller: [`begin_refresh`](Self::begin_refresh) hands out a
/// request tagged with a generation, and
/// [`finish_refresh`](Self::finish_refresh) only applies a result whose
/// generation is still current.
#[derive(Debug, Clone, Default)]
pub struct DogListingController {
    filters: FilterState,
    cursor: SearchCursorTracker,
    favorites: FavoritesSet,
    dogs: Vec<Dog>,
    is_loading: bool,
    error: Option<ListingError>,
    generation: u64,
    has_loaded: bool,
    restore_on_failure: Option<SearchCursorTracker>,
}

impl DogListingController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn favorites(&self) -> &FavoritesSet {
        &self.favorites
    }

    pub fn current_dogs(&self) -> &[Dog] {
        &self.dogs
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn current_page(&self) -> u32 {
        self.cursor.current_page()
    }

    pub fn total_pages(&self) -> u64 {
        self.cursor.total_pages()
    }

    pub fn total(&self) -> u64 {
        self.cursor.total()
    }

    pub fn can_advance(&self) -> bool {
        self.cursor.can_advance()
    }

    pub fn can_retreat(&self) -> bool {
        self.cursor.can_retreat()
    }

    pub fn error(&self) -> Option<&ListingError> {
        self.error.as_ref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Applies a filter edit. A real change resets pagination and tells the
    /// caller a refresh is due. A rejected edit changes nothing.
    pub fn dispatch(&mut self, msg: FilterMsg) -> Result<bool, ListingError> {
        let changed = self.filters.apply(msg)?;
        Ok(self.note_filter_change(changed))
    }

    pub fn set_breeds(&mut self, breeds: BTreeSet<String>) -> bool {
        let changed = self.filters.set_breeds(breeds);
        self.note_filter_change(changed)
    }

    pub fn toggle_breed(&mut self, name: &str) -> bool {
        let changed = self.filters.toggle_breed(name);
        self.note_filter_change(changed)
    }

    /// An inverted range fails with [`ListingError::Validation`] and leaves
    /// filters and pagination untouched.
    pub fn set_age_range(&mut self, min: Option<u32>, max: Option<u32>) -> Result<bool, ListingError> {
        self.dispatch(FilterMsg::SetAgeRange(min, max))
    }

    pub fn set_search_query(&mut self, text: &str) -> bool {
        let changed = self.filters.set_search_query(text);
        self.note_filter_change(changed)
    }

    pub fn set_sort_order(&mut self, order: SortOrder) -> bool {
        let changed = self.filters.set_sort_order(order);
        self.note_filter_change(changed)
    }

    pub fn toggle_sort_order(&mut self) -> bool {
        let changed = self.filters.toggle_sort_order();
        self.note_filter_change(changed)
    }

    pub fn clear_filters(&mut self) -> bool {
        let changed = self.filters.clear();
        self.note_filter_change(changed)
    }

    fn note_filter_change(&mut self, changed: bool) -> bool {
        if changed {
            self.cursor.reset();
            self.restore_on_failure = None;
        }
        changed
    }

    pub fn toggle_favorite(&mut self, id: &DogId) -> bool {
        self.favorites.toggle(id)
    }

    pub fn is_favorite(&self, id: &DogId) -> bool {
        self.favorites.has(id)
    }

    /// Moves to the next page. Returns false, changing nothing, when the last
    /// response had no `next` link.
    pub fn advance(&mut self) -> bool {
        let before = self.cursor.clone();
        if !self.cursor.advance() {
            return false;
        }
        self.restore_on_failure.get_or_insert(before);
        true
    }

    pub fn retreat(&mut self) -> bool {
        let before = self.cursor.clone();
        if !self.cursor.retreat() {
            return false;
        }
        self.restore_on_failure.get_or_insert(before);
        true
    }

    /// Validates the filters and issues a new generation. An invalid age
    /// range is returned as an error and nothing is marked as loading.
    pub fn begin_refresh(&mut self) -> Result<ListingRequest, ListingError> {
        self.filters.validate()?;

        self.generation += 1;
        self.is_loading = true;
        let params = build_search_params(
            &self.filters,
            self.cursor.current_page(),
            self.cursor.active_cursor(),
        );
        debug!(
            generation = self.generation,
            query = %encode_search_params(&params),
            "issuing dog search"
        );

        Ok(ListingRequest {
            generation: self.generation,
            params,
        })
    }

    pub fn finish_refresh(
        &mut self,
        generation: u64,
        result: Result<ListingPage, ApiError>,
    ) -> RefreshOutcome {
        if generation != self.generation {
            debug!(
                generation,
                current = self.generation,
                "discarding stale search response"
            );
            return RefreshOutcome::Stale;
        }
        self.is_loading = false;

        match result {
            Ok(page) => {
                self.cursor
                    .record_response(page.next.as_deref(), page.prev.as_deref(), page.total);
                debug!(
                    generation,
                    count = page.dogs.len(),
                    total = page.total,
                    "search results applied"
                );
                self.dogs = page.dogs;
                self.has_loaded = true;
                self.error = None;
                self.restore_on_failure = None;
                RefreshOutcome::Applied
            }
            Err(err) => {
                warn!(generation, error = %err, "dog search failed");
                let err = ListingError::from(err);
                if err.is_unauthorized() {
                    self.discard_session_state();
                } else {
                    if let Some(previous) = self.restore_on_failure.take() {
                        self.cursor = previous;
                    }
                    if !self.has_loaded {
                        self.dogs.clear();
                    }
                }
                self.error = Some(err.clone());
                RefreshOutcome::Failed(err)
            }
        }
    }

    /// Runs a whole refresh while holding the controller.
    pub async fn refresh<A>(&mut self, api: &A) -> Result<RefreshOutcome, ListingError>
    where
        A: AdoptionApi + ?Sized,
    {
        let request = self.begin_refresh()?;
        let result = fetch_listing_page(api, &request.params).await;
        Ok(self.finish_refresh(request.generation, result))
    }

    /// Drops everything tied to the session. Responses still in flight
    /// become stale.
    pub fn reset_session(&mut self) {
        let generation = self.generation + 1;
        *self = Self {
            generation,
            ..Self::default()
        };
    }

    fn discard_session_state(&mut self) {
        self.dogs.clear();
        self.cursor.reset();
        self.favorites.clear();
        self.restore_on_failure = None;
        self.has_loaded = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn dog(id: &str) -> Dog {
        Dog {
            id: DogId::from(id),
            img: String::new(),
            name: format!("Dog {id}"),
            age: 3,
            zip_code: "10001".to_string(),
            breed: "Beagle".to_string(),
        }
    }

    fn page(ids: &[&str], total: u64, next: Option<&str>, prev: Option<&str>) -> ListingPage {
        ListingPage {
            dogs: ids.iter().map(|id| dog(id)).collect(),
            total,
            next: next.map(str::to_string),
            prev: prev.map(str::to_string),
        }
    }

    fn loaded_on_second_page() -> DogListingController {
        let mut controller = DogListingController::new();
        let request = controller.begin_refresh().expect("valid filters");
        controller.finish_refresh(
            request.generation,
            Ok(page(&["d1"], 60, Some("/dogs/search?from=20"), None)),
        );
        assert!(controller.advance());
        let request = controller.begin_refresh().expect("valid filters");
        controller.finish_refresh(
            request.generation,
            Ok(page(
                &["d2"],
                60,
                Some("/dogs/search?from=40"),
                Some("/dogs/search?from=0"),
            )),
        );
        controller
    }

    #[test]
    fn begin_refresh_marks_loading_and_builds_params() {
        let mut controller = DogListingController::new();
        controller.toggle_breed("Pug");

        let request = controller.begin_refresh().expect("valid filters");

        assert!(controller.is_loading());
        assert_eq!(request.generation, 1);
        assert!(request
            .params
            .contains(&("breeds".to_string(), "Pug".to_string())));
        assert!(request.params.contains(&("page".to_string(), "1".to_string())));
    }

    #[test]
    fn inverted_age_range_keeps_filters_and_position() {
        let mut controller = DogListingController::new();
        controller.toggle_breed("Beagle");
        let request = controller.begin_refresh().expect("valid filters");
        controller.finish_refresh(
            request.generation,
            Ok(page(&["d1"], 60, Some("/dogs/search?from=20"), None)),
        );
        assert!(controller.advance());
        let request = controller.begin_refresh().expect("valid filters");
        controller.finish_refresh(
            request.generation,
            Ok(page(
                &["p2"],
                60,
                Some("/dogs/search?from=40"),
                Some("/dogs/search?from=0"),
            )),
        );
        let filters_before = controller.filters().clone();

        let result = controller.set_age_range(Some(10), Some(2));

        assert!(matches!(result, Err(ListingError::Validation(_))));
        assert_eq!(controller.filters(), &filters_before);
        assert_eq!(controller.current_page(), 2);
        assert_eq!(controller.total_pages(), 3);
        assert_eq!(controller.cursor.next().map(|c| c.as_str()), Some("40"));
        assert_eq!(controller.cursor.prev().map(|c| c.as_str()), Some("0"));
        assert!(controller.can_advance());
        assert!(controller.can_retreat());
        assert_eq!(controller.current_dogs(), &[dog("p2")]);

        assert!(controller.toggle_breed("Pug"));
        assert!(controller.begin_refresh().is_ok());
    }

    #[test]
    fn filter_change_resets_pagination() {
        let mut controller = loaded_on_second_page();
        assert_eq!(controller.current_page(), 2);
        assert!(controller.can_retreat());

        assert!(controller.set_search_query("rex"));

        assert_eq!(controller.current_page(), 1);
        assert!(!controller.can_advance());
        assert!(!controller.can_retreat());
    }

    #[test]
    fn unchanged_filter_keeps_pagination() {
        let mut controller = loaded_on_second_page();

        assert!(!controller.set_sort_order(SortOrder::Asc));
        assert_eq!(controller.current_page(), 2);
    }

    #[test]
    fn advance_sends_next_cursor() {
        let mut controller = DogListingController::new();
        let request = controller.begin_refresh().expect("valid filters");
        controller.finish_refresh(
            request.generation,
            Ok(page(&["d1"], 60, Some("/dogs/search?size=20&from=20"), None)),
        );

        assert!(controller.advance());
        let request = controller.begin_refresh().expect("valid filters");

        assert!(request.params.contains(&("from".to_string(), "20".to_string())));
        assert!(request.params.contains(&("page".to_string(), "2".to_string())));
    }

    #[test]
    fn failed_navigation_restores_previous_position_and_results() {
        let mut controller = loaded_on_second_page();
        assert!(controller.advance());
        assert_eq!(controller.current_page(), 3);

        let request = controller.begin_refresh().expect("valid filters");
        let outcome = controller.finish_refresh(
            request.generation,
            Err(ApiError::Network("connection reset".to_string())),
        );

        assert_eq!(outcome, RefreshOutcome::Failed(ListingError::NetworkFailure));
        assert_eq!(controller.current_page(), 2);
        assert!(controller.can_advance());
        assert_eq!(controller.current_dogs(), &[dog("d2")]);
        assert_eq!(controller.error(), Some(&ListingError::NetworkFailure));
        assert!(!controller.is_loading());
    }

    #[test]
    fn initial_failure_exposes_empty_set_and_error() {
        let mut controller = DogListingController::new();
        let request = controller.begin_refresh().expect("valid filters");

        controller.finish_refresh(request.generation, Err(ApiError::Network("down".to_string())));

        assert!(controller.current_dogs().is_empty());
        assert_eq!(controller.error(), Some(&ListingError::NetworkFailure));
        controller.dismiss_error();
        assert_eq!(controller.error(), None);
    }

    #[test]
    fn unauthorized_discards_session_state() {
        let mut controller = loaded_on_second_page();
        controller.toggle_favorite(&DogId::from("d2"));

        let request = controller.begin_refresh().expect("valid filters");
        let outcome = controller.finish_refresh(request.generation, Err(ApiError::Unauthorized));

        assert_eq!(outcome, RefreshOutcome::Failed(ListingError::Unauthorized));
        assert!(controller.current_dogs().is_empty());
        assert!(controller.favorites().is_empty());
        assert_eq!(controller.current_page(), 1);
    }

    #[test]
    fn stale_generation_is_ignored() {
        let mut controller = DogListingController::new();
        let first = controller.begin_refresh().expect("valid filters");
        controller.toggle_breed("Pug");
        let second = controller.begin_refresh().expect("valid filters");

        assert_eq!(
            controller.finish_refresh(second.generation, Ok(page(&["b"], 1, None, None))),
            RefreshOutcome::Applied
        );
        assert_eq!(
            controller.finish_refresh(first.generation, Ok(page(&["a"], 1, None, None))),
            RefreshOutcome::Stale
        );
        assert_eq!(controller.current_dogs(), &[dog("b")]);
    }

    #[test]
    fn reset_session_makes_in_flight_responses_stale() {
        let mut controller = DogListingController::new();
        let request = controller.begin_refresh().expect("valid filters");
        controller.toggle_favorite(&DogId::from("d1"));

        controller.reset_session();

        assert_eq!(
            controller.finish_refresh(request.generation, Ok(page(&["d1"], 1, None, None))),
            RefreshOutcome::Stale
        );
        assert!(controller.favorites().is_empty());
        assert!(!controller.is_loading());
    }

    fn filter_msg() -> impl Strategy<Value = FilterMsg> {
        let breed = prop::sample::select(vec!["Pug", "Akita", "Boxer"]);
        prop_oneof![
            proptest::collection::btree_set(breed.clone().prop_map(str::to_string), 0..3)
                .prop_map(FilterMsg::SetBreeds),
            breed.prop_map(|name| FilterMsg::ToggleBreed(name.to_string())),
            (proptest::option::of(0u32..15), proptest::option::of(0u32..15))
                .prop_map(|(min, max)| FilterMsg::SetAgeRange(min, max)),
            "[a-z]{0,4}".prop_map(FilterMsg::SetSearchQuery),
            any::<bool>().prop_map(|desc| FilterMsg::SetSortOrder(if desc {
                SortOrder::Desc
            } else {
                SortOrder::Asc
            })),
            Just(FilterMsg::ToggleSortOrder),
            Just(FilterMsg::Clear),
        ]
    }

    proptest! {
        #[test]
        fn applied_filter_change_returns_to_first_page(
            steps in proptest::collection::vec(any::<bool>(), 0..12),
            msg in filter_msg(),
        ) {
            let mut controller = DogListingController::new();
            let request = controller.begin_refresh().expect("valid filters");
            controller.finish_refresh(
                request.generation,
                Ok(page(&["d0"], 1_000, Some("/dogs/search?from=20"), None)),
            );
            for forward in steps {
                let moved = if forward { controller.advance() } else { controller.retreat() };
                if !moved {
                    continue;
                }
                let offset = u64::from(controller.current_page() - 1) * 20;
                let next = format!("/dogs/search?from={}", offset + 20);
                let prev = (offset > 0).then(|| format!("/dogs/search?from={}", offset - 20));
                let request = controller.begin_refresh().expect("valid filters");
                controller.finish_refresh(
                    request.generation,
                    Ok(page(&["d"], 1_000, Some(&next), prev.as_deref())),
                );
            }
            let before = controller.cursor.clone();
            let filters_before = controller.filters().clone();

            match controller.dispatch(msg) {
                Ok(true) => {
                    prop_assert_eq!(controller.current_page(), 1);
                    prop_assert!(controller.cursor.next().is_none());
                    prop_assert!(controller.cursor.prev().is_none());
                    prop_assert!(controller.cursor.active_cursor().is_none());
                }
                Ok(false) => prop_assert_eq!(&controller.cursor, &before),
                Err(err) => {
                    prop_assert!(matches!(err, ListingError::Validation(_)));
                    prop_assert_eq!(&controller.cursor, &before);
                    prop_assert_eq!(controller.filters(), &filters_before);
                }
            }
        }
    }
}
