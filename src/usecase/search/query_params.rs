use crate::domain::entities::filter::FilterState;
use crate::usecase::search::cursor::{Cursor, PAGE_SIZE};

pub type SearchParams = Vec<(String, String)>;

/// Maps a filter snapshot and pagination position to search query pairs.
///
/// Breeds repeat the `breeds` key once per breed, in name order, so the
/// same input always yields the same sequence.
pub fn build_search_params(filters: &FilterState, page: u32, cursor: Option<&Cursor>) -> SearchParams {
    let mut params = SearchParams::new();

    for breed in filters.breeds() {
        params.push(("breeds".to_string(), breed.clone()));
    }
    if let Some(min) = filters.age_min() {
        params.push(("ageMin".to_string(), min.to_string()));
    }
    if let Some(max) = filters.age_max() {
        params.push(("ageMax".to_string(), max.to_string()));
    }
    params.push((
        "sort".to_string(),
        format!("breed:{}", filters.sort_order().as_str()),
    ));
    params.push(("size".to_string(), PAGE_SIZE.to_string()));
    params.push(("page".to_string(), page.to_string()));
    if !filters.search_query().is_empty() {
        params.push(("search".to_string(), filters.search_query().to_string()));
    }
    if let Some(cursor) = cursor {
        params.push(("from".to_string(), cursor.as_str().to_string()));
    }

    params
}

/// Url-encoded form of [`build_search_params`], used for request logging.
pub fn encode_search_params(params: &SearchParams) -> String {
    serde_urlencoded::to_string(params).unwrap_or_default()
}
