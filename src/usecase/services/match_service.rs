use std::sync::Arc;

use rand::Rng;
use tracing::info;

use crate::domain::entities::dog::DogId;
use crate::domain::entities::favorites::FavoritesSet;
use crate::domain::errors::ListingError;
use crate::usecase::ports::adoption_api::AdoptionApi;

#[derive(Clone)]
pub struct MatchService {
    api: Arc<dyn AdoptionApi>,
}

impl MatchService {
    pub fn new(api: Arc<dyn AdoptionApi>) -> Self {
        Self { api }
    }

    /// Sends exactly one randomly chosen favorite to the match endpoint.
    /// An empty set fails before anything is sent.
    pub async fn find_match<R: Rng + ?Sized>(
        &self,
        favorites: &FavoritesSet,
        rng: &mut R,
    ) -> Result<DogId, ListingError> {
        let candidate = favorites.pick_one_for_match(rng)?.clone();
        let matched = self.api.match_dog(std::slice::from_ref(&candidate)).await?;
        info!(%candidate, %matched, "match found");
        Ok(matched)
    }
}
