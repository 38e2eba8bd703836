use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::breeds::BreedCatalog;
use crate::domain::entities::category::FEATURED_LIMIT;
use crate::domain::entities::dog::{Dog, DogId};
use crate::usecase::ports::adoption_api::{AdoptionApi, ApiError};
use crate::usecase::search::query_params::SearchParams;

/// Read-only lookups outside the paginated listing.
#[derive(Clone)]
pub struct DogService {
    api: Arc<dyn AdoptionApi>,
}

impl DogService {
    pub fn new(api: Arc<dyn AdoptionApi>) -> Self {
        Self { api }
    }

    pub async fn breed_catalog(&self) -> Result<BreedCatalog, ApiError> {
        let names = self.api.breeds().await?;
        debug!(count = names.len(), "loaded breed catalog");
        Ok(BreedCatalog::new(names))
    }

    /// `None` when the service does not know the id.
    pub async fn fetch_dog(&self, id: &DogId) -> Result<Option<Dog>, ApiError> {
        let dogs = self.api.dogs(std::slice::from_ref(id)).await?;
        Ok(dogs.into_iter().find(|dog| &dog.id == id))
    }

    /// First few dogs of an unfiltered search, for the explore pages.
    pub async fn featured_dogs(&self) -> Result<Vec<Dog>, ApiError> {
        let response = self.api.search(&SearchParams::new()).await?;
        if response.result_ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<DogId> = response.result_ids.into_iter().take(FEATURED_LIMIT).collect();
        self.api.dogs(&ids).await
    }
}
