use std::sync::Arc;

use dioxus::prelude::*;

use crate::domain::entities::breeds::BreedCatalog;
use crate::infra::http::client::HttpAdoptionApi;
use crate::usecase::ports::adoption_api::{AdoptionApi, ApiError};
use crate::usecase::services::dog_service::DogService;
use crate::usecase::services::listing_controller::DogListingController;
use crate::usecase::services::match_service::MatchService;
use crate::usecase::services::session_service::SessionService;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub destructive: bool,
}

/// Session-wide UI state shared through context.
#[derive(Clone, Copy)]
pub struct AppState {
    pub listing: Signal<DogListingController>,
    pub breeds: Signal<Option<BreedCatalog>>,
    pub notice: Signal<Option<Notice>>,
}

impl AppState {
    /// Must run inside a component scope; the signals are owned by it.
    pub fn new() -> Self {
        Self {
            listing: Signal::new(DogListingController::new()),
            breeds: Signal::new(None),
            notice: Signal::new(None),
        }
    }

    pub fn info(&mut self, title: &str, description: &str) {
        self.notice.set(Some(Notice {
            title: title.to_string(),
            description: description.to_string(),
            destructive: false,
        }));
    }

    pub fn error(&mut self, title: &str, description: &str) {
        self.notice.set(Some(Notice {
            title: title.to_string(),
            description: description.to_string(),
            destructive: true,
        }));
    }

    pub fn dismiss_notice(&mut self) {
        self.notice.set(None);
        self.listing.write().dismiss_error();
    }

    /// Clears everything tied to the logged-in user.
    pub fn end_session(&mut self) {
        self.listing.write().reset_session();
        self.breeds.set(None);
    }

    pub fn has_breeds(&self) -> bool {
        self.breeds.read().is_some()
    }
}

#[derive(Clone)]
pub struct Services {
    pub api: Arc<dyn AdoptionApi>,
    pub dogs: DogService,
    pub matches: MatchService,
    pub session: SessionService,
}

impl Services {
    pub fn new(api: Arc<dyn AdoptionApi>) -> Self {
        Self {
            dogs: DogService::new(api.clone()),
            matches: MatchService::new(api.clone()),
            session: SessionService::new(api.clone()),
            api,
        }
    }

    pub fn connect(api_base_url: &str) -> Result<Self, ApiError> {
        let api = HttpAdoptionApi::new(api_base_url)?;
        Ok(Self::new(Arc::new(api)))
    }
}
