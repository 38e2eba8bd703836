mod app;
mod config;
mod logging;

mod domain {
    pub mod errors;
    pub mod entities {
        pub mod breeds;
        pub mod category;
        pub mod dog;
        pub mod favorites;
        pub mod filter;
    }
}

mod usecase {
    pub mod ports {
        pub mod adoption_api;
    }
    pub mod search {
        pub mod cursor;
        pub mod query_params;
    }
    pub mod services {
        pub mod dog_service;
        pub mod listing_controller;
        pub mod match_service;
        pub mod session_service;
    }
}

mod infra {
    pub mod http {
        pub mod client;
    }
}

mod ui {
    pub mod pages {
        pub mod details;
        pub mod dogs;
        pub mod explore;
        pub mod login;
        pub mod matched;
    }
    pub mod state {
        pub mod app_state;
    }
}


use config::AppConfig;

fn main() {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("falling back to default config: {err:#}");
            AppConfig::default()
        }
    };
    logging::configure_logging(&config);
    tracing::info!(api = %config.api_base_url, "starting Pawfect Match");

    let builder = dioxus::LaunchBuilder::new().with_context(config);

    #[cfg(feature = "desktop")]
    let builder = builder.with_cfg(
        dioxus::desktop::Config::new()
            .with_window(dioxus::desktop::WindowBuilder::new().with_title("Pawfect Match")),
    );

    builder.launch(app::App);
}
