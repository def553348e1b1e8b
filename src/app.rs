//! Application assembly shared by the binary and the HTTP test harness.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{http::header, web};

use crate::config::CorsConfig;
use crate::middleware::json_error_handler;
use crate::modules::categories::{self, CategoryService};
use crate::modules::health;
use crate::modules::items::{self, ItemService};
use crate::modules::store::CatalogStore;
use crate::modules::subcategories::{self, SubCategoryService};

/// Services built once per process and shared across workers
#[derive(Clone)]
pub struct AppServices {
    pub store: CatalogStore,
    pub categories: Arc<CategoryService>,
    pub subcategories: Arc<SubCategoryService>,
    pub items: Arc<ItemService>,
}

impl AppServices {
    pub fn new(store: CatalogStore) -> Self {
        Self {
            categories: Arc::new(CategoryService::new(&store)),
            subcategories: Arc::new(SubCategoryService::new(&store)),
            items: Arc::new(ItemService::new(&store)),
            store,
        }
    }

    /// Register shared state, extractor config and every route
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::Data::new(self.store.clone()))
            .app_data(web::Data::new(self.categories.clone()))
            .app_data(web::Data::new(self.subcategories.clone()))
            .app_data(web::Data::new(self.items.clone()))
            .configure(health::configure)
            .configure(categories::controllers::configure)
            .configure(subcategories::controllers::configure)
            .configure(items::controllers::configure);
    }
}

/// Build the CORS layer; an empty origin list allows any origin
pub fn cors(config: &CorsConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .allowed_header("x-request-id")
        .expose_headers(vec!["x-request-id"])
        .max_age(3600);

    if config.allows_any_origin() {
        return cors.allow_any_origin();
    }

    config
        .allowed_origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}
