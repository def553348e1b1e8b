use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::core::error::AppError;
use crate::core::ApiResponse;
use crate::modules::categories::models::{CreateCategoryRequest, UpdateCategoryRequest};
use crate::modules::categories::services::CategoryService;

/// Query parameters for fetching a single category
#[derive(Debug, Default, Deserialize)]
pub struct GetCategoryQuery {
    #[serde(default)]
    pub expand: Option<String>,
}

impl GetCategoryQuery {
    /// Only the literal `true` expands the category
    pub fn is_expanded(&self) -> bool {
        self.expand.as_deref() == Some("true")
    }
}

/// Create a new category
/// POST /categories
pub async fn create_category(
    service: web::Data<Arc<CategoryService>>,
    request: web::Json<CreateCategoryRequest>,
) -> Result<HttpResponse, AppError> {
    let category = service.create_category(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(category)))
}

/// List all categories
/// GET /categories
pub async fn list_categories(
    service: web::Data<Arc<CategoryService>>,
) -> Result<HttpResponse, AppError> {
    let categories = service.list_categories().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(categories)))
}

/// Get category by ID or name
/// GET /categories/{idOrName}?expand=true
pub async fn get_category(
    service: web::Data<Arc<CategoryService>>,
    path: web::Path<String>,
    query: web::Query<GetCategoryQuery>,
) -> Result<HttpResponse, AppError> {
    let detail = service
        .get_category(&path.into_inner(), query.is_expanded())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(detail)))
}

/// Update category
/// PUT /categories/{id}
pub async fn update_category(
    service: web::Data<Arc<CategoryService>>,
    path: web::Path<String>,
    request: web::Json<UpdateCategoryRequest>,
) -> Result<HttpResponse, AppError> {
    let category = service
        .update_category(&path.into_inner(), request.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(category)))
}

/// Configure category routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/categories")
            .route("", web::post().to(create_category))
            .route("", web::get().to(list_categories))
            .route("/{id}", web::get().to(get_category))
            .route("/{id}", web::put().to(update_category)),
    );
}
