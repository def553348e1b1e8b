use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::core::ApiResponse;
use crate::modules::subcategories::models::{CreateSubCategoryRequest, UpdateSubCategoryRequest};
use crate::modules::subcategories::services::SubCategoryService;

/// Create a subcategory under a category
/// POST /subcategories/{categoryId}
pub async fn create_subcategory(
    service: web::Data<Arc<SubCategoryService>>,
    path: web::Path<String>,
    request: web::Json<CreateSubCategoryRequest>,
) -> Result<HttpResponse, AppError> {
    let subcategory = service
        .create_subcategory(&path.into_inner(), request.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(subcategory)))
}

/// List all subcategories
/// GET /subcategories
pub async fn list_subcategories(
    service: web::Data<Arc<SubCategoryService>>,
) -> Result<HttpResponse, AppError> {
    let subcategories = service.list_subcategories().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(subcategories)))
}

/// List subcategories of a category
/// GET /subcategories/by-category/{categoryId}
pub async fn list_by_category(
    service: web::Data<Arc<SubCategoryService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let subcategories = service.list_by_category(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(subcategories)))
}

/// Get subcategory by ID or name, with its items
/// GET /subcategories/{idOrName}
pub async fn get_subcategory(
    service: web::Data<Arc<SubCategoryService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let detail = service.get_subcategory(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(detail)))
}

/// Update subcategory
/// PUT /subcategories/{id}
pub async fn update_subcategory(
    service: web::Data<Arc<SubCategoryService>>,
    path: web::Path<String>,
    request: web::Json<UpdateSubCategoryRequest>,
) -> Result<HttpResponse, AppError> {
    let subcategory = service
        .update_subcategory(&path.into_inner(), request.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(subcategory)))
}

/// Configure subcategory routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/subcategories")
            .route("", web::get().to(list_subcategories))
            .route("/by-category/{category_id}", web::get().to(list_by_category))
            .route("/{id}", web::post().to(create_subcategory))
            .route("/{id}", web::get().to(get_subcategory))
            .route("/{id}", web::put().to(update_subcategory)),
    );
}
