use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::core::error::AppError;
use crate::core::ApiResponse;
use crate::modules::items::models::{CreateItemRequest, UpdateItemRequest};
use crate::modules::items::services::ItemService;

/// Query parameters for name search
#[derive(Debug, Default, Deserialize)]
pub struct SearchItemsQuery {
    #[serde(default)]
    pub q: Option<String>,
}

/// Create an item directly under a category
/// POST /items/{categoryId}
pub async fn create_item(
    service: web::Data<Arc<ItemService>>,
    path: web::Path<String>,
    request: web::Json<CreateItemRequest>,
) -> Result<HttpResponse, AppError> {
    let item = service
        .create_item(&path.into_inner(), None, request.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(item)))
}

/// Create an item under a subcategory
/// POST /items/{categoryId}/{subCategoryId}
pub async fn create_item_in_subcategory(
    service: web::Data<Arc<ItemService>>,
    path: web::Path<(String, String)>,
    request: web::Json<CreateItemRequest>,
) -> Result<HttpResponse, AppError> {
    let (category_id, sub_category_id) = path.into_inner();
    let item = service
        .create_item(&category_id, Some(&sub_category_id), request.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(item)))
}

/// List all items
/// GET /items
pub async fn list_items(service: web::Data<Arc<ItemService>>) -> Result<HttpResponse, AppError> {
    let items = service.list_items().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(items)))
}

/// List items of a category, including those under its subcategories
/// GET /items/by-category/{categoryId}
pub async fn list_by_category(
    service: web::Data<Arc<ItemService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let items = service.list_by_category(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(items)))
}

/// List items of a subcategory
/// GET /items/by-subcategory/{subCategoryId}
pub async fn list_by_subcategory(
    service: web::Data<Arc<ItemService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let items = service.list_by_subcategory(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(items)))
}

/// Search items by name
/// GET /items/search/name?q=...
pub async fn search_items(
    service: web::Data<Arc<ItemService>>,
    query: web::Query<SearchItemsQuery>,
) -> Result<HttpResponse, AppError> {
    let items = service.search_items(query.q.as_deref()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(items)))
}

/// Get item by ID or name
/// GET /items/{idOrName}
pub async fn get_item(
    service: web::Data<Arc<ItemService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let item = service.get_item(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(item)))
}

/// Update item
/// PUT /items/{id}
pub async fn update_item(
    service: web::Data<Arc<ItemService>>,
    path: web::Path<String>,
    request: web::Json<UpdateItemRequest>,
) -> Result<HttpResponse, AppError> {
    let item = service
        .update_item(&path.into_inner(), request.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(item)))
}

/// Configure item routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/items")
            .route("", web::get().to(list_items))
            .route("/search/name", web::get().to(search_items))
            .route("/by-category/{category_id}", web::get().to(list_by_category))
            .route(
                "/by-subcategory/{sub_category_id}",
                web::get().to(list_by_subcategory),
            )
            .route("/{id}", web::post().to(create_item))
            .route("/{id}", web::get().to(get_item))
            .route("/{id}", web::put().to(update_item))
            .route(
                "/{category_id}/{sub_category_id}",
                web::post().to(create_item_in_subcategory),
            ),
    );
}
