// Contract tests for the catalog response envelope
//
// Every endpoint answers with {success, data} on success and
// {success: false, message} on failure. Field names are camelCase and
// amounts are JSON numbers.

#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::http::StatusCode;
use helpers::*;
use serde_json::json;

#[actix_web::test]
async fn test_category_schema() {
    let srv = spawn_test_server();

    let res = post_json(
        &srv,
        "/categories",
        &TestDataFactory::taxed_category_payload("Beverages", 5.0, "percentage"),
    )
    .await;
    assert_created(&res);

    let category = res.data();
    assert!(category["id"].is_string(), "id must be string");
    assert_eq!(category["name"], "Beverages");
    assert!(category["image"].is_string());
    assert!(category["description"].is_string());
    assert_eq!(category["taxApplicable"], true);
    assert_amount(&category["tax"], 5.0);
    assert_eq!(category["taxType"], "percentage");
    assert!(category["createdAt"].is_string());
    assert!(category["updatedAt"].is_string());
}

#[actix_web::test]
async fn test_category_defaults() {
    let srv = spawn_test_server();

    let res = post_json(&srv, "/categories", &TestDataFactory::category_payload("Snacks")).await;
    assert_created(&res);

    let category = res.data();
    assert_eq!(category["taxApplicable"], false);
    assert_amount(&category["tax"], 0.0);
    assert_eq!(category["taxType"], "unknown");
}

#[actix_web::test]
async fn test_item_schema() {
    let srv = spawn_test_server();
    let category = post_json(&srv, "/categories", &TestDataFactory::category_payload("Mains")).await;
    let category_id = category.data()["id"].as_str().unwrap().to_string();

    let res = post_json(
        &srv,
        &format!("/items/{}", category_id),
        &TestDataFactory::item_payload("Burger", 12.5, 2.5),
    )
    .await;
    assert_created(&res);

    let item = res.data();
    assert_eq!(item["category"], category_id.as_str());
    assert!(item["subCategory"].is_null());
    assert_amount(&item["baseAmount"], 12.5);
    assert_amount(&item["discount"], 2.5);
    assert_amount(&item["totalAmount"], 10.0);
    assert_eq!(item["taxApplicable"], false);
}

#[actix_web::test]
async fn test_list_endpoints_return_arrays() {
    let srv = spawn_test_server();

    for path in ["/categories", "/subcategories", "/items", "/items/search/name"] {
        let res = get_json(&srv, path).await;
        assert_ok(&res);
        assert!(res.data().is_array(), "{} must return an array", path);
    }
}

#[actix_web::test]
async fn test_not_found_envelope() {
    let srv = spawn_test_server();

    let res = get_json(&srv, "/categories/Nonexistent").await;
    assert_not_found(&res);
    assert_eq!(res.body["message"], "Category not found");
    assert!(res.body.get("data").is_none());
}

#[actix_web::test]
async fn test_validation_envelope() {
    let srv = spawn_test_server();

    let res = post_json(&srv, "/categories", &json!({ "name": "   " })).await;
    assert_bad_request(&res);
    assert_eq!(res.body["message"], "Category name is required");
    assert!(res.body["detail"].is_string(), "detail is exposed outside production");
}

#[actix_web::test]
async fn test_malformed_json_envelope() {
    let srv = spawn_test_server();

    let res = post_raw(&srv, "/categories", "{\"name\": ").await;
    assert_bad_request(&res);
}

#[actix_web::test]
async fn test_unknown_route_envelope() {
    let srv = spawn_test_server();

    let res = get_json(&srv, "/menus").await;
    assert_failure(&res, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_request_id_header_is_echoed() {
    let srv = spawn_test_server();

    let response = srv
        .get("/health")
        .insert_header(("X-Request-ID", "contract-42"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get("x-request-id").unwrap(), "contract-42");
}
