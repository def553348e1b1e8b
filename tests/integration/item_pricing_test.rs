// Item pricing over HTTP
//
// Covers amount coercion on input and recomputation of totalAmount on
// partial updates.

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::*;
use serde_json::json;

async fn create_category(srv: &TestServer) -> String {
    let res = post_json(
        srv,
        "/categories",
        &TestDataFactory::category_payload(&TestDataFactory::unique_name("Menu")),
    )
    .await;
    assert_created(&res);
    res.data()["id"].as_str().unwrap().to_string()
}

async fn create_item(srv: &TestServer, category_id: &str, payload: serde_json::Value) -> ApiResult {
    post_json(srv, &format!("/items/{}", category_id), &payload).await
}

#[actix_web::test]
async fn test_numeric_strings_are_accepted() {
    let srv = spawn_test_server();
    let category_id = create_category(&srv).await;

    let res = create_item(
        &srv,
        &category_id,
        json!({ "name": "Tea", "baseAmount": "40", "discount": "5.5" }),
    )
    .await;
    assert_created(&res);
    assert_amount(&res.data()["baseAmount"], 40.0);
    assert_amount(&res.data()["totalAmount"], 34.5);
}

#[actix_web::test]
async fn test_non_numeric_amounts_count_as_zero() {
    let srv = spawn_test_server();
    let category_id = create_category(&srv).await;

    let res = create_item(
        &srv,
        &category_id,
        json!({ "name": "Tea", "baseAmount": 40, "discount": "free" }),
    )
    .await;
    assert_created(&res);
    assert_amount(&res.data()["discount"], 0.0);
    assert_amount(&res.data()["totalAmount"], 40.0);
}

#[actix_web::test]
async fn test_missing_amounts_default_to_zero() {
    let srv = spawn_test_server();
    let category_id = create_category(&srv).await;

    let res = create_item(&srv, &category_id, json!({ "name": "Tap Water" })).await;
    assert_created(&res);
    assert_amount(&res.data()["baseAmount"], 0.0);
    assert_amount(&res.data()["discount"], 0.0);
    assert_amount(&res.data()["totalAmount"], 0.0);
}

#[actix_web::test]
async fn test_client_total_is_ignored() {
    let srv = spawn_test_server();
    let category_id = create_category(&srv).await;

    let res = create_item(
        &srv,
        &category_id,
        json!({ "name": "Tea", "baseAmount": 10, "discount": 1, "totalAmount": 999 }),
    )
    .await;
    assert_created(&res);
    assert_amount(&res.data()["totalAmount"], 9.0);
}

#[actix_web::test]
async fn test_base_only_update_uses_stored_discount() {
    let srv = spawn_test_server();
    let category_id = create_category(&srv).await;
    let item = create_item(
        &srv,
        &category_id,
        TestDataFactory::item_payload("Cake", 30.0, 5.0),
    )
    .await;
    let id = item.data()["id"].as_str().unwrap().to_string();

    let res = put_json(&srv, &format!("/items/{}", id), &json!({ "baseAmount": 50 })).await;
    assert_ok(&res);
    assert_amount(&res.data()["discount"], 5.0);
    assert_amount(&res.data()["totalAmount"], 45.0);
}

#[actix_web::test]
async fn test_update_without_amounts_keeps_total() {
    let srv = spawn_test_server();
    let category_id = create_category(&srv).await;
    let item = create_item(
        &srv,
        &category_id,
        TestDataFactory::item_payload("Cake", 30.0, 5.0),
    )
    .await;
    let id = item.data()["id"].as_str().unwrap().to_string();

    let res = put_json(
        &srv,
        &format!("/items/{}", id),
        &json!({ "name": "Cheesecake", "discount": null }),
    )
    .await;
    assert_ok(&res);
    assert_eq!(res.data()["name"], "Cheesecake");
    assert_amount(&res.data()["discount"], 5.0);
    assert_amount(&res.data()["totalAmount"], 25.0);
}

#[actix_web::test]
async fn test_negative_amounts_are_stored_as_given() {
    let srv = spawn_test_server();
    let category_id = create_category(&srv).await;

    let res = create_item(
        &srv,
        &category_id,
        TestDataFactory::item_payload("Refund", -1.0, 0.0),
    )
    .await;
    assert_created(&res);
    assert_amount(&res.data()["totalAmount"], -1.0);

    let id = res.data()["id"].as_str().unwrap().to_string();
    let res = put_json(&srv, &format!("/items/{}", id), &json!({ "discount": -2 })).await;
    assert_ok(&res);
    assert_amount(&res.data()["totalAmount"], 1.0);
}

#[actix_web::test]
async fn test_overflowing_amounts_are_rejected() {
    let srv = spawn_test_server();
    let category_id = create_category(&srv).await;

    let res = create_item(
        &srv,
        &category_id,
        json!({
            "name": "Overflow",
            "baseAmount": "79228162514264337593543950335",
            "discount": "-1"
        }),
    )
    .await;
    assert_bad_request(&res);
    assert_eq!(res.body["message"], "amount out of range");

    let item = create_item(
        &srv,
        &category_id,
        TestDataFactory::item_payload("Cake", 10.0, 0.0),
    )
    .await;
    assert_created(&item);
    let id = item.data()["id"].as_str().unwrap().to_string();

    let res = put_json(
        &srv,
        &format!("/items/{}", id),
        &json!({ "baseAmount": "79228162514264337593543950335", "discount": "-1" }),
    )
    .await;
    assert_bad_request(&res);

    // The server keeps serving after a rejected amount
    let res = get_json(&srv, &format!("/items/{}", id)).await;
    assert_ok(&res);
    assert_amount(&res.data()["totalAmount"], 10.0);
}

#[actix_web::test]
async fn test_amounts_are_rounded_to_stored_scale() {
    let srv = spawn_test_server();
    let category_id = create_category(&srv).await;

    let res = create_item(
        &srv,
        &category_id,
        json!({ "name": "Espresso", "baseAmount": "1.00005", "discount": "0.00004" }),
    )
    .await;
    assert_created(&res);
    assert_amount(&res.data()["baseAmount"], 1.0001);
    assert_amount(&res.data()["discount"], 0.0);
    assert_amount(&res.data()["totalAmount"], 1.0001);
}

#[actix_web::test]
async fn test_discount_above_base_gives_negative_total() {
    let srv = spawn_test_server();
    let category_id = create_category(&srv).await;

    let res = create_item(
        &srv,
        &category_id,
        TestDataFactory::item_payload("Promo", 5.0, 8.0),
    )
    .await;
    assert_created(&res);
    assert_amount(&res.data()["totalAmount"], -3.0);
}

#[actix_web::test]
async fn test_non_numeric_tax_is_rejected() {
    let srv = spawn_test_server();
    let category_id = create_category(&srv).await;

    let res = create_item(&srv, &category_id, json!({ "name": "Tea", "tax": "lots" })).await;
    assert_bad_request(&res);
}

#[actix_web::test]
async fn test_update_unknown_item_is_not_found() {
    let srv = spawn_test_server();

    let res = put_json(
        &srv,
        &format!("/items/{}", uuid::Uuid::new_v4()),
        &json!({ "discount": 1 }),
    )
    .await;
    assert_not_found(&res);

    let res = put_json(&srv, "/items/Latte", &json!({ "discount": 1 })).await;
    assert_not_found(&res);
}
