// End-to-end catalog flow over HTTP
//
// Beverages (5% tax) -> Hot Drinks inherits the tax -> Latte priced 100
// with 10 off -> discount raised to 20 -> expanded category and search.

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::*;
use serde_json::json;

struct Menu {
    category_id: String,
    sub_category_id: String,
    item_id: String,
}

async fn seed_menu(srv: &TestServer) -> Menu {
    let category = post_json(
        srv,
        "/categories",
        &TestDataFactory::taxed_category_payload("Beverages", 5.0, "percentage"),
    )
    .await;
    assert_created(&category);
    let category_id = category.data()["id"].as_str().unwrap().to_string();

    let sub = post_json(
        srv,
        &format!("/subcategories/{}", category_id),
        &TestDataFactory::subcategory_payload("Hot Drinks"),
    )
    .await;
    assert_created(&sub);
    let sub_category_id = sub.data()["id"].as_str().unwrap().to_string();

    let item = post_json(
        srv,
        &format!("/items/{}/{}", category_id, sub_category_id),
        &TestDataFactory::item_payload("Latte", 100.0, 10.0),
    )
    .await;
    assert_created(&item);
    let item_id = item.data()["id"].as_str().unwrap().to_string();

    Menu {
        category_id,
        sub_category_id,
        item_id,
    }
}

#[actix_web::test]
async fn test_full_menu_scenario() {
    let srv = spawn_test_server();
    let menu = seed_menu(&srv).await;

    // Hot Drinks inherited both tax fields from Beverages
    let sub = get_json(&srv, "/subcategories/Hot%20Drinks").await;
    assert_ok(&sub);
    assert_eq!(sub.data()["taxApplicable"], true);
    assert_amount(&sub.data()["tax"], 5.0);
    assert_eq!(sub.data()["items"].as_array().unwrap().len(), 1);

    // Latte inherited from Hot Drinks and carries its total
    let latte = get_json(&srv, &format!("/items/{}", menu.item_id)).await;
    assert_ok(&latte);
    assert_eq!(latte.data()["taxApplicable"], true);
    assert_amount(&latte.data()["tax"], 5.0);
    assert_amount(&latte.data()["totalAmount"], 90.0);
    assert_eq!(latte.data()["categoryName"], "Beverages");
    assert_eq!(latte.data()["subCategoryName"], "Hot Drinks");

    // Raising the discount recomputes against the stored base amount
    let updated = put_json(
        &srv,
        &format!("/items/{}", menu.item_id),
        &json!({ "discount": 20 }),
    )
    .await;
    assert_ok(&updated);
    assert_amount(&updated.data()["baseAmount"], 100.0);
    assert_amount(&updated.data()["totalAmount"], 80.0);

    // Expanded view groups Latte under Hot Drinks
    let expanded = get_json(&srv, "/categories/Beverages?expand=true").await;
    assert_ok(&expanded);
    let data = expanded.data();
    assert_eq!(data["subcategories"].as_array().unwrap().len(), 1);
    assert_eq!(data["subcategories"][0]["name"], "Hot Drinks");
    assert!(data["itemsUnderCategory"].as_array().unwrap().is_empty());
    let grouped = data["itemsBySubCategory"][menu.sub_category_id.as_str()]
        .as_array()
        .unwrap();
    assert_eq!(grouped.len(), 1);
    assert_eq!(grouped[0]["name"], "Latte");

    // Case-insensitive substring search
    let found = get_json(&srv, "/items/search/name?q=lat").await;
    assert_ok(&found);
    let found = found.data().as_array().unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["id"], menu.item_id.as_str());
}

#[actix_web::test]
async fn test_lookup_by_id_and_name_agree() {
    let srv = spawn_test_server();
    let menu = seed_menu(&srv).await;

    let by_id = get_json(&srv, &format!("/categories/{}", menu.category_id)).await;
    let by_name = get_json(&srv, "/categories/Beverages").await;
    assert_ok(&by_id);
    assert_ok(&by_name);
    assert_eq!(by_id.data()["id"], by_name.data()["id"]);

    let item_by_name = get_json(&srv, "/items/Latte").await;
    assert_ok(&item_by_name);
    assert_eq!(item_by_name.data()["id"], menu.item_id.as_str());

    let sub_by_id = get_json(&srv, &format!("/subcategories/{}", menu.sub_category_id)).await;
    assert_ok(&sub_by_id);
    assert_eq!(sub_by_id.data()["name"], "Hot Drinks");
}

#[actix_web::test]
async fn test_unexpanded_category_has_no_children() {
    let srv = spawn_test_server();
    seed_menu(&srv).await;

    for path in ["/categories/Beverages", "/categories/Beverages?expand=false"] {
        let res = get_json(&srv, path).await;
        assert_ok(&res);
        assert!(res.data().get("subcategories").is_none());
        assert!(res.data().get("itemsBySubCategory").is_none());
    }
}

#[actix_web::test]
async fn test_unknown_lookups_are_not_found() {
    let srv = spawn_test_server();
    seed_menu(&srv).await;

    assert_not_found(&get_json(&srv, "/categories/Desserts").await);
    assert_not_found(&get_json(&srv, "/subcategories/Cold%20Drinks").await);
    assert_not_found(&get_json(&srv, "/items/Mocha").await);
    assert_not_found(
        &get_json(&srv, &format!("/items/{}", uuid::Uuid::new_v4())).await,
    );
}

#[actix_web::test]
async fn test_missing_parents_are_not_found() {
    let srv = spawn_test_server();
    let menu = seed_menu(&srv).await;
    let missing = uuid::Uuid::new_v4().to_string();

    let res = post_json(
        &srv,
        &format!("/subcategories/{}", missing),
        &TestDataFactory::subcategory_payload("Cold Drinks"),
    )
    .await;
    assert_not_found(&res);
    assert_eq!(res.body["message"], "Parent category not found");

    let res = post_json(
        &srv,
        &format!("/items/{}/{}", menu.category_id, missing),
        &TestDataFactory::item_payload("Mocha", 5.0, 0.0),
    )
    .await;
    assert_not_found(&res);

    let res = post_json(
        &srv,
        "/items/not-a-uuid",
        &TestDataFactory::item_payload("Mocha", 5.0, 0.0),
    )
    .await;
    assert_not_found(&res);
}

#[actix_web::test]
async fn test_scoped_listings() {
    let srv = spawn_test_server();
    let menu = seed_menu(&srv).await;

    let water = post_json(
        &srv,
        &format!("/items/{}", menu.category_id),
        &TestDataFactory::item_payload("Water", 2.0, 0.0),
    )
    .await;
    assert_created(&water);

    let by_category = get_json(&srv, &format!("/items/by-category/{}", menu.category_id)).await;
    assert_ok(&by_category);
    assert_eq!(by_category.data().as_array().unwrap().len(), 2);

    let by_sub = get_json(
        &srv,
        &format!("/items/by-subcategory/{}", menu.sub_category_id),
    )
    .await;
    assert_ok(&by_sub);
    let by_sub = by_sub.data().as_array().unwrap();
    assert_eq!(by_sub.len(), 1);
    assert_eq!(by_sub[0]["name"], "Latte");

    let subs = get_json(
        &srv,
        &format!("/subcategories/by-category/{}", menu.category_id),
    )
    .await;
    assert_ok(&subs);
    assert_eq!(subs.data().as_array().unwrap().len(), 1);

    let all_subs = get_json(&srv, "/subcategories").await;
    assert_ok(&all_subs);
    assert_eq!(all_subs.data()[0]["categoryName"], "Beverages");

    let expanded = get_json(&srv, "/categories/Beverages?expand=true").await;
    let direct = expanded.data()["itemsUnderCategory"].as_array().unwrap();
    assert_eq!(direct.len(), 1);
    assert_eq!(direct[0]["name"], "Water");

    let missing = get_json(
        &srv,
        &format!("/items/by-category/{}", uuid::Uuid::new_v4()),
    )
    .await;
    assert_not_found(&missing);
}

#[actix_web::test]
async fn test_parent_tax_update_does_not_reach_children() {
    let srv = spawn_test_server();
    let menu = seed_menu(&srv).await;

    let res = put_json(
        &srv,
        &format!("/categories/{}", menu.category_id),
        &json!({ "tax": 18, "taxApplicable": false }),
    )
    .await;
    assert_ok(&res);
    assert_amount(&res.data()["tax"], 18.0);

    let sub = get_json(&srv, &format!("/subcategories/{}", menu.sub_category_id)).await;
    assert_amount(&sub.data()["tax"], 5.0);
    assert_eq!(sub.data()["taxApplicable"], true);

    let item = get_json(&srv, &format!("/items/{}", menu.item_id)).await;
    assert_amount(&item.data()["tax"], 5.0);
}

#[actix_web::test]
async fn test_repeated_update_is_idempotent() {
    let srv = spawn_test_server();
    let menu = seed_menu(&srv).await;
    let path = format!("/subcategories/{}", menu.sub_category_id);
    let payload = json!({ "description": "Served hot", "tax": 7 });

    let first = put_json(&srv, &path, &payload).await;
    let second = put_json(&srv, &path, &payload).await;
    assert_ok(&first);
    assert_ok(&second);

    for field in ["name", "description", "tax", "taxApplicable", "category"] {
        assert_eq!(first.data()[field], second.data()[field], "{} changed", field);
    }
}

#[actix_web::test]
async fn test_duplicate_names_are_rejected() {
    let srv = spawn_test_server();
    let menu = seed_menu(&srv).await;

    let res = post_json(&srv, "/categories", &TestDataFactory::category_payload("Beverages")).await;
    assert_bad_request(&res);

    let res = post_json(
        &srv,
        &format!("/subcategories/{}", menu.category_id),
        &TestDataFactory::subcategory_payload("Hot Drinks"),
    )
    .await;
    assert_bad_request(&res);
}

#[actix_web::test]
async fn test_item_in_foreign_subcategory_is_rejected() {
    let srv = spawn_test_server();
    let menu = seed_menu(&srv).await;

    let desserts = post_json(&srv, "/categories", &TestDataFactory::category_payload("Desserts")).await;
    let desserts_id = desserts.data()["id"].as_str().unwrap().to_string();

    let res = post_json(
        &srv,
        &format!("/items/{}/{}", desserts_id, menu.sub_category_id),
        &TestDataFactory::item_payload("Affogato", 6.0, 0.0),
    )
    .await;
    assert_bad_request(&res);
}

#[actix_web::test]
async fn test_readiness_on_in_memory_store() {
    let srv = spawn_test_server();

    let res = get_json(&srv, "/ready").await;
    assert_eq!(res.status, actix_web::http::StatusCode::OK);
    assert_eq!(res.body["ready"], true);
}
