// Test Helper Modules for Real Endpoint Testing
//
// Spawns the full application over a real HTTP listener backed by the
// in-memory catalog store, plus payload factories and assertions.
//
// Usage:
//   #[path = "../helpers/mod.rs"]
//   mod helpers;
//   use helpers::*;
//
// Example:
//   #[actix_web::test]
//   async fn test_category_creation() {
//       let srv = spawn_test_server();
//       let res = post_json(&srv, "/categories", &TestDataFactory::category_payload("Beverages")).await;
//       assert_created(&res);
//   }

#![allow(dead_code)]

pub mod assertions;

pub use assertions::*;
pub use test_data::*;
pub use test_server::*;
