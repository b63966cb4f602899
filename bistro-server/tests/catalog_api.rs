mod common;

use axum::body::Body;
use common::TestApp;
use http::{Request, StatusCode};

#[tokio::test]
async fn front_workers() {
    let app = TestApp::seeded().await;

    for uri in ["/frontworkers", "/frontworkers/"] {
        let (status, workers) = app.get_json(uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(workers.as_array().unwrap().len(), 2);
    }

    let (status, worker) = app.get_json("/frontworkers/frontWorkerID=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(worker["frontWorkerID"], 2);
    assert_eq!(worker["firstName"], "Leo");
    assert_eq!(worker["lastName"], "Cruz");

    let (status, err) = app.get_json("/frontworkers/frontWorkerID=9").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err["code"], 4001);

    let (status, err) = app.get_json("/frontworkers/frontWorkerID=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["code"], 5);
}

#[tokio::test]
async fn back_workers() {
    let app = TestApp::seeded().await;

    let (status, workers) = app.get_json("/backworkers/all").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(workers[1]["backWorkerID"], 2);

    let (status, worker) = app.get_json("/backworkers/backWorkerID=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(worker["firstName"], "Sam");

    let (status, err) = app.get_json("/backworkers/backWorkerID=3").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err["code"], 4002);
}

#[tokio::test]
async fn food_items() {
    let app = TestApp::seeded().await;

    let (status, items) = app.get_json("/foods/items/all").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(items.as_array().unwrap().len(), 3);
    assert_eq!(items[0]["foodItemID"], 1);
    assert_eq!(items[0]["foodTypeID"], 1);
    assert_eq!(items[0]["price"], 12.5);

    let (_, mains) = app.get_json("/foods/items/foodTypeID=1").await;
    assert_eq!(mains.as_array().unwrap().len(), 2);

    let (status, drinks) = app.get_json("/foods/items/foodTypeID=3").await;
    assert_eq!(status, StatusCode::OK);
    assert!(drinks.as_array().unwrap().is_empty());

    let (status, err) = app.get_json("/foods/items/foodTypeID=8").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err["code"], 5002);
}

#[tokio::test]
async fn food_items_grouped_by_type_name() {
    let app = TestApp::seeded().await;

    let (status, grouped) = app.get_json("/foods/items/grouped=true").await;
    assert_eq!(status, StatusCode::OK);

    let grouped = grouped.as_object().unwrap();
    assert_eq!(grouped.len(), 3);
    assert_eq!(grouped["Mains"].as_array().unwrap().len(), 2);
    assert_eq!(grouped["Desserts"][0]["name"], "Flan");
    assert!(grouped["Drinks"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn ingredients_and_tags() {
    let app = TestApp::seeded().await;

    let (_, ingredients) = app.get_json("/foods/ingredients").await;
    assert_eq!(ingredients.as_array().unwrap().len(), 3);
    let (_, tags) = app.get_json("/foods/tags").await;
    assert_eq!(tags.as_array().unwrap().len(), 2);

    let (_, burger) = app.get_json("/foods/ingredients/foodItemID=1").await;
    let names: Vec<&str> = burger
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Beef", "Lettuce"]);

    let (_, salad_tags) = app.get_json("/foods/tags/foodItemID=2").await;
    assert_eq!(salad_tags.as_array().unwrap().len(), 2);
    assert_eq!(salad_tags[0]["tagID"], 1);

    let (status, err) = app.get_json("/foods/tags/foodItemID=50").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err["code"], 5001);
}

#[tokio::test]
async fn food_item_details() {
    let app = TestApp::seeded().await;

    let (status, details) = app.get_json("/foods/items/details/foodItemID=3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(details["Ingredients"][0]["name"], "Egg");
    assert_eq!(details["Tags"][0]["name"], "vegetarian");

    let (status, err) = app.get_json("/foods/items/details/foodItemID=77").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err["code"], 5001);
}

#[tokio::test]
async fn health_endpoints() {
    let app = TestApp::new().await;

    let (status, health) = app.get_json("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "ok");
    assert_eq!(health["version"], env!("CARGO_PKG_VERSION"));

    let (status, detailed) = app.get_json("/health/detailed").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detailed["status"], "ok");
    assert_eq!(detailed["checks"]["database"]["status"], "ok");
    assert!(detailed["checks"]["database"]["latency_ms"].is_u64());
}

#[tokio::test]
async fn responses_carry_request_id() {
    let app = TestApp::new().await;

    let response = app
        .send(Request::get("/health").body(Body::empty()).unwrap())
        .await;
    let id = response.headers().get("x-request-id").unwrap();
    assert_eq!(id.to_str().unwrap().len(), 36);

    let response = app
        .send(
            Request::get("/health")
                .header("x-request-id", "client-supplied")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(response.headers()["x-request-id"], "client-supplied");
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = TestApp::new().await;

    let (status, err) = app.get_json("/orders/grouped=false").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err["code"], 3);
    assert_eq!(err["message"], "No route for /orders/grouped=false");
}
