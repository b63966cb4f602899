mod common;

use common::TestApp;
use http::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn tables_are_listed_in_id_order() {
    let app = TestApp::seeded().await;

    let (status, tables) = app.get_json("/tables/all").await;
    assert_eq!(status, StatusCode::OK);

    let tables = tables.as_array().unwrap();
    let ids: Vec<i64> = tables.iter().map(|t| t["tableID"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 5]);

    let booth = &tables[0];
    assert_eq!(booth["typeName"], "booth");
    assert_eq!(booth["capacity"], 4);
    assert_eq!(booth["customerID"], Value::Null);
    assert_eq!(booth["frontWorkerID"], Value::Null);
    assert_eq!(booth["workerName"], Value::Null);
    assert_eq!(booth["seatingTime"], Value::Null);
}

#[tokio::test]
async fn clear_vacates_table_idempotently() {
    let app = TestApp::seeded().await;
    app.post_form(
        "/customers/waitlist/enqueue",
        "groupSize=4&phoneNumber=555-1234&firstName=Ann&lastName=Lee",
    )
    .await;
    app.post_form(
        "/customers/waitlist/dequeue",
        "customerID=1&tableID=5&frontWorkerID=2",
    )
    .await;
    assert_eq!(app.table(5).await["customerID"], 1);

    for _ in 0..2 {
        let (status, body) = app.post_form("/tables/clear", "tableID=5").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());

        let table = app.table(5).await;
        assert_eq!(table["customerID"], Value::Null);
        assert_eq!(table["frontWorkerID"], Value::Null);
    }

    // The freed table can be used again
    app.post_form(
        "/customers/waitlist/enqueue",
        "groupSize=3&phoneNumber=555-9999&firstName=Cy&lastName=Ng",
    )
    .await;
    let (status, _) = app
        .post_form("/customers/waitlist/dequeue", "customerID=2&tableID=5")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(app.table(5).await["customerID"], 2);
}

#[tokio::test]
async fn clear_unknown_table_is_not_found() {
    let app = TestApp::seeded().await;

    let (status, err) = app.post_form_err("/tables/clear", "tableID=404").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err["code"], 2001);

    let (status, err) = app.post_form_err("/tables/clear", "tableID=five").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["code"], 6);
}

#[tokio::test]
async fn orders_list_and_group() {
    let app = TestApp::seeded().await;

    let (status, orders) = app.get_json("/orders/all").await;
    assert_eq!(status, StatusCode::OK);
    let orders = orders.as_array().unwrap();
    assert_eq!(orders.len(), 3);
    assert_eq!(orders[0]["orderID"], 10);
    assert_eq!(orders[0]["backWorkerID"], Value::Null);

    let (_, grouped) = app.get_json("/orders/grouped=true").await;
    assert_eq!(grouped["Upcoming"].as_array().unwrap().len(), 3);
    assert!(grouped["Completed"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn assign_back_worker_completes_order() {
    let app = TestApp::seeded().await;

    let (status, body) = app
        .post_form("/orders/update/backWorkerID", "orderID=11&backWorkerID=2")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OrderID: 11, backWorkerID: 2");

    let (_, grouped) = app.get_json("/orders/grouped=true").await;
    let completed: Vec<i64> = grouped["Completed"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["orderID"].as_i64().unwrap())
        .collect();
    let upcoming: Vec<i64> = grouped["Upcoming"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["orderID"].as_i64().unwrap())
        .collect();
    assert_eq!(completed, vec![11]);
    assert_eq!(upcoming, vec![10, 12]);

    // Reassignment overwrites
    let (status, _) = app
        .post_form("/orders/update/backWorkerID", "orderID=11&backWorkerID=1")
        .await;
    assert_eq!(status, StatusCode::OK);
    let (_, grouped) = app.get_json("/orders/grouped=true").await;
    assert_eq!(grouped["Completed"][0]["backWorkerID"], 1);
}

#[tokio::test]
async fn assign_back_worker_rejects_unknown_ids() {
    let app = TestApp::seeded().await;

    let (status, err) = app
        .post_form_err("/orders/update/backWorkerID", "orderID=999&backWorkerID=1")
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err["code"], 3001);

    let (status, err) = app
        .post_form_err("/orders/update/backWorkerID", "orderID=10&backWorkerID=999")
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err["code"], 4002);

    let (_, grouped) = app.get_json("/orders/grouped=true").await;
    assert!(grouped["Completed"].as_array().unwrap().is_empty());
}
