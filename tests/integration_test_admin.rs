mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::{json, Value};

async fn complete(app: &TestApp, session: &str, booking: &Value) {
    let res = app.post(
        &format!("/api/v1/bookings/{}/complete", booking["id"].as_str().unwrap()),
        json!({ "payment_method": "tigopesa" }),
        Some(session),
    ).await;
    assert_eq!(res.body["success"], true);
}

#[tokio::test]
async fn test_dashboard_counts_completed_only() {
    let app = TestApp::new().await;
    let session = app.new_session().await;

    let empty = app.get("/api/v1/admin/stats", None).await;
    assert_eq!(empty.status, StatusCode::OK);
    assert_eq!(empty.body["total_movies"], 6);
    assert_eq!(empty.body["total_showtimes"], 6);
    assert_eq!(empty.body["total_bookings"], 0);
    assert_eq!(empty.body["total_revenue"], 0);

    let paid = app.book(&session, "u1", "1", "1", &[(5, 1), (5, 2), (1, 1)]).await;
    complete(&app, &session, &paid).await;
    app.book(&session, "u2", "3", "4", &[(6, 6)]).await;

    let stats = app.get("/api/v1/admin/stats", None).await;
    assert_eq!(stats.body["total_bookings"], 2);
    assert_eq!(stats.body["total_revenue"], 55000);
    assert_eq!(stats.body["tickets_sold"], 3);
}

#[tokio::test]
async fn test_search_and_status_filter() {
    let app = TestApp::new().await;
    let session = app.new_session().await;

    let wakanda = app.book(&session, "alice", "1", "1", &[(3, 3)]).await;
    complete(&app, &session, &wakanda).await;
    let inception = app.book(&session, "bob", "3", "4", &[(3, 3)]).await;

    let by_title = app.get("/api/v1/admin/bookings?search=incep", None).await;
    let hits = by_title.body.as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["id"], inception["id"]);

    let by_user = app.get("/api/v1/admin/bookings?search=ALICE", None).await;
    assert_eq!(by_user.body.as_array().unwrap()[0]["id"], wakanda["id"]);

    let by_id = app.get(&format!("/api/v1/admin/bookings?search={}", inception["id"].as_str().unwrap()), None).await;
    assert_eq!(by_id.body.as_array().unwrap().len(), 1);

    let pending = app.get("/api/v1/admin/bookings?status=pending", None).await;
    assert_eq!(pending.body.as_array().unwrap().len(), 1);
    assert_eq!(pending.body[0]["user_id"], "bob");

    let all = app.get("/api/v1/admin/bookings?status=all", None).await;
    assert_eq!(all.body.as_array().unwrap().len(), 2);

    let bad = app.get("/api/v1/admin/bookings?status=refunded", None).await;
    assert_eq!(bad.status, StatusCode::BAD_REQUEST);
}
