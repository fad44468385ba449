use cinema_booking::{
    api::router::create_router,
    config::{Config, OccupancyMode},
    infra::factory::bootstrap_state,
    state::AppState,
};
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub const SESSION_COOKIE: &str = "cinema_session";

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
    pub session: Option<String>,
}

#[allow(dead_code)]
impl TestApp {
    /// Booking-derived occupancy keeps seat layouts deterministic.
    pub async fn new() -> Self {
        Self::with_config(Config {
            port: 0,
            occupancy_mode: OccupancyMode::Booked,
            ..Config::default()
        })
        .await
    }

    pub async fn with_config(config: Config) -> Self {
        let state = Arc::new(bootstrap_state(&config).await);
        let router = create_router(state.clone());
        Self { router, state }
    }

    pub async fn request(&self, method: &str, uri: &str, body: Option<Value>, session: Option<&str>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(id) = session {
            builder = builder.header(header::COOKIE, format!("{}={}", SESSION_COOKIE, id));
        }
        let req = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let session = session_from_headers(&response);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse { status, body, session }
    }

    pub async fn get(&self, uri: &str, session: Option<&str>) -> TestResponse {
        self.request("GET", uri, None, session).await
    }

    pub async fn post(&self, uri: &str, body: Value, session: Option<&str>) -> TestResponse {
        self.request("POST", uri, Some(body), session).await
    }

    /// Mints a fresh session through the API and returns its id.
    pub async fn new_session(&self) -> String {
        let res = self.get("/api/v1/session/selection", None).await;
        assert_eq!(res.status, StatusCode::OK);
        res.session.expect("No session cookie returned")
    }

    pub async fn start_selection(&self, session: &str, movie_id: &str, showtime_id: &str) -> TestResponse {
        let res = self.post(
            "/api/v1/session/selection",
            serde_json::json!({ "movie_id": movie_id, "showtime_id": showtime_id }),
            Some(session),
        ).await;
        assert_eq!(res.status, StatusCode::OK, "start selection failed: {}", res.body);
        res
    }

    pub async fn toggle(&self, session: &str, row: u32, seat_number: u32) -> TestResponse {
        self.post(
            "/api/v1/session/selection/toggle",
            serde_json::json!({ "row": row, "seat_number": seat_number }),
            Some(session),
        ).await
    }

    /// Selects the seats and books them for `user_id`, returning the booking.
    pub async fn book(&self, session: &str, user_id: &str, movie_id: &str, showtime_id: &str, seats: &[(u32, u32)]) -> Value {
        self.start_selection(session, movie_id, showtime_id).await;
        for &(row, seat_number) in seats {
            assert_eq!(self.toggle(session, row, seat_number).await.status, StatusCode::OK);
        }
        let res = self.post(
            "/api/v1/bookings",
            serde_json::json!({ "user_id": user_id, "movie_id": movie_id, "showtime_id": showtime_id }),
            Some(session),
        ).await;
        assert_eq!(res.status, StatusCode::CREATED, "booking failed: {}", res.body);
        res.body
    }
}

fn session_from_headers(response: &axum::response::Response) -> Option<String> {
    let prefix = format!("{}=", SESSION_COOKIE);
    response.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .find(|c| c.starts_with(&prefix))
        .map(|c| {
            let value = &c[prefix.len()..];
            value.split(';').next().unwrap_or(value).to_string()
        })
}
