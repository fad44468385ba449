use axum::{
    extract::{FromRequestParts, FromRef},
    http::request::Parts,
};
use crate::state::AppState;
use crate::domain::models::session::SessionState;
use crate::error::AppError;
use std::sync::Arc;
use time::Duration;
use tower_cookies::{Cookies, Cookie};
use tower_cookies::cookie::SameSite;
use tracing::{debug, Span};

pub const SESSION_COOKIE: &str = "cinema_session";

/// The caller's session, loaded from the `cinema_session` cookie. A new id is
/// minted and set on the response when the cookie is missing; state for an
/// unknown id starts empty. Handlers persist changes with `session_repo.save`.
pub struct CurrentSession(pub SessionState);

impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);

        let cookies = parts.extensions.get::<Cookies>().cloned()
            .ok_or(AppError::InternalWithMsg("CookieManagerLayer is not installed".into()))?;

        let existing = cookies.get(SESSION_COOKIE)
            .map(|c| c.value().to_string())
            .filter(|v| !v.is_empty());

        let session_id = match existing {
            Some(id) => id,
            None => {
                let id = SessionState::generate_id();
                cookies.add(session_cookie(id.clone(), app_state.config.session_ttl_hours));
                debug!("Minted new session {}", id);
                id
            }
        };
        Span::current().record("session_id", session_id.as_str());

        let session = app_state.session_repo.find_by_id(&session_id).await?
            .unwrap_or_else(|| SessionState::new(session_id));

        Ok(CurrentSession(session))
    }
}

fn session_cookie(id: String, ttl_hours: i64) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, id);
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_path("/");
    cookie.set_max_age(Duration::seconds(ttl_hours.saturating_mul(3600)));
    cookie
}
