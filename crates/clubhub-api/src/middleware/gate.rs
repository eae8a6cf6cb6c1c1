//! The staff authorization gate (tower layer).
//!
//! Runs before every handler, including the fallback. Public routes —
//! the portal surface and its APIs, webhooks, sign-in — are forwarded
//! without consulting the verifier at all; portal handlers enforce their
//! own sessions. Staff surfaces require a verified provider credential:
//! API routes fail with a JSON 401 body, browser-navigable pages are
//! redirected to sign-in instead.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use tracing::debug;

use clubhub_auth::gate::{GateDecision, RouteClass, classify, decide};
use clubhub_core::error::AppError;

use crate::extractors::StaffSubject;
use crate::state::AppState;

/// Gate middleware applied to the whole router.
pub async fn staff_gate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let class = classify(request.uri().path());

    let subject = match class {
        RouteClass::Public => None,
        RouteClass::Api | RouteClass::Protected => {
            let jar = CookieJar::from_headers(request.headers());
            let raw = jar
                .get(&state.config.auth.provider_cookie_name)
                .map(|c| c.value().to_string());
            state.identity_verifier.verify(raw.as_deref()).await
        }
    };

    match decide(class, subject.as_deref()) {
        GateDecision::Forward => {
            if let Some(subject) = subject {
                request.extensions_mut().insert(StaffSubject(subject));
            }
            next.run(request).await
        }
        GateDecision::Unauthorized => {
            debug!(path = %request.uri().path(), "Gate rejected unauthenticated API request");
            AppError::unauthenticated("Staff authentication required").into_response()
        }
        GateDecision::RedirectToSignIn => {
            debug!(path = %request.uri().path(), "Gate redirecting to sign-in");
            Redirect::to(&state.config.auth.sign_in_path).into_response()
        }
    }
}
