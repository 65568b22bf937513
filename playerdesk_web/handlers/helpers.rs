use askama::Template;
use axum::{
    extract::{Form, FromRef, FromRequest, FromRequestParts, Request},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::{
    SignedCookieJar,
    cookie::{Cookie, Key, SameSite},
};
use rust_i18n::t;
use serde::{Deserialize, de::DeserializeOwned};
use uuid::Uuid;

use playerdesk_types::errors::{ApiError, AppError, ApplicationError};

use crate::templates::{ErrorTemplate, TemplateLayout};

const CSRF_COOKIE: &str = "csrf_token";
pub const CSRF_HEADER: &str = "x-csrf-token";

/// Helper: render a Template to HTML or return 500 on error
pub fn render_template<T: Template>(template: T, status: Option<StatusCode>) -> Response {
    match template.render() {
        Ok(html) => (status.unwrap_or(StatusCode::OK), Html(html)).into_response(),
        Err(err) => {
            tracing::error!("Template render error: {}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error.").into_response()
        }
    }
}

/// Maps an error that ends the request to a rendered error page.
pub fn error_response(err: &ApplicationError) -> Response {
    let (status, title, message) = match err {
        ApplicationError::App(AppError::PlayerNotFound(_)) => {
            tracing::info!("{err}");
            (
                StatusCode::NOT_FOUND,
                t!("errors.not_found_title"),
                t!("errors.not_found"),
            )
        }
        ApplicationError::Api(ApiError::Http(_))
        | ApplicationError::Api(ApiError::UnexpectedStatus { .. })
        | ApplicationError::Api(ApiError::MalformedBody { .. }) => {
            tracing::error!("Remote API failure: {err}");
            (
                StatusCode::BAD_GATEWAY,
                t!("errors.remote_title"),
                t!("errors.remote"),
            )
        }
        _ => {
            tracing::error!("Request failed: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                t!("errors.internal_title"),
                t!("errors.internal"),
            )
        }
    };

    let template = ErrorTemplate {
        layout: TemplateLayout::new("", Vec::new()),
        title: title.to_string(),
        message: message.to_string(),
    };
    render_template(template, Some(status))
}

/// Forms carrying the hidden CSRF field.
pub trait HasCsrfToken {
    fn csrf_token(&self) -> &str;
}

/// Returns the CSRF token stored in the signed cookie, minting one on first use.
pub fn generate_csrf(jar: SignedCookieJar) -> (SignedCookieJar, String) {
    if let Some(cookie) = jar.get(CSRF_COOKIE) {
        let token = cookie.value().to_string();
        return (jar, token);
    }

    let token = Uuid::new_v4().simple().to_string();
    let cookie = Cookie::build((CSRF_COOKIE, token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);
    (jar.add(cookie), token)
}

/// Form extractor that rejects submissions whose CSRF field does not match the cookie.
pub struct CsrfForm<T> {
    pub jar: SignedCookieJar,
    pub form: T,
}

impl<S, T> FromRequest<S> for CsrfForm<T>
where
    S: Send + Sync,
    Key: FromRef<S>,
    T: DeserializeOwned + HasCsrfToken + Send,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();
        let jar = SignedCookieJar::<Key>::from_request_parts(&mut parts, state)
            .await
            .map_err(IntoResponse::into_response)?;

        let req = Request::from_parts(parts, body);
        let Form(form) = Form::<T>::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        verify_csrf(&jar, form.csrf_token())?;
        Ok(CsrfForm { jar, form })
    }
}

/// CSRF check for actions that carry no payload, such as deletions.
///
/// The token is read from the `X-CSRF-Token` header when present, so a bare
/// `DELETE` works; otherwise from the `csrf_token` field of a urlencoded body.
pub struct CsrfGuard {
    pub jar: SignedCookieJar,
}

#[derive(Deserialize)]
struct CsrfOnlyForm {
    #[serde(default)]
    csrf_token: String,
}

impl<S> FromRequest<S> for CsrfGuard
where
    S: Send + Sync,
    Key: FromRef<S>,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();
        let jar = SignedCookieJar::<Key>::from_request_parts(&mut parts, state)
            .await
            .map_err(IntoResponse::into_response)?;

        let header = parts
            .headers
            .get(CSRF_HEADER)
            .map(|value| value.to_str().unwrap_or_default().to_string());

        let submitted = match header {
            Some(token) => token,
            None => {
                let req = Request::from_parts(parts, body);
                let Form(form) = Form::<CsrfOnlyForm>::from_request(req, state)
                    .await
                    .map_err(IntoResponse::into_response)?;
                form.csrf_token
            }
        };

        verify_csrf(&jar, &submitted)?;
        Ok(CsrfGuard { jar })
    }
}

fn verify_csrf(jar: &SignedCookieJar, submitted: &str) -> Result<(), Response> {
    match jar.get(CSRF_COOKIE) {
        Some(cookie) if !cookie.value().is_empty() && cookie.value() == submitted => Ok(()),
        _ => {
            tracing::warn!("Rejected form submission with an invalid CSRF token");
            Err((StatusCode::FORBIDDEN, "Invalid CSRF token.").into_response())
        }
    }
}
