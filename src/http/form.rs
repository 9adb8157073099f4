/// Lenient form extraction for `POST /add`
/// 
/// Accepts url-encoded and multipart bodies. A body that is missing,
/// malformed or has no `name` field yields an empty name, so the route
/// always gets to redirect.

use axum::{
    extract::{FromRequest, Multipart, Request},
    http::header,
    Form,
};
use std::convert::Infallible;

use crate::handlers::CreateHabitParams;

/// Habit form fields, never rejected
#[derive(Debug, Default)]
pub struct HabitForm(pub CreateHabitParams);

fn is_multipart(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.starts_with("multipart/form-data"))
        .unwrap_or(false)
}

async fn name_from_multipart(mut multipart: Multipart) -> Option<String> {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return None,
            Err(e) => {
                tracing::debug!("Unreadable multipart body: {}", e);
                return None;
            }
        };
        if field.name() == Some("name") {
            return field.text().await.ok();
        }
    }
}

impl<S> FromRequest<S> for HabitForm
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let params = if is_multipart(&req) {
            match Multipart::from_request(req, state).await {
                Ok(multipart) => CreateHabitParams {
                    name: name_from_multipart(multipart).await.unwrap_or_default(),
                },
                Err(e) => {
                    tracing::debug!("Rejected multipart form: {}", e);
                    CreateHabitParams::default()
                }
            }
        } else {
            match Form::<CreateHabitParams>::from_request(req, state).await {
                Ok(Form(params)) => params,
                Err(e) => {
                    tracing::debug!("Treating unreadable form as empty: {}", e);
                    CreateHabitParams::default()
                }
            }
        };

        Ok(HabitForm(params))
    }
}
