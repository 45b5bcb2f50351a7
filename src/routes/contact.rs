use axum::{
    body::Bytes,
    extract::{FromRequest, Multipart, Request, State},
    http::header,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::SignedCookieJar;
use getdev_contact::{ContactSubmission, Notice};
use std::convert::Infallible;

use crate::{
    flash,
    routes::AppState,
    template::{Template, filters},
};

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub notice: Option<Notice>,
}

/// Contact form body, read from urlencoded or multipart payloads. A body
/// that cannot be read yields an empty submission, never a rejection.
pub struct ContactForm(pub ContactSubmission);

impl<S: Send + Sync> FromRequest<S> for ContactForm {
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|content_type| content_type.starts_with("multipart/form-data"));

        let submission = if is_multipart {
            match Multipart::from_request(req, state).await {
                Ok(multipart) => read_multipart(multipart).await,
                Err(err) => {
                    tracing::debug!(error = %err, "Unreadable multipart contact form");
                    ContactSubmission::default()
                }
            }
        } else {
            let bytes = Bytes::from_request(req, state).await.unwrap_or_default();

            serde_urlencoded::from_bytes(&bytes).unwrap_or_else(|err| {
                tracing::debug!(error = %err, "Unreadable contact form body");
                ContactSubmission::default()
            })
        };

        Ok(ContactForm(submission))
    }
}

async fn read_multipart(mut multipart: Multipart) -> ContactSubmission {
    let mut submission = ContactSubmission::default();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(err) => {
                tracing::debug!(error = %err, "Stopped reading multipart contact form");
                break;
            }
        };

        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };

        let Ok(value) = field.text().await else {
            continue;
        };

        let slot = match name.as_str() {
            "name" => &mut submission.name,
            "email" => &mut submission.email,
            "subject" => &mut submission.subject,
            "service_interest" => &mut submission.service_interest,
            "message" => &mut submission.message,
            _ => continue,
        };

        *slot = Some(value);
    }

    submission
}

pub async fn page(template: Template, jar: SignedCookieJar) -> impl IntoResponse {
    let (jar, notice) = flash::take(jar);

    (jar, template.render(ContactTemplate { notice }))
}

pub async fn action(
    template: Template,
    State(app_state): State<AppState>,
    jar: SignedCookieJar,
    ContactForm(input): ContactForm,
) -> Response {
    let notice = getdev_contact::submit(
        app_state.mailer.clone(),
        app_state.config.mail.default_sender(),
        &input,
    )
    .await;

    if notice.is_success() {
        return (flash::put(jar, &notice), Redirect::to("/contact")).into_response();
    }

    // Submitted values are not echoed back into the form.
    template.render(ContactTemplate {
        notice: Some(notice),
    })
}
