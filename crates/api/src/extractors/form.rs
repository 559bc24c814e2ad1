//! Form body extractors.
//!
//! Bodies may be `application/x-www-form-urlencoded` or `multipart/form-data`.
//! Decoding failures and field validation failures are both reported as
//! [`ApiError::Validation`], so every 400 carries the JSON error body.

use axum::{
    extract::{multipart::MultipartError, FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
    Form,
};
use serde::de::DeserializeOwned;
use shared::pagination::PageRequest;
use validator::Validate;

use crate::error::ApiError;

/// URL-encoded or multipart form body that has passed `validator` checks.
#[derive(Debug, Clone)]
pub struct ValidatedForm<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for ValidatedForm<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let value: T = decode_form(req, state).await?;
        value.validate()?;
        Ok(ValidatedForm(value))
    }
}

/// Pagination window sent as a form body.
///
/// A request without a body (no content type) gets the default window.
#[derive(Debug, Clone, Copy)]
pub struct PageForm(pub PageRequest);

#[axum::async_trait]
impl<S> FromRequest<S> for PageForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !req.headers().contains_key(CONTENT_TYPE) {
            return Ok(PageForm(PageRequest::default()));
        }

        Ok(PageForm(decode_form(req, state).await?))
    }
}

fn is_multipart(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim_start().to_ascii_lowercase().starts_with("multipart/form-data"))
        .unwrap_or(false)
}

async fn decode_form<T, S>(req: Request, state: &S) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    if !is_multipart(&req) {
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
        return Ok(value);
    }

    let mut multipart = Multipart::from_request(req, state)
        .await
        .map_err(|rejection| ApiError::Validation(rejection.body_text()))?;

    let mut fields: Vec<(String, String)> = Vec::new();
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        let value = field.text().await.map_err(multipart_error)?;
        fields.push((name, value));
    }

    // Re-encoding lets multipart fields go through the same decoder as
    // url-encoded bodies, so numeric fields parse identically.
    let encoded = serde_urlencoded::to_string(&fields)
        .map_err(|e| ApiError::Internal(format!("Failed to re-encode form fields: {}", e)))?;
    serde_urlencoded::from_str(&encoded)
        .map_err(|e| ApiError::Validation(format!("Failed to deserialize form body: {}", e)))
}

fn multipart_error(err: MultipartError) -> ApiError {
    ApiError::Validation(err.body_text())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Method;
    use domain::models::{RegisterMentorRequest, SearchMentorsRequest};

    const BOUNDARY: &str = "mentorhubboundary";

    fn form_request(body: &str) -> Request {
        axum::http::Request::builder()
            .method(Method::POST)
            .uri("/")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn multipart_request(fields: &[(&str, &str)]) -> Request {
        let mut body = String::new();
        for (name, value) in fields {
            body.push_str(&format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            ));
        }
        body.push_str(&format!("--{BOUNDARY}--\r\n"));

        axum::http::Request::builder()
            .method(Method::POST)
            .uri("/")
            .header(
                CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_validated_form_accepts_valid_body() {
        let ValidatedForm(search) =
            ValidatedForm::<SearchMentorsRequest>::from_request(form_request("expertise=data"), &())
                .await
                .unwrap();
        assert_eq!(search.expertise, "data");
    }

    #[tokio::test]
    async fn test_validated_form_rejects_missing_field() {
        let result =
            ValidatedForm::<SearchMentorsRequest>::from_request(form_request(""), &()).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[tokio::test]
    async fn test_validated_form_rejects_invalid_field() {
        let result =
            ValidatedForm::<SearchMentorsRequest>::from_request(form_request("expertise="), &())
                .await;
        assert!(matches!(result, Err(ApiError::Validation(m)) if m.contains("expertise")));
    }

    #[tokio::test]
    async fn test_validated_form_reads_multipart() {
        let request = multipart_request(&[
            ("name", "Grace"),
            ("age", "85"),
            ("location", "Arlington"),
            ("expertise", "Compilers"),
            ("experience", "40"),
        ]);
        let ValidatedForm(mentor) =
            ValidatedForm::<RegisterMentorRequest>::from_request(request, &())
                .await
                .unwrap();
        assert_eq!(mentor.name, "Grace");
        assert_eq!(mentor.age, 85);
        assert_eq!(mentor.experience, 40);
    }

    #[tokio::test]
    async fn test_validated_form_multipart_missing_field() {
        let request = multipart_request(&[("name", "Grace"), ("age", "85")]);
        let result = ValidatedForm::<RegisterMentorRequest>::from_request(request, &()).await;
        assert!(matches!(result, Err(ApiError::Validation(m)) if m.contains("missing field")));
    }

    #[tokio::test]
    async fn test_validated_form_multipart_non_numeric() {
        let request = multipart_request(&[
            ("name", "Grace"),
            ("age", "old"),
            ("location", "Arlington"),
            ("expertise", "Compilers"),
            ("experience", "40"),
        ]);
        let result = ValidatedForm::<RegisterMentorRequest>::from_request(request, &()).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[tokio::test]
    async fn test_page_form_without_body_uses_defaults() {
        let request = axum::http::Request::builder()
            .method(Method::POST)
            .uri("/")
            .body(Body::empty())
            .unwrap();
        let PageForm(page) = PageForm::from_request(request, &()).await.unwrap();
        assert_eq!(page, PageRequest::default());
    }

    #[tokio::test]
    async fn test_page_form_reads_values() {
        let PageForm(page) = PageForm::from_request(form_request("skip=5&limit=2"), &())
            .await
            .unwrap();
        assert_eq!(page, PageRequest::new(5, 2));
    }

    #[tokio::test]
    async fn test_page_form_reads_multipart() {
        let request = multipart_request(&[("skip", "3")]);
        let PageForm(page) = PageForm::from_request(request, &()).await.unwrap();
        assert_eq!(page, PageRequest::new(3, 10));
    }

    #[tokio::test]
    async fn test_page_form_rejects_negative_skip() {
        let result = PageForm::from_request(form_request("skip=-1"), &()).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }
}
