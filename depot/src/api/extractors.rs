//! Request extractors that reject with the crate's [`Error`] envelope instead of axum's
//! plain-text rejections.
//!
//! - [`ValidatedJson`]: JSON body bound with serde, then checked with `validator` (422)
//! - [`IdPath`]: integer `{id}` path segment (400)
//! - [`ReportQuery`]: optional integer `?id=` filter for count reports (400)

use crate::errors::Error;
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use serde::{Deserialize, de::DeserializeOwned};
use utoipa::IntoParams;
use validator::{Validate, ValidationErrors};

/// JSON body that has been deserialized and validated.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| Error::Unprocessable {
                message: rejection.body_text(),
            })?;

        value.validate().map_err(|errors| Error::Unprocessable {
            message: describe_validation_errors(&errors),
        })?;

        Ok(Self(value))
    }
}

/// Flattens validation failures into `field: message` pairs, sorted by field.
pub(crate) fn describe_validation_errors(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| match &err.message {
                Some(message) => format!("{field}: {message}"),
                None => format!("{field}: {}", err.code),
            })
        })
        .collect();
    parts.sort();

    if parts.is_empty() {
        "Invalid request body".to_string()
    } else {
        parts.join("; ")
    }
}

/// The integer `{id}` segment of an entity route.
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| Error::BadRequest {
                message: format!("Invalid id: {}", rejection.body_text()),
            })?;

        Ok(Self(id))
    }
}

/// Query parameters accepted by the count report endpoints
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReportParams {
    /// Restrict the report to a single parent record
    pub id: Option<i32>,
}

/// The optional `?id=` filter of a count report.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportQuery(pub Option<i32>);

impl<S> FromRequestParts<S> for ReportQuery
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<ReportParams>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| Error::BadRequest {
                message: rejection.body_text(),
            })?;

        Ok(Self(params.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, http::StatusCode, routing::get, routing::post};
    use axum_test::TestServer;
    use serde_json::json;

    #[derive(Debug, Deserialize, Validate)]
    struct Named {
        #[validate(length(min = 1, message = "must not be empty"))]
        name: String,
        #[validate(range(min = 0, max = 23, message = "must be between 0 and 23"))]
        hour: i32,
    }

    async fn echo_named(ValidatedJson(named): ValidatedJson<Named>) -> String {
        format!("{}@{}", named.name, named.hour)
    }

    async fn echo_id(IdPath(id): IdPath) -> String {
        id.to_string()
    }

    async fn echo_report(ReportQuery(id): ReportQuery) -> String {
        format!("{id:?}")
    }

    fn server() -> TestServer {
        let app = Router::new()
            .route("/named", post(echo_named))
            .route("/things/{id}", get(echo_id))
            .route("/report", get(echo_report));
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_valid_body_is_accepted() {
        let response = server().post("/named").json(&json!({"name": "a", "hour": 5})).await;
        response.assert_status_ok();
        response.assert_text("a@5");
    }

    #[tokio::test]
    async fn test_validation_failures_are_422() {
        let response = server().post("/named").json(&json!({"name": "", "hour": 30})).await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        let body: serde_json::Value = response.json();
        assert_eq!(body["code"], "unprocessable_entity");
        assert_eq!(body["message"], "hour: must be between 0 and 23; name: must not be empty");
    }

    #[tokio::test]
    async fn test_malformed_json_is_422() {
        let response = server().post("/named").text("{not json").content_type("application/json").await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        let response = server().post("/named").json(&json!({"name": "a"})).await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        let response = server().post("/named").json(&json!({"name": "a", "hour": "five"})).await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_non_integer_id_is_400() {
        let server = server();
        server.get("/things/12").await.assert_text("12");

        let response = server.get("/things/abc").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["code"], "bad_request");
    }

    #[tokio::test]
    async fn test_report_query() {
        let server = server();
        server.get("/report").await.assert_text("None");
        server.get("/report?id=3").await.assert_text("Some(3)");
        server.get("/report?id=abc").await.assert_status(StatusCode::BAD_REQUEST);
    }
}
