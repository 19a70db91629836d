//! Users API handlers.
//!
//! ```text
//! GET  /api/v1/users
//! GET  /api/v1/users/{id}
//! POST /api/v1/users
//! GET  /api/v1/users/{id}/email-uppercase
//! GET  /api/v1/users/{id}/email-uppercase-safe
//! GET  /api/v1/users/info?id={id}
//! GET  /api/v1/users/info-safe?id={id}
//! ```
//!
//! Thin adapter layer: every success/absence decision is made by
//! [`crate::domain::UserService`]; handlers only translate outcomes into
//! status codes and bodies. The two `-safe`-suffixed endpoints have
//! deliberately unchecked siblings; see the service documentation for the
//! contract they exercise.

use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;

use crate::domain::{Error, UserRecord};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// List every record in the directory.
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "All user records, order unspecified", body = [UserRecord]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserRecord>>> {
    let users = state.users.find_all().await?;
    Ok(web::Json(users))
}

/// Fetch one record by id; absence maps to 404.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "Record key")),
    responses(
        (status = 200, description = "Matching record", body = UserRecord),
        (status = 404, description = "No record for this id", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<UserRecord>> {
    match state.users.find_by_id(&id).await? {
        Some(user) => Ok(web::Json(user)),
        None => Err(Error::not_found(format!("no user with id {id}"))),
    }
}

/// Create a record, replacing any record with the same id.
///
/// Echoes the stored record. No field validation beyond JSON shape: the
/// presence contract is the type system's job, not this handler's.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = UserRecord,
    responses(
        (status = 200, description = "Stored record", body = UserRecord),
        (status = 400, description = "Malformed request body"),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserRecord>,
) -> ApiResult<web::Json<UserRecord>> {
    let created = state.users.create(payload.into_inner()).await?;
    Ok(web::Json(created))
}

/// Upper-case a user's email without presence checks.
///
/// Negative example: delegates to the unchecked service path, so a missing
/// record or missing email is an unhandled fault this adapter cannot map
/// gracefully; it surfaces as a dropped request, not a status code.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}/email-uppercase",
    params(("id" = String, Path, description = "Record key")),
    responses(
        (status = 200, description = "Upper-cased email", body = String),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUserEmailUppercase"
)]
#[get("/users/{id}/email-uppercase")]
pub async fn get_user_email_uppercase(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let value = state.users.email_uppercase_unsafe(&id).await?;
    Ok(HttpResponse::Ok().body(value))
}

/// Upper-case a user's email, total over all inputs.
///
/// Sentinels travel in an ordinary 200 body: `USER_NOT_FOUND` when the id is
/// unknown, `EMAIL_NOT_PROVIDED` when the record has no email.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}/email-uppercase-safe",
    params(("id" = String, Path, description = "Record key")),
    responses(
        (status = 200, description = "Upper-cased email or sentinel", body = String),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUserEmailUppercaseSafe"
)]
#[get("/users/{id}/email-uppercase-safe")]
pub async fn get_user_email_uppercase_safe(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let value = state.users.email_uppercase_safe(&id).await?;
    Ok(HttpResponse::Ok().body(value))
}

/// Query parameters for the info endpoints. The id is optional on purpose.
#[derive(Debug, Deserialize)]
pub struct InfoQuery {
    /// Record key to describe; may be absent.
    pub id: Option<String>,
}

/// Format a user label without checking the optional query parameter.
///
/// Negative example at the adapter layer: dereferences the optional `id`
/// unconditionally, so requests without `?id=` are a reproducible fault.
/// [`get_user_info_safe`] is the correct version.
///
/// # Panics
/// Panics when the `id` query parameter is absent.
#[utoipa::path(
    get,
    path = "/api/v1/users/info",
    params(("id" = Option<String>, Query, description = "Record key to describe")),
    responses(
        (status = 200, description = "Formatted user label", body = String)
    ),
    tags = ["users"],
    operation_id = "getUserInfo"
)]
#[get("/users/info")]
pub async fn get_user_info(query: web::Query<InfoQuery>) -> HttpResponse {
    // Unchecked dereference of an optional input, by contract.
    let id = query
        .into_inner()
        .id
        .expect("id query parameter must be provided");
    HttpResponse::Ok().body(format!("User: {}", id.to_uppercase()))
}

/// Format a user label, rejecting an absent id with 400.
#[utoipa::path(
    get,
    path = "/api/v1/users/info-safe",
    params(("id" = Option<String>, Query, description = "Record key to describe")),
    responses(
        (status = 200, description = "Formatted user label", body = String),
        (status = 400, description = "Missing id parameter", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUserInfoSafe"
)]
#[get("/users/info-safe")]
pub async fn get_user_info_safe(query: web::Query<InfoQuery>) -> ApiResult<HttpResponse> {
    let Some(id) = query.into_inner().id else {
        return Err(Error::invalid_request("id query parameter must be provided"));
    };
    Ok(HttpResponse::Ok().body(format!("User: {}", id.to_uppercase())))
}

/// Register every users endpoint on an `/api/v1`-style scope.
///
/// The literal `info` routes must register before the `{id}` matcher or the
/// dynamic segment would swallow them.
pub fn configure(config: &mut web::ServiceConfig) {
    config
        .service(list_users)
        .service(get_user_info)
        .service(get_user_info_safe)
        .service(create_user)
        .service(get_user)
        .service(get_user_email_uppercase)
        .service(get_user_email_uppercase_safe);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserService;
    use crate::outbound::persistence::InMemoryUserStore;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::{Value, json};
    use std::sync::Arc;

    fn test_app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let service = UserService::new(Arc::new(InMemoryUserStore::seeded()));
        let state = HttpState::new(Arc::new(service));
        App::new()
            .app_data(web::Data::new(state))
            .service(web::scope("/api/v1").configure(configure))
    }

    async fn get_text(path: &str) -> (actix_web::http::StatusCode, String) {
        let app = actix_test::init_service(test_app()).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri(path).to_request(),
        )
        .await;
        let status = response.status();
        let body = actix_test::read_body(response).await;
        let text = std::str::from_utf8(&body).expect("utf8 body").to_owned();
        (status, text)
    }

    #[actix_web::test]
    async fn list_users_returns_the_seeded_directory() {
        let app = actix_test::init_service(test_app()).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/api/v1/users").to_request(),
        )
        .await;
        assert!(response.status().is_success());

        let value: Value = actix_test::read_body_json(response).await;
        let users = value.as_array().expect("array body");
        assert_eq!(users.len(), 3);
    }

    #[actix_web::test]
    async fn get_user_returns_the_record_with_its_email() {
        let app = actix_test::init_service(test_app()).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/users/1")
                .to_request(),
        )
        .await;
        assert!(response.status().is_success());

        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            value.get("email").and_then(Value::as_str),
            Some("alice@example.com")
        );
    }

    #[actix_web::test]
    async fn get_user_omits_an_absent_email() {
        let app = actix_test::init_service(test_app()).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/users/2")
                .to_request(),
        )
        .await;
        assert!(response.status().is_success());

        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(value.get("name").and_then(Value::as_str), Some("Bob Johnson"));
        assert!(value.get("email").is_none());
    }

    #[actix_web::test]
    async fn get_user_maps_absence_to_404() {
        let app = actix_test::init_service(test_app()).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/users/999")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);

        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(value.get("code").and_then(Value::as_str), Some("not_found"));
    }

    #[actix_web::test]
    async fn create_user_echoes_the_stored_record() {
        let app = actix_test::init_service(test_app()).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/users")
                .set_json(json!({
                    "id": "7",
                    "name": "Grace Hopper",
                    "email": "grace@example.com",
                    "department": "Engineering"
                }))
                .to_request(),
        )
        .await;
        assert!(response.status().is_success());

        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(value.get("id").and_then(Value::as_str), Some("7"));

        let lookup = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/users/7")
                .to_request(),
        )
        .await;
        assert!(lookup.status().is_success());
    }

    #[actix_web::test]
    async fn create_user_accepts_an_absent_email() {
        let app = actix_test::init_service(test_app()).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/users")
                .set_json(json!({
                    "id": "8",
                    "name": "Dan Mills",
                    "department": "Sales"
                }))
                .to_request(),
        )
        .await;
        assert!(response.status().is_success());

        let value: Value = actix_test::read_body_json(response).await;
        assert!(value.get("email").is_none());
    }

    #[rstest]
    #[case("/api/v1/users/1/email-uppercase-safe", "ALICE@EXAMPLE.COM")]
    #[case("/api/v1/users/2/email-uppercase-safe", "EMAIL_NOT_PROVIDED")]
    #[case("/api/v1/users/999/email-uppercase-safe", "USER_NOT_FOUND")]
    #[actix_web::test]
    async fn safe_email_endpoint_is_total(#[case] path: &str, #[case] expected: &str) {
        let (status, text) = get_text(path).await;
        assert!(status.is_success());
        assert_eq!(text, expected);
    }

    #[actix_web::test]
    async fn unsafe_email_endpoint_succeeds_when_preconditions_hold() {
        let (status, text) = get_text("/api/v1/users/1/email-uppercase").await;
        assert!(status.is_success());
        assert_eq!(text, "ALICE@EXAMPLE.COM");
    }

    #[actix_web::test]
    async fn info_safe_formats_a_present_id() {
        let (status, text) = get_text("/api/v1/users/info-safe?id=abc").await;
        assert!(status.is_success());
        assert_eq!(text, "User: ABC");
    }

    #[actix_web::test]
    async fn info_safe_rejects_an_absent_id() {
        let app = actix_test::init_service(test_app()).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/users/info-safe")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);

        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            value.get("code").and_then(Value::as_str),
            Some("invalid_request")
        );
    }

    #[actix_web::test]
    async fn info_formats_a_present_id() {
        let (status, text) = get_text("/api/v1/users/info?id=abc").await;
        assert!(status.is_success());
        assert_eq!(text, "User: ABC");
    }
}
