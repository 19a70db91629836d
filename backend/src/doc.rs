//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct generating the OpenAPI specification for
//! the REST API: users endpoints, health probes, and the shared domain
//! schemas. Swagger UI serves the document in debug builds.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode, UserRecord};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Directory service API",
        description = "HTTP interface for the user directory and its health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::get_user_email_uppercase,
        crate::inbound::http::users::get_user_email_uppercase_safe,
        crate::inbound::http::users::get_user_info,
        crate::inbound::http::users::get_user_info_safe,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(UserRecord, Error, ErrorCode)),
    tags(
        (name = "users", description = "Operations over the user directory"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::OpenApi;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // Note: utoipa replaces :: with . in schema names.
    const USER_SCHEMA_NAME: &str = "UserRecord";
    const ERROR_SCHEMA_NAME: &str = "Error";

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn openapi_user_schema_has_the_four_record_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let user_schema = schemas.get(USER_SCHEMA_NAME).expect("UserRecord schema");

        assert_object_schema_has_field(user_schema, "id");
        assert_object_schema_has_field(user_schema, "name");
        assert_object_schema_has_field(user_schema, "email");
        assert_object_schema_has_field(user_schema, "department");
    }

    #[test]
    fn openapi_error_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get(ERROR_SCHEMA_NAME).expect("Error schema");

        assert_object_schema_has_field(error_schema, "code");
        assert_object_schema_has_field(error_schema, "message");
    }

    #[test]
    fn openapi_document_lists_every_users_path() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for path in [
            "/api/v1/users",
            "/api/v1/users/{id}",
            "/api/v1/users/{id}/email-uppercase",
            "/api/v1/users/{id}/email-uppercase-safe",
            "/api/v1/users/info",
            "/api/v1/users/info-safe",
            "/health/ready",
            "/health/live",
        ] {
            assert!(paths.contains_key(path), "missing path {path}");
        }
    }
}
