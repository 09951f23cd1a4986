use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Service API",
        version = "1.0.0",
        description = "Minimal user management service backed by an in-memory store.\n\n**Note:** nothing is persisted - a restart drops every record.\n\n**Features:**\n- Create, fetch, update and delete users\n- Server-generated opaque user ids\n- Health monitoring"
    ),
    paths(
        // Users
        crate::api::users::get_user,
        crate::api::users::create_user,
        crate::api::users::update_user,
        crate::api::users::delete_user,

        // Health
        crate::api::health::health_check,
    ),
    components(
        schemas(
            // Users
            crate::services::user_service::CreateUserRequest,
            crate::services::user_service::CreateUserResponse,
            crate::services::user_service::UpdateUserRequest,
            crate::services::user_service::GetUserResponse,

            // Errors
            crate::utils::respond::ErrorResponse,
            crate::utils::respond::ErrorBody,

            // Health
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Users", description = "User management endpoints. Ids are generated server-side; passwords are accepted on create/update and never returned."),
        (name = "Health", description = "Health check endpoint for monitoring service status."),
    )
)]
pub struct ApiDoc;
