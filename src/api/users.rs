use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};

use crate::services::user_service::{
    self, CreateUserRequest, CreateUserResponse, GetUserResponse, UpdateUserRequest,
};
use crate::store::UserStore;
use crate::utils::respond::{self, ErrorResponse};

// Failure outcomes are not logged here: respond::error already logs every
// response, and a 400/404 is an expected client mistake, not a server error.

/// GET /user/{id} - Retorna id e nome do usuário
#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "Server-generated user identifier")
    ),
    responses(
        (status = 200, description = "User found", body = GetUserResponse),
        (status = 404, description = "Unknown user id", body = ErrorResponse)
    )
)]
pub async fn get_user(store: web::Data<UserStore>, id: web::Path<String>) -> HttpResponse {
    log::info!("👤 GET /user/{}", id);

    match user_service::get_user(&store, &id) {
        Ok(response) => respond::json(StatusCode::OK, &response),
        Err(e) => respond::error(&e),
    }
}

/// POST /user - Cria usuário com id gerado no servidor
#[utoipa::path(
    post,
    path = "/user",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = CreateUserResponse),
        (status = 400, description = "Malformed body or empty fields", body = ErrorResponse)
    )
)]
pub async fn create_user(
    store: web::Data<UserStore>,
    request: web::Json<CreateUserRequest>,
) -> HttpResponse {
    log::info!("📝 POST /user - name: {}", request.name);

    match user_service::create_user(&store, request.into_inner()) {
        Ok(response) => {
            log::info!("✅ User created: {}", response.id);
            respond::json(StatusCode::CREATED, &response)
        }
        Err(e) => respond::error(&e),
    }
}

/// PATCH /user/{id} - Atualiza a senha do usuário
#[utoipa::path(
    patch,
    path = "/user/{id}",
    tag = "Users",
    request_body = UpdateUserRequest,
    params(
        ("id" = String, Path, description = "Server-generated user identifier")
    ),
    responses(
        (status = 200, description = "Password updated"),
        (status = 400, description = "Malformed body or empty password", body = ErrorResponse),
        (status = 404, description = "Unknown user id", body = ErrorResponse)
    )
)]
pub async fn update_user(
    store: web::Data<UserStore>,
    id: web::Path<String>,
    request: web::Json<UpdateUserRequest>,
) -> HttpResponse {
    log::info!("🔧 PATCH /user/{}", id);

    match user_service::update_user(&store, &id, request.into_inner()) {
        Ok(()) => {
            log::info!("✅ Password updated: {}", id);
            respond::empty(StatusCode::OK)
        }
        Err(e) => respond::error(&e),
    }
}

/// DELETE /user/{id} - Remove o usuário
#[utoipa::path(
    delete,
    path = "/user/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "Server-generated user identifier")
    ),
    responses(
        (status = 200, description = "User deleted"),
        (status = 404, description = "Unknown user id", body = ErrorResponse)
    )
)]
pub async fn delete_user(store: web::Data<UserStore>, id: web::Path<String>) -> HttpResponse {
    log::info!("🗑️  DELETE /user/{}", id);

    match user_service::delete_user(&store, &id) {
        Ok(()) => {
            log::info!("✅ User deleted: {}", id);
            respond::empty(StatusCode::OK)
        }
        Err(e) => respond::error(&e),
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{test, App};
    use serde_json::{json, Value};

    use super::*;

    // Same wiring as main: store injection, decode-error handler, /user scope.
    macro_rules! init_app {
        ($store:expr) => {
            test::init_service(
                App::new()
                    .app_data($store.clone())
                    .app_data(
                        web::JsonConfig::default().error_handler(respond::json_error_handler),
                    )
                    .service(
                        web::scope("/user")
                            .route("", web::post().to(create_user))
                            .route("/{id}", web::get().to(get_user))
                            .route("/{id}", web::patch().to(update_user))
                            .route("/{id}", web::delete().to(delete_user)),
                    ),
            )
        };
    }

    #[actix_rt::test]
    async fn test_create_then_get_round_trip() {
        let store = web::Data::new(UserStore::new());
        let app = init_app!(store).await;

        let request = test::TestRequest::post()
            .uri("/user")
            .set_json(json!({"name": "alice", "password": "secret"}))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );

        let created: Value = test::read_body_json(response).await;
        let id = created["id"].as_str().expect("id must be present");
        assert!(!id.is_empty());

        let request = test::TestRequest::get()
            .uri(&format!("/user/{}", id))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);

        let fetched: Value = test::read_body_json(response).await;
        assert_eq!(fetched["id"], id);
        assert_eq!(fetched["name"], "alice");
        assert!(fetched.get("password").is_none());
        assert!(fetched.get("error").is_none());
    }

    #[actix_rt::test]
    async fn test_get_unknown_user_is_404() {
        let store = web::Data::new(UserStore::new());
        let app = init_app!(store).await;

        let request = test::TestRequest::get().uri("/user/ghost").to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["error"]["code"], "user_not_found");
        assert_eq!(body["error"]["message"], "User not found");
    }

    #[actix_rt::test]
    async fn test_create_with_empty_fields_is_invalid_input() {
        let store = web::Data::new(UserStore::new());
        let app = init_app!(store).await;

        for payload in [
            json!({"name": "", "password": "secret"}),
            json!({"name": "alice", "password": ""}),
            json!({}),
        ] {
            let request = test::TestRequest::post()
                .uri("/user")
                .set_json(payload)
                .to_request();
            let response = test::call_service(&app, request).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);

            let body: Value = test::read_body_json(response).await;
            assert_eq!(body["error"]["code"], "invalid_input");
        }
        assert!(store.is_empty());
    }

    #[actix_rt::test]
    async fn test_create_with_malformed_body_is_unexpected_error() {
        let store = web::Data::new(UserStore::new());
        let app = init_app!(store).await;

        let request = test::TestRequest::post()
            .uri("/user")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"name\": ")
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["error"]["code"], "unexpected_error");
        assert_eq!(
            body["error"]["message"],
            "Something unexpected happened. Please try again"
        );
    }

    #[actix_rt::test]
    async fn test_update_password_flow() {
        let store = web::Data::new(UserStore::new());
        let app = init_app!(store).await;

        let request = test::TestRequest::post()
            .uri("/user")
            .set_json(json!({"name": "alice", "password": "old"}))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, request).await;
        let id = created["id"].as_str().unwrap().to_string();

        let request = test::TestRequest::patch()
            .uri(&format!("/user/{}", id))
            .set_json(json!({"password": "new"}))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );
        let body = test::read_body(response).await;
        assert!(body.is_empty());

        // Not observable through GET; check against the store itself.
        assert_eq!(store.find_by_id(&id).unwrap().password, "new");

        let request = test::TestRequest::patch()
            .uri(&format!("/user/{}", id))
            .set_json(json!({"password": ""}))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["error"]["code"], "invalid_input");
    }

    #[actix_rt::test]
    async fn test_update_unknown_user_is_404() {
        let store = web::Data::new(UserStore::new());
        let app = init_app!(store).await;

        let request = test::TestRequest::patch()
            .uri("/user/ghost")
            .set_json(json!({"password": "new"}))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["error"]["code"], "user_not_found");
    }

    #[actix_rt::test]
    async fn test_delete_then_delete_again() {
        let store = web::Data::new(UserStore::new());
        let app = init_app!(store).await;

        let request = test::TestRequest::post()
            .uri("/user")
            .set_json(json!({"name": "alice", "password": "secret"}))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, request).await;
        let id = created["id"].as_str().unwrap().to_string();

        let request = test::TestRequest::delete()
            .uri(&format!("/user/{}", id))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = test::read_body(response).await;
        assert!(body.is_empty());

        let request = test::TestRequest::delete()
            .uri(&format!("/user/{}", id))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let request = test::TestRequest::get()
            .uri(&format!("/user/{}", id))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
