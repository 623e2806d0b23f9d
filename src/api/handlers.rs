use crate::{
    api::models::{ApiError, ErrorResponse, ExistsResponse},
    auth::{
        jwt::{Claims, JwtService},
        password::BcryptHasher,
    },
    core::{
        errors::AccountError,
        models::{AccountResponse, LoginDto, UserDto},
        services::AccountService,
    },
    infrastructure::storage::in_memory::InMemoryUserStore,
};
use axum::{
    Extension, Json, Router,
    extract::{Path, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::IntoResponse,
    routing::{get, post},
};
use http::header;
use std::sync::Arc;
use tracing::debug;

pub type SharedAccountService = Arc<AccountService<InMemoryUserStore, BcryptHasher, JwtService>>;

// Middleware to validate JWT
async fn auth_middleware(
    State(service): State<SharedAccountService>,
    mut req: Request<axum::body::Body>,
    next: Next,
) -> Result<impl IntoResponse, ApiError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AccountError::Unauthorized("Missing Authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AccountError::Unauthorized("Invalid Authorization header".to_string()))?;

    let claims = service.token_issuer().validate_token(token)?;
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

pub fn api_routes(service: SharedAccountService) -> Router {
    let protected_routes = Router::new()
        .route(
            "/users/{user_id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/users/{user_id}/exists", get(user_exists))
        .route_layer(middleware::from_fn_with_state(service.clone(), auth_middleware));

    Router::new()
        .route("/users/register", post(register_user))
        .route("/users/login", post(login))
        .merge(protected_routes)
        .with_state(service)
}

#[utoipa::path(
    post,
    path = "/api/users/register",
    request_body = UserDto,
    responses(
        (status = 201, description = "User registered", body = AccountResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn register_user(
    State(service): State<SharedAccountService>,
    Json(req): Json<UserDto>,
) -> Result<(StatusCode, Json<AccountResponse>), ApiError> {
    let response = service.register_user(req).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/users/login",
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login successful", body = AccountResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 404, description = "Unknown email", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn login(
    State(service): State<SharedAccountService>,
    Json(req): Json<LoginDto>,
) -> Result<Json<AccountResponse>, ApiError> {
    Ok(Json(service.login(req).await?))
}

#[utoipa::path(
    get,
    path = "/api/users/{user_id}",
    params(
        ("user_id" = String, Path, description = "ID of the user to retrieve")
    ),
    responses(
        (status = 200, description = "User found", body = AccountResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn get_user(
    State(service): State<SharedAccountService>,
    Path(user_id): Path<String>,
) -> Result<Json<AccountResponse>, ApiError> {
    Ok(Json(service.get_user(&user_id).await?))
}

#[utoipa::path(
    put,
    path = "/api/users/{user_id}",
    params(
        ("user_id" = String, Path, description = "ID of the user to update")
    ),
    request_body = UserDto,
    responses(
        (status = 200, description = "User updated", body = AccountResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 409, description = "Email owned by another user", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn update_user(
    State(service): State<SharedAccountService>,
    Extension(claims): Extension<Claims>,
    Path(user_id): Path<String>,
    Json(req): Json<UserDto>,
) -> Result<Json<AccountResponse>, ApiError> {
    debug!(requested_by = %claims.sub, %user_id, "update user");
    Ok(Json(service.update_user(&user_id, req).await?))
}

#[utoipa::path(
    delete,
    path = "/api/users/{user_id}",
    params(
        ("user_id" = String, Path, description = "ID of the user to delete")
    ),
    responses(
        (status = 200, description = "User deleted", body = AccountResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn delete_user(
    State(service): State<SharedAccountService>,
    Extension(claims): Extension<Claims>,
    Path(user_id): Path<String>,
) -> Result<Json<AccountResponse>, ApiError> {
    debug!(requested_by = %claims.sub, %user_id, "delete user");
    Ok(Json(service.delete_user(&user_id).await?))
}

#[utoipa::path(
    get,
    path = "/api/users/{user_id}/exists",
    params(
        ("user_id" = String, Path, description = "ID of the user to check")
    ),
    responses(
        (status = 200, description = "Existence flag", body = ExistsResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn user_exists(
    State(service): State<SharedAccountService>,
    Path(user_id): Path<String>,
) -> Result<Json<ExistsResponse>, ApiError> {
    let exists = service.exists_by_id(&user_id).await?;
    Ok(Json(ExistsResponse { exists }))
}
