use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

use crate::{
    api::models::{ErrorResponse, ExistsResponse},
    core::models::{AccountResponse, LoginDto, Role, UserDto, UserView},
};

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "Bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::register_user,
        super::handlers::login,
        super::handlers::get_user,
        super::handlers::update_user,
        super::handlers::delete_user,
        super::handlers::user_exists
    ),
    components(schemas(
        UserDto,
        LoginDto,
        UserView,
        Role,
        AccountResponse,
        ExistsResponse,
        ErrorResponse
    )),
    modifiers(&BearerAuth),
    info(
        title = "Accounts API",
        description = "Registration, login and profile management for user accounts",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
