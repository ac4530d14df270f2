pub mod login;
pub mod register;

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(register::register, login::login),
    components(schemas(
        register::RegisterRequest,
        login::LoginRequest,
        login::LoginResponse,
    ))
)]
pub struct ApiDoc;
