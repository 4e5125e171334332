use crate::{
    auth::{AuthResponse, LoginRequest, RegisterRequest, TokenService},
    error::AppError,
    registry::UserRegistry,
};
use actix_web::{post, web, HttpResponse, Responder};
use validator::Validate;

/// Register a new user
///
/// Creates a new user account and returns an authentication token.
#[post("/register")]
pub async fn register(
    users: web::Data<UserRegistry>,
    tokens: web::Data<TokenService>,
    register_data: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    // Validate input
    register_data.validate()?;

    let user = users.register(
        &register_data.username,
        &register_data.email,
        &register_data.password,
    )?;

    // Generate token
    let token = tokens.issue(user.id, &user.username)?;

    log::info!("registered user {} (id {})", user.username, user.id);

    Ok(HttpResponse::Created().json(AuthResponse {
        success: true,
        message: "Registration successful".to_string(),
        token,
    }))
}

/// Login user
///
/// Authenticates a user and returns an authentication token.
#[post("/login")]
pub async fn login(
    users: web::Data<UserRegistry>,
    tokens: web::Data<TokenService>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    let user = users.authenticate(&login_data.username, &login_data.password)?;

    // Generate token
    let token = tokens.issue(user.id, &user.username)?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        success: true,
        message: "Login successful".to_string(),
        token,
    }))
}
