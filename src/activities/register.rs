use rocket::{post, serde::json::Json, State};

use crate::{
    data::user_db::UserDb,
    data_validation::require_field,
    model::{Account, RegisterRequest, RegisterResponse, UserRegistryError, DEFAULT_ROLE},
};

#[post("/register", data = "<body>")]
pub fn register(
    db: &State<UserDb>,
    body: Json<RegisterRequest>,
) -> Result<RegisterResponse, UserRegistryError> {
    let request = body.into_inner();
    let username = require_field(request.username)?;
    let password = require_field(request.password)?;
    println!("registering user {}", username);
    db.register(Account {
        username,
        password,
        role: request.role.unwrap_or_else(|| DEFAULT_ROLE.to_string()),
    })?;
    Ok(RegisterResponse {
        message: "Usuario registrado".to_string(),
    })
}
