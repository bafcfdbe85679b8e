use rocket::{post, serde::json::Json, State};

use crate::{
    data::user_db::UserDb,
    data_validation::require_field,
    model::{LoginRequest, LoginResponse, UserRegistryError},
};

#[post("/login", data = "<body>")]
pub fn login(
    db: &State<UserDb>,
    body: Json<LoginRequest>,
) -> Result<LoginResponse, UserRegistryError> {
    let request = body.into_inner();
    let username = require_field(request.username)?;
    let password = require_field(request.password)?;
    let account = db.authenticate(&username, &password)?;
    println!("{} logged in", account.username);
    Ok(LoginResponse {
        message: "Login exitoso".to_string(),
        role: account.role,
    })
}
