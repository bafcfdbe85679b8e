use rocket::{http::{ContentType, Status}, response::Responder, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::StoreError;

pub const DEFAULT_ROLE: &str = "user";

fn default_role() -> String {
    DEFAULT_ROLE.to_string()
}

/// One registered user, exactly as it sits in the backing file.
/// Records written before roles existed deserialize with role "user".
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Account {
    pub username: String,
    pub password: String,
    #[serde(default = "default_role")]
    pub role: String,
}

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub role: String,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Error, Debug)]
pub enum UserRegistryError {
    #[error("Faltan datos")]
    MissingFields,
    #[error("Usuario ya existe")]
    UserAlreadyExists,
    #[error("Credenciales inválidas")]
    InvalidCredentials,
    #[error("Error del servidor")]
    StoreIssue(Box<StoreError>),
}

impl From<StoreError> for UserRegistryError {
    fn from(e: StoreError) -> Self {
        UserRegistryError::StoreIssue(Box::new(e))
    }
}

impl UserRegistryError {
    fn status(&self) -> Status {
        match self {
            UserRegistryError::MissingFields => Status::BadRequest,
            UserRegistryError::UserAlreadyExists => Status::BadRequest,
            UserRegistryError::InvalidCredentials => Status::Unauthorized,
            UserRegistryError::StoreIssue(_) => Status::InternalServerError,
        }
    }
}

pub fn to_json(obj: &impl Serialize) -> Result<String, UserRegistryError> {
    serde_json::to_string(obj)
        .map_err(|e| UserRegistryError::StoreIssue(Box::new(StoreError::ParseFailure(e.to_string()))))
}

pub fn from_json<'a, T: Deserialize<'a>>(json: &'a str) -> Result<T, UserRegistryError> {
    serde_json::from_str::<'a, T>(json)
        .map_err(|e| UserRegistryError::StoreIssue(Box::new(StoreError::ParseFailure(e.to_string()))))
}

impl<'r> Responder<'r, 'static> for RegisterResponse {
    fn respond_to(self, request: &'r rocket::Request<'_>) -> rocket::response::Result<'static> {
        let response = to_json(&self).unwrap();
        Response::build_from(response.respond_to(request)?)
            .header(ContentType::new("application", "json"))
            .status(Status::Created)
            .ok()
    }
}

impl<'r> Responder<'r, 'static> for LoginResponse {
    fn respond_to(self, request: &'r rocket::Request<'_>) -> rocket::response::Result<'static> {
        let response = to_json(&self).unwrap();
        Response::build_from(response.respond_to(request)?)
            .header(ContentType::new("application", "json"))
            .status(Status::Ok)
            .ok()
    }
}

impl<'r> Responder<'r, 'static> for UserRegistryError {
    fn respond_to(self, request: &'r rocket::Request<'_>) -> rocket::response::Result<'static> {
        if let UserRegistryError::StoreIssue(e) = &self {
            println!("store issue while handling request: {}", e);
        }
        let status = self.status();
        let response = to_json(&ErrorResponse { error: self.to_string() }).unwrap();
        Response::build_from(response.respond_to(request)?)
            .header(ContentType::new("application", "json"))
            .status(status)
            .ok()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_role_defaults_when_absent() {
        let account: Account = from_json(r#"{"username":"alice","password":"pw1"}"#).unwrap();
        assert_eq!(account.role, "user");
    }

    #[test]
    fn test_role_kept_when_present() {
        let account: Account =
            from_json(r#"{"username":"alice","password":"pw1","role":"admin"}"#).unwrap();
        assert_eq!(account.role, "admin");
    }

    #[test]
    fn test_error_messages_are_user_facing() {
        assert_eq!(UserRegistryError::UserAlreadyExists.to_string(), "Usuario ya existe");
        assert_eq!(UserRegistryError::InvalidCredentials.to_string(), "Credenciales inválidas");
        assert_eq!(UserRegistryError::MissingFields.to_string(), "Faltan datos");
    }
}
