use rocket::{get, serde::json::Json, State};

use crate::{data::user_db::UserDb, model::{Account, UserRegistryError}};

#[get("/users")]
pub fn list_users(db: &State<UserDb>) -> Result<Json<Vec<Account>>, UserRegistryError> {
    Ok(Json(db.list()?))
}
