use rocket::serde;

#[derive(serde::Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct ServerConfig {
    pub users_file: String,
}
