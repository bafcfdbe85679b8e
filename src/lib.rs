use activities::{list_users::list_users, login::login, register::register};
use config::server_config::ServerConfig;
use data::{json_file_store::JsonFileStore, user_db::UserDb};
use rocket::{catch, catchers, fairing::AdHoc, routes, Build, Rocket};

pub mod model;
mod activities;
mod config;
pub mod data;
mod data_validation;

#[catch(404)]
fn not_found() -> String {
    "route does not exist".to_string()
}

#[catch(422)]
fn unprocessable() -> String {
    "request body could not be parsed".to_string()
}

pub fn build_rocket() -> Rocket<Build> {
    println!("starting user registry server, version: {}", env!("CARGO_PKG_VERSION"));
    let rocket = rocket::build();
    let server_config = rocket
        .figment()
        .extract::<ServerConfig>()
        .expect("cannot run server without a users_file path configured");
    println!("backing file is: {}", server_config.users_file);
    let db = UserDb::new(Box::new(JsonFileStore::new(&server_config.users_file)));
    rocket_with_db(db).attach(AdHoc::config::<ServerConfig>())
}

pub fn rocket_with_db(db: UserDb) -> Rocket<Build> {
    rocket::build()
        .register("/", catchers![not_found, unprocessable])
        .mount("/", routes![list_users, register, login])
        .manage(db)
}
