#[macro_use]
extern crate rocket;

#[launch]
async fn rocket() -> _ {
    user_registry_server::build_rocket()
}
