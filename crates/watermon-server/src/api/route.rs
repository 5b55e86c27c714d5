use actix_web::{Scope, web};

use super::{health, history, machine, user};

pub fn routes() -> Scope {
    web::scope("")
        .service(history::add_history)
        .service(history::latest_history)
        .service(history::full_history)
        .service(machine::add_machine_details)
        .service(machine::machine_details)
        .service(user::user_info)
        .service(health::routes())
}
