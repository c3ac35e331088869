mod health_check;
mod hello;

use actix_web::web;

pub use health_check::*;
pub use hello::*;

/// The controller's route table.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(get_hello))
        .route("/health_check", web::get().to(health_check))
        .route("/health_check/database", web::get().to(database_health_check));
}
