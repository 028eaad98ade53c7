pub mod health_handler;
pub mod quiz_handler;

use actix_web::web;

pub use health_handler::{health_check, health_check_live};
pub use quiz_handler::{generate_quiz, list_subjects, submit_attempt};

/// Registers every route on an actix app or scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(health_check_live)
        .service(list_subjects)
        .service(submit_attempt)
        .service(generate_quiz);
}
