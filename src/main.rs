use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, web, App, HttpServer};

use quizcrew_server::{
    app_state::AppState,
    config::Config,
    constants::quiz::{REQUEST_ID_HEADER, SESSION_HEADER},
    handlers,
    middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    config.warn_on_missing_credentials();

    let bind_address = (config.web_server_host.clone(), config.web_server_port);
    let allowed_origin = config.allowed_origin.clone();
    let state = AppState::new(config);

    log::info!(
        "starting HTTP server on {}:{}",
        bind_address.0,
        bind_address.1
    );

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&allowed_origin)
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![
                header::CONTENT_TYPE,
                header::ACCEPT,
                header::HeaderName::from_static(SESSION_HEADER),
            ])
            .expose_headers(vec![header::HeaderName::from_static(REQUEST_ID_HEADER)])
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(RequestIdMiddleware)
            .wrap(cors)
            .wrap(Logger::default())
            .configure(handlers::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
