use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use taskhive::auth::TokenService;
use taskhive::config::Config;
use taskhive::registry::{TaskRegistry, UserRegistry};
use taskhive::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    // Application-lifetime state, shared across workers through web::Data.
    let users = web::Data::new(UserRegistry::new());
    let tasks = web::Data::new(TaskRegistry::new());
    let tokens = web::Data::new(TokenService::from_config(&config));

    log::info!("Starting taskhive server at {}", config.server_url());

    let bind_addr = (config.server_host.clone(), config.server_port);
    HttpServer::new(move || {
        App::new()
            .app_data(users.clone())
            .app_data(tasks.clone())
            .app_data(tokens.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .service(routes::health::index)
            .service(routes::health::health)
            .service(web::scope("/api").configure(routes::config))
    })
    .bind(bind_addr)?
    .run()
    .await
}
