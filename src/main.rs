use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use outing_api::routes;
use outing_api::services::outing_service::OutingService;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    println!("Logger initialized");

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    } else {
        println!("Release mode");
    }

    let host = std::env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);
    println!("Attempting to bind to {}:{}", host, port);

    let outing_service = OutingService::from_env().expect(
        "collaborator configuration must be set: GOOGLE_PLACES_API_KEY, WEATHER_API_KEY, GEMINI_API_KEY",
    );
    println!("Outing service initialized");

    println!("Starting HTTP server...");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .app_data(web::Data::new(outing_service.clone()))
            .route("/health", web::get().to(routes::health::health_check))
            .service(
                web::scope("/api").route("/outings", web::post().to(routes::outing::generate)),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
