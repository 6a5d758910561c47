use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::Logger, web};
use hope_portal::{config::Settings, routes, state::AppState};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("hope_portal=info,actix_web=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::load()?;
    let state = web::Data::new(AppState::from_settings(&settings).await?);
    let allowed_origin = settings.server.allowed_origin.clone();
    let (host, port) = settings.bind_address();

    info!("Starting server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = match &allowed_origin {
            Some(origin) => Cors::default()
                .allowed_origin(origin)
                .allowed_methods(vec!["GET", "POST"])
                .allow_any_header()
                .max_age(3600),
            None => Cors::permissive(),
        };

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(routes::api::scoped_config)
    })
    .bind((host, port))?
    .run()
    .await?;

    Ok(())
}
