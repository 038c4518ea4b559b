use std::io;

use dotenvy::dotenv;
use invoice_service::infrastructure::credentials_provider::DieselCredentialsProvider;
use invoice_service::{build_server, create_pool, run_migrations, AppState, Settings};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let settings = Settings::from_env().map_err(io::Error::other)?;

    let pool = create_pool(&settings.database_url, settings.pool_size).map_err(io::Error::other)?;
    run_migrations(&pool).map_err(io::Error::other)?;

    if let Some(seed) = &settings.seed_user {
        let provider = DieselCredentialsProvider::new(pool.clone());
        match provider
            .register(&seed.name, &seed.email, &seed.password)
            .map_err(io::Error::other)?
        {
            Some(id) => log::info!("Seeded user {} ({})", seed.email, id),
            None => log::info!("Seed user {} already exists", seed.email),
        }
    }

    log::info!("Starting server at http://{}:{}", settings.host, settings.port);

    build_server(AppState::from_pool(pool), &settings.host, settings.port)?.await
}
