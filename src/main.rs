use std::io;

use cart_service::config::Settings;
use cart_service::{build_cart_service, build_server, create_pool, run_migrations};
use dotenvy::dotenv;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let settings =
        Settings::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let pool = create_pool(&settings.database_url, settings.pool_size).map_err(io::Error::other)?;
    run_migrations(&pool).map_err(io::Error::other)?;

    log::info!(
        "Starting server at http://{}:{} (cart '{}')",
        settings.host,
        settings.port,
        settings.cart_id
    );

    build_server(
        build_cart_service(pool, settings.cart_id.clone()),
        &settings.host,
        settings.port,
    )?
    .await
}
