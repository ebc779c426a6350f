use auth::Authenticator;
use auth::PasswordHasher;
use car_service::config::Config;
use car_service::outbound::repositories::PostgresCarRepository;
use car_service::outbound::repositories::PostgresMakeRepository;
use car_service::outbound::repositories::PostgresUserRepository;
use car_service::seed;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "car_service=info,car_seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;

    let pg_pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&config.database.url)
        .await?;

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Authenticator::with_password_hasher(
        config.jwt.secret.as_bytes(),
        PasswordHasher::with_cost(config.password.into())?,
    );

    let summary = seed::load(
        &PostgresUserRepository::new(pg_pool.clone()),
        &PostgresMakeRepository::new(pg_pool.clone()),
        &PostgresCarRepository::new(pg_pool.clone()),
        &authenticator,
    )
    .await?;

    tracing::info!(
        users = summary.users,
        makes = summary.makes,
        cars = summary.cars,
        "Seed data load complete"
    );

    pg_pool.close().await;
    Ok(())
}
