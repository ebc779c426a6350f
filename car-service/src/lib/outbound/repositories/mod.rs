pub mod car;
pub mod make;
pub mod user;

pub use car::PostgresCarRepository;
pub use make::PostgresMakeRepository;
pub use user::PostgresUserRepository;
