pub mod car;
pub mod make;
pub mod user;
