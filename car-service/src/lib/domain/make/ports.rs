use async_trait::async_trait;

use crate::domain::make::errors::MakeError;
use crate::domain::make::models::Make;
use crate::domain::make::models::MakeName;

/// Port for make catalog operations.
#[async_trait]
pub trait MakeServicePort: Send + Sync + 'static {
    /// List every make, ordered by identifier.
    async fn list_makes(&self) -> Result<Vec<Make>, MakeError>;

    /// Add a make to the catalog.
    ///
    /// # Errors
    /// * `NameAlreadyExists` - A make with this name exists
    /// * `DatabaseError` - Database operation failed
    async fn create_make(&self, name: MakeName) -> Result<Make, MakeError>;
}

/// Persistence operations for makes.
#[async_trait]
pub trait MakeRepository: Send + Sync + 'static {
    async fn list_all(&self) -> Result<Vec<Make>, MakeError>;

    /// # Errors
    /// * `NameAlreadyExists` - Unique constraint on name violated
    async fn create(&self, name: MakeName) -> Result<Make, MakeError>;
}
