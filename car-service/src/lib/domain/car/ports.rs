use async_trait::async_trait;

use crate::domain::car::errors::CarError;
use crate::domain::car::models::Car;
use crate::domain::car::models::CarDetails;
use crate::domain::car::models::CarId;
use crate::domain::car::models::CarListing;
use crate::domain::user::models::UserId;

/// Port for owner-scoped car operations.
///
/// Every operation takes the authenticated owner; cars belonging to anyone
/// else are reported as `NotFound`.
#[async_trait]
pub trait CarServicePort: Send + Sync + 'static {
    async fn list_cars(&self, owner_id: &UserId) -> Result<Vec<CarListing>, CarError>;

    /// # Errors
    /// * `NotFound` - No such car for this owner
    async fn get_car(&self, owner_id: &UserId, id: CarId) -> Result<CarListing, CarError>;

    /// # Errors
    /// * `UnknownMake` - `make_id` does not reference a make
    async fn create_car(&self, owner_id: &UserId, details: CarDetails) -> Result<Car, CarError>;

    /// Replace every writable field of a car.
    ///
    /// # Errors
    /// * `NotFound` - No such car for this owner
    /// * `UnknownMake` - `make_id` does not reference a make
    async fn update_car(
        &self,
        owner_id: &UserId,
        id: CarId,
        details: CarDetails,
    ) -> Result<Car, CarError>;

    /// # Errors
    /// * `NotFound` - No such car for this owner
    async fn delete_car(&self, owner_id: &UserId, id: CarId) -> Result<Car, CarError>;
}

/// Persistence operations for cars. Every query is filtered by owner.
#[async_trait]
pub trait CarRepository: Send + Sync + 'static {
    /// Cars of `owner_id` ordered by identifier.
    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<CarListing>, CarError>;

    async fn find_by_owner(
        &self,
        owner_id: &UserId,
        id: CarId,
    ) -> Result<Option<CarListing>, CarError>;

    /// # Errors
    /// * `UnknownMake` - Foreign key on make violated
    async fn create(&self, owner_id: &UserId, details: CarDetails) -> Result<Car, CarError>;

    /// Returns `None` when the car does not exist or belongs to someone else.
    async fn update(
        &self,
        owner_id: &UserId,
        id: CarId,
        details: CarDetails,
    ) -> Result<Option<Car>, CarError>;

    /// Returns the deleted car, or `None` when nothing matched.
    async fn delete(&self, owner_id: &UserId, id: CarId) -> Result<Option<Car>, CarError>;
}
