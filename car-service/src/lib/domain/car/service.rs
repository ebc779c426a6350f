use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::car::errors::CarError;
use crate::domain::car::models::Car;
use crate::domain::car::models::CarDetails;
use crate::domain::car::models::CarId;
use crate::domain::car::models::CarListing;
use crate::domain::car::ports::CarRepository;
use crate::domain::car::ports::CarServicePort;
use crate::domain::user::models::UserId;

/// Domain service implementation for car operations.
pub struct CarService<CR>
where
    CR: CarRepository,
{
    repository: Arc<CR>,
}

impl<CR> CarService<CR>
where
    CR: CarRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<CR> CarServicePort for CarService<CR>
where
    CR: CarRepository,
{
    async fn list_cars(&self, owner_id: &UserId) -> Result<Vec<CarListing>, CarError> {
        self.repository.list_by_owner(owner_id).await
    }

    async fn get_car(&self, owner_id: &UserId, id: CarId) -> Result<CarListing, CarError> {
        self.repository
            .find_by_owner(owner_id, id)
            .await?
            .ok_or(CarError::NotFound(id))
    }

    async fn create_car(&self, owner_id: &UserId, details: CarDetails) -> Result<Car, CarError> {
        let car = self.repository.create(owner_id, details).await?;
        tracing::info!(car_id = %car.id, owner_id = %owner_id, "Car created");
        Ok(car)
    }

    async fn update_car(
        &self,
        owner_id: &UserId,
        id: CarId,
        details: CarDetails,
    ) -> Result<Car, CarError> {
        let car = self
            .repository
            .update(owner_id, id, details)
            .await?
            .ok_or(CarError::NotFound(id))?;

        tracing::info!(car_id = %car.id, owner_id = %owner_id, "Car updated");
        Ok(car)
    }

    async fn delete_car(&self, owner_id: &UserId, id: CarId) -> Result<Car, CarError> {
        let car = self
            .repository
            .delete(owner_id, id)
            .await?
            .ok_or(CarError::NotFound(id))?;

        tracing::info!(car_id = %car.id, owner_id = %owner_id, "Car deleted");
        Ok(car)
    }
}
