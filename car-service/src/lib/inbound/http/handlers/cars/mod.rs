pub mod create_car;
pub mod delete_car;
pub mod get_car;
pub mod list_cars;
pub mod update_car;

pub use create_car::create_car;
pub use delete_car::delete_car;
pub use get_car::get_car;
pub use list_cars::list_cars;
pub use update_car::update_car;

use serde::Deserialize;
use serde::Serialize;

use crate::domain::car::errors::CarDetailsError;
use crate::domain::car::models::Car;
use crate::domain::car::models::CarDetails;
use crate::domain::car::models::CarListing;
use crate::domain::make::models::MakeId;
use crate::inbound::http::handlers::ApiError;

/// HTTP request body for creating or replacing a car (raw JSON).
///
/// Any `owner_id` sent by the client is ignored; ownership always comes
/// from the bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CarRequest {
    name: String,
    make_id: i32,
    model: String,
    cool_factor: i64,
    #[serde(default)]
    img: String,
    #[serde(default)]
    owns: bool,
}

impl CarRequest {
    fn try_into_details(self) -> Result<CarDetails, CarDetailsError> {
        CarDetails::new(
            self.name,
            MakeId(self.make_id),
            self.model,
            self.cool_factor,
            self.img,
            self.owns,
        )
    }
}

impl From<CarDetailsError> for ApiError {
    fn from(err: CarDetailsError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

/// A stored car row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarResponseData {
    pub id: i32,
    pub name: String,
    pub make_id: i32,
    pub model: String,
    pub cool_factor: i16,
    pub img: String,
    pub owns: bool,
    pub owner_id: String,
}

impl From<&Car> for CarResponseData {
    fn from(car: &Car) -> Self {
        Self {
            id: car.id.0,
            name: car.details.name.clone(),
            make_id: car.details.make_id.0,
            model: car.details.model.clone(),
            cool_factor: car.details.cool_factor.value(),
            img: car.details.img.clone(),
            owns: car.details.owns,
            owner_id: car.owner_id.to_string(),
        }
    }
}

/// A car with its make resolved to a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarListingResponseData {
    pub id: i32,
    pub name: String,
    pub make: String,
    pub model: String,
    pub cool_factor: i16,
    pub img: String,
    pub owns: bool,
}

impl From<&CarListing> for CarListingResponseData {
    fn from(car: &CarListing) -> Self {
        Self {
            id: car.id.0,
            name: car.name.clone(),
            make: car.make.clone(),
            model: car.model.clone(),
            cool_factor: car.cool_factor.value(),
            img: car.img.clone(),
            owns: car.owns,
        }
    }
}
