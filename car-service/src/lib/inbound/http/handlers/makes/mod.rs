pub mod create_make;
pub mod list_makes;

pub use create_make::create_make;
pub use list_makes::list_makes;

use serde::Deserialize;
use serde::Serialize;

use crate::domain::make::models::Make;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateMakeRequest {
    name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MakeResponseData {
    pub id: i32,
    pub name: String,
}

impl From<&Make> for MakeResponseData {
    fn from(make: &Make) -> Self {
        Self {
            id: make.id.0,
            name: make.name.as_str().to_string(),
        }
    }
}
