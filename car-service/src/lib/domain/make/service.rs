use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::make::errors::MakeError;
use crate::domain::make::models::Make;
use crate::domain::make::models::MakeName;
use crate::domain::make::ports::MakeRepository;
use crate::domain::make::ports::MakeServicePort;

pub struct MakeService<MR>
where
    MR: MakeRepository,
{
    repository: Arc<MR>,
}

impl<MR> MakeService<MR>
where
    MR: MakeRepository,
{
    pub fn new(repository: Arc<MR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<MR> MakeServicePort for MakeService<MR>
where
    MR: MakeRepository,
{
    async fn list_makes(&self) -> Result<Vec<Make>, MakeError> {
        self.repository.list_all().await
    }

    async fn create_make(&self, name: MakeName) -> Result<Make, MakeError> {
        let make = self.repository.create(name).await?;
        tracing::info!(make_id = %make.id, name = %make.name, "Make created");
        Ok(make)
    }
}
