use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::make::errors::MakeError;
use crate::domain::make::models::Make;
use crate::domain::make::models::MakeId;
use crate::domain::make::models::MakeName;
use crate::domain::make::ports::MakeRepository;

pub struct PostgresMakeRepository {
    pool: PgPool,
}

impl PostgresMakeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct MakeRow {
    id: i32,
    name: String,
}

impl TryFrom<MakeRow> for Make {
    type Error = MakeError;

    fn try_from(row: MakeRow) -> Result<Self, Self::Error> {
        Ok(Make {
            id: MakeId(row.id),
            name: MakeName::new(row.name)?,
        })
    }
}

#[async_trait]
impl MakeRepository for PostgresMakeRepository {
    async fn list_all(&self) -> Result<Vec<Make>, MakeError> {
        sqlx::query_as::<_, MakeRow>("SELECT id, name FROM makes ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| MakeError::DatabaseError(e.to_string()))?
            .into_iter()
            .map(Make::try_from)
            .collect()
    }

    async fn create(&self, name: MakeName) -> Result<Make, MakeError> {
        let row = sqlx::query_as::<_, MakeRow>(
            r#"
            INSERT INTO makes (name)
            VALUES ($1)
            RETURNING id, name
            "#,
        )
        .bind(name.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return MakeError::NameAlreadyExists(name.to_string());
                }
            }
            MakeError::DatabaseError(e.to_string())
        })?;

        Make::try_from(row)
    }
}
