use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::car::errors::CarError;
use crate::domain::car::models::Car;
use crate::domain::car::models::CarDetails;
use crate::domain::car::models::CarId;
use crate::domain::car::models::CarListing;
use crate::domain::car::models::CoolFactor;
use crate::domain::car::ports::CarRepository;
use crate::domain::make::models::MakeId;
use crate::domain::user::models::UserId;

pub struct PostgresCarRepository {
    pool: PgPool,
}

impl PostgresCarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CarRow {
    id: i32,
    name: String,
    make_id: i32,
    model: String,
    cool_factor: i16,
    img: String,
    owns: bool,
    owner_id: Uuid,
}

impl TryFrom<CarRow> for Car {
    type Error = CarError;

    fn try_from(row: CarRow) -> Result<Self, Self::Error> {
        Ok(Car {
            id: CarId(row.id),
            owner_id: UserId(row.owner_id),
            details: CarDetails::new(
                row.name,
                MakeId(row.make_id),
                row.model,
                row.cool_factor as i64,
                row.img,
                row.owns,
            )?,
        })
    }
}

#[derive(sqlx::FromRow)]
struct CarListingRow {
    id: i32,
    name: String,
    make: String,
    model: String,
    cool_factor: i16,
    img: String,
    owns: bool,
}

impl TryFrom<CarListingRow> for CarListing {
    type Error = CarError;

    fn try_from(row: CarListingRow) -> Result<Self, Self::Error> {
        Ok(CarListing {
            id: CarId(row.id),
            name: row.name,
            make: row.make,
            model: row.model,
            cool_factor: CoolFactor::new(row.cool_factor as i64)
                .map_err(|e| CarError::InvalidDetails(e.into()))?,
            img: row.img,
            owns: row.owns,
        })
    }
}

fn map_write_error(e: sqlx::Error, make_id: MakeId) -> CarError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return CarError::UnknownMake(make_id);
        }
    }
    CarError::DatabaseError(e.to_string())
}

#[async_trait]
impl CarRepository for PostgresCarRepository {
    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<CarListing>, CarError> {
        sqlx::query_as::<_, CarListingRow>(
            r#"
            SELECT cars.id, cars.name, makes.name AS make, cars.model,
                   cars.cool_factor, cars.img, cars.owns
            FROM cars
            JOIN makes ON makes.id = cars.make_id
            WHERE cars.owner_id = $1
            ORDER BY cars.id ASC
            "#,
        )
        .bind(owner_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CarError::DatabaseError(e.to_string()))?
        .into_iter()
        .map(CarListing::try_from)
        .collect()
    }

    async fn find_by_owner(
        &self,
        owner_id: &UserId,
        id: CarId,
    ) -> Result<Option<CarListing>, CarError> {
        sqlx::query_as::<_, CarListingRow>(
            r#"
            SELECT cars.id, cars.name, makes.name AS make, cars.model,
                   cars.cool_factor, cars.img, cars.owns
            FROM cars
            JOIN makes ON makes.id = cars.make_id
            WHERE cars.id = $1 AND cars.owner_id = $2
            "#,
        )
        .bind(id.0)
        .bind(owner_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CarError::DatabaseError(e.to_string()))?
        .map(CarListing::try_from)
        .transpose()
    }

    async fn create(&self, owner_id: &UserId, details: CarDetails) -> Result<Car, CarError> {
        let row = sqlx::query_as::<_, CarRow>(
            r#"
            INSERT INTO cars (name, make_id, model, cool_factor, img, owns, owner_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, make_id, model, cool_factor, img, owns, owner_id
            "#,
        )
        .bind(&details.name)
        .bind(details.make_id.0)
        .bind(&details.model)
        .bind(details.cool_factor.value())
        .bind(&details.img)
        .bind(details.owns)
        .bind(owner_id.0)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, details.make_id))?;

        Car::try_from(row)
    }

    async fn update(
        &self,
        owner_id: &UserId,
        id: CarId,
        details: CarDetails,
    ) -> Result<Option<Car>, CarError> {
        sqlx::query_as::<_, CarRow>(
            r#"
            UPDATE cars
            SET name = $1,
                make_id = $2,
                model = $3,
                cool_factor = $4,
                img = $5,
                owns = $6
            WHERE id = $7 AND owner_id = $8
            RETURNING id, name, make_id, model, cool_factor, img, owns, owner_id
            "#,
        )
        .bind(&details.name)
        .bind(details.make_id.0)
        .bind(&details.model)
        .bind(details.cool_factor.value())
        .bind(&details.img)
        .bind(details.owns)
        .bind(id.0)
        .bind(owner_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, details.make_id))?
        .map(Car::try_from)
        .transpose()
    }

    async fn delete(&self, owner_id: &UserId, id: CarId) -> Result<Option<Car>, CarError> {
        sqlx::query_as::<_, CarRow>(
            r#"
            DELETE FROM cars
            WHERE id = $1 AND owner_id = $2
            RETURNING id, name, make_id, model, cool_factor, img, owns, owner_id
            "#,
        )
        .bind(id.0)
        .bind(owner_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CarError::DatabaseError(e.to_string()))?
        .map(Car::try_from)
        .transpose()
    }
}
