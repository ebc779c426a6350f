#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use auth::HashCost;
use auth::JwtHandler;
use auth::PasswordHasher;
use car_service::domain::car::errors::CarError;
use car_service::domain::car::models::Car;
use car_service::domain::car::models::CarDetails;
use car_service::domain::car::models::CarId;
use car_service::domain::car::models::CarListing;
use car_service::domain::car::ports::CarRepository;
use car_service::domain::car::service::CarService;
use car_service::domain::make::errors::MakeError;
use car_service::domain::make::models::Make;
use car_service::domain::make::models::MakeId;
use car_service::domain::make::models::MakeName;
use car_service::domain::make::ports::MakeRepository;
use car_service::domain::make::service::MakeService;
use car_service::domain::user::errors::UserError;
use car_service::domain::user::models::EmailAddress;
use car_service::domain::user::models::User;
use car_service::domain::user::models::UserId;
use car_service::domain::user::ports::UserRepository;
use car_service::domain::user::service::UserService;
use car_service::inbound::http::router::create_router;
use serde_json::json;
use serde_json::Value;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Argon2 parameters cheap enough for tests.
pub fn test_authenticator() -> Authenticator {
    let hasher = PasswordHasher::with_cost(HashCost {
        memory_kib: 1024,
        iterations: 1,
        parallelism: 1,
    })
    .expect("Failed to build password hasher");
    Authenticator::with_password_hasher(JWT_SECRET, hasher)
}

/// Credential store backed by a map; the lock makes the uniqueness check
/// and insert one atomic step.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn count(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if users.values().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists(user.email.to_string()));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.users.lock().unwrap().get(id).cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| &u.email == email)
            .cloned())
    }
}

#[derive(Default)]
pub struct InMemoryMakeRepository {
    makes: Mutex<Vec<Make>>,
}

#[async_trait]
impl MakeRepository for InMemoryMakeRepository {
    async fn list_all(&self) -> Result<Vec<Make>, MakeError> {
        Ok(self.makes.lock().unwrap().clone())
    }

    async fn create(&self, name: MakeName) -> Result<Make, MakeError> {
        let mut makes = self.makes.lock().unwrap();
        if makes.iter().any(|m| m.name == name) {
            return Err(MakeError::NameAlreadyExists(name.to_string()));
        }
        let make = Make {
            id: MakeId(makes.len() as i32 + 1),
            name,
        };
        makes.push(make.clone());
        Ok(make)
    }
}

/// Car store that resolves make names through a shared make repository.
pub struct InMemoryCarRepository {
    makes: Arc<InMemoryMakeRepository>,
    cars: Mutex<Vec<Car>>,
}

impl InMemoryCarRepository {
    pub fn new(makes: Arc<InMemoryMakeRepository>) -> Self {
        Self {
            makes,
            cars: Mutex::new(Vec::new()),
        }
    }

    fn make_name(&self, id: MakeId) -> Option<String> {
        self.makes
            .makes
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.id == id)
            .map(|m| m.name.as_str().to_string())
    }

    fn listing(&self, car: &Car) -> CarListing {
        CarListing {
            id: car.id,
            name: car.details.name.clone(),
            make: self.make_name(car.details.make_id).unwrap_or_default(),
            model: car.details.model.clone(),
            cool_factor: car.details.cool_factor,
            img: car.details.img.clone(),
            owns: car.details.owns,
        }
    }
}

#[async_trait]
impl CarRepository for InMemoryCarRepository {
    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<CarListing>, CarError> {
        let cars = self.cars.lock().unwrap();
        Ok(cars
            .iter()
            .filter(|c| &c.owner_id == owner_id)
            .map(|c| self.listing(c))
            .collect())
    }

    async fn find_by_owner(
        &self,
        owner_id: &UserId,
        id: CarId,
    ) -> Result<Option<CarListing>, CarError> {
        let cars = self.cars.lock().unwrap();
        Ok(cars
            .iter()
            .find(|c| c.id == id && &c.owner_id == owner_id)
            .map(|c| self.listing(c)))
    }

    async fn create(&self, owner_id: &UserId, details: CarDetails) -> Result<Car, CarError> {
        if self.make_name(details.make_id).is_none() {
            return Err(CarError::UnknownMake(details.make_id));
        }
        let mut cars = self.cars.lock().unwrap();
        let next_id = cars.iter().map(|c| c.id.0).max().unwrap_or(0) + 1;
        let car = Car {
            id: CarId(next_id),
            owner_id: *owner_id,
            details,
        };
        cars.push(car.clone());
        Ok(car)
    }

    async fn update(
        &self,
        owner_id: &UserId,
        id: CarId,
        details: CarDetails,
    ) -> Result<Option<Car>, CarError> {
        if self.make_name(details.make_id).is_none() {
            return Err(CarError::UnknownMake(details.make_id));
        }
        let mut cars = self.cars.lock().unwrap();
        Ok(cars
            .iter_mut()
            .find(|c| c.id == id && &c.owner_id == owner_id)
            .map(|car| {
                car.details = details;
                car.clone()
            }))
    }

    async fn delete(&self, owner_id: &UserId, id: CarId) -> Result<Option<Car>, CarError> {
        let mut cars = self.cars.lock().unwrap();
        let position = cars
            .iter()
            .position(|c| c.id == id && &c.owner_id == owner_id);
        Ok(position.map(|index| cars.remove(index)))
    }
}

/// Test application that spawns a real server on a random port
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
    pub users: Arc<InMemoryUserRepository>,
    pub makes: Arc<InMemoryMakeRepository>,
    pub cars: Arc<InMemoryCarRepository>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let users = Arc::new(InMemoryUserRepository::default());
        let makes = Arc::new(InMemoryMakeRepository::default());
        let cars = Arc::new(InMemoryCarRepository::new(Arc::clone(&makes)));

        let authenticator = Arc::new(test_authenticator());

        let user_service = Arc::new(UserService::new(
            Arc::clone(&users),
            Arc::clone(&authenticator),
            chrono::Duration::hours(24),
        ));
        let car_service = Arc::new(CarService::new(Arc::clone(&cars)));
        let make_service = Arc::new(MakeService::new(Arc::clone(&makes)));

        let router = create_router(user_service, car_service, make_service, authenticator);

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(JWT_SECRET),
            users,
            makes,
            cars,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PUT request with Bearer token
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .put(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Sign up and return the issued token
    pub async fn sign_up(&self, email: &str, password: &str) -> String {
        let response = self
            .post("/auth/signup")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: Value = response.json().await.expect("Failed to parse response");
        body["token"]
            .as_str()
            .expect("Missing token in signup response")
            .to_string()
    }

    /// Add a make directly to the store and return its id
    pub async fn add_make(&self, name: &str) -> i32 {
        self.makes
            .create(MakeName::new(name.to_string()).unwrap())
            .await
            .expect("Failed to create make")
            .id
            .0
    }
}
