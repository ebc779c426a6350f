//! Demo data for a fresh database.
//!
//! Loading is idempotent: existing users and makes are reused, and cars are
//! only inserted for a seed owner that has none yet.

use std::collections::HashMap;

use auth::Authenticator;
use chrono::Utc;

use crate::domain::car::models::CarDetails;
use crate::domain::car::ports::CarRepository;
use crate::domain::make::models::MakeId;
use crate::domain::make::models::MakeName;
use crate::domain::make::ports::MakeRepository;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

pub struct SeedUser {
    pub email: &'static str,
    pub password: &'static str,
}

pub struct SeedCar {
    pub name: &'static str,
    pub make: &'static str,
    pub model: &'static str,
    pub cool_factor: i64,
    pub img: &'static str,
    pub owns: bool,
}

pub const USERS: &[SeedUser] = &[SeedUser {
    email: "demo@cars.dev",
    password: "demo-password",
}];

pub const MAKES: &[&str] = &["Ferrari", "BMW", "Toyota"];

/// Owned by the first seed user.
pub const CARS: &[SeedCar] = &[
    SeedCar {
        name: "Fernando",
        make: "Ferrari",
        model: "LaFerrari",
        cool_factor: 10,
        img: "https://api.ferrarinetwork.ferrari.com/v2/network-content/medias/resize/5ddb97392cdb32285a799dfa-laferrari-2013-share?apikey=9QscUiwr5n0NhOuQb463QEKghPrVlpaF&width=1080",
        owns: false,
    },
    SeedCar {
        name: "Levis",
        make: "BMW",
        model: "Z3",
        cool_factor: 7,
        img: "https://cvluxurycars.com/wp-content/uploads/2019/05/1997-BMW-Z3-Atlantic-Blue-7.jpg",
        owns: true,
    },
    SeedCar {
        name: "Lewis",
        make: "Toyota",
        model: "Prius",
        cool_factor: 0,
        img: "https://o.aolcdn.com/images/dims3/GLOB/legacy_thumbnail/800x450/format/jpg/quality/85/http://www.blogcdn.com/www.autoblog.com/media/2009/05/prius2010_rev000_opt.jpg",
        owns: true,
    },
];

/// What a seed run inserted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: usize,
    pub makes: usize,
    pub cars: usize,
}

/// Load the seed data through the repository ports.
pub async fn load<UR, MR, CR>(
    users: &UR,
    makes: &MR,
    cars: &CR,
    authenticator: &Authenticator,
) -> Result<SeedSummary, anyhow::Error>
where
    UR: UserRepository,
    MR: MakeRepository,
    CR: CarRepository,
{
    let mut summary = SeedSummary::default();

    let mut owner_id: Option<UserId> = None;
    for seed_user in USERS {
        let email = EmailAddress::new(seed_user.email.to_string())?;
        let user = match users.find_by_email(&email).await? {
            Some(existing) => existing,
            None => {
                let user = User {
                    id: UserId::new(),
                    email,
                    password_hash: authenticator.hash_password(seed_user.password)?,
                    created_at: Utc::now(),
                };
                summary.users += 1;
                users.create(user).await?
            }
        };
        owner_id.get_or_insert(user.id);
    }

    let mut make_ids: HashMap<String, MakeId> = makes
        .list_all()
        .await?
        .into_iter()
        .map(|make| (make.name.as_str().to_string(), make.id))
        .collect();

    for name in MAKES {
        if !make_ids.contains_key(*name) {
            let make = makes.create(MakeName::new(name.to_string())?).await?;
            make_ids.insert(make.name.as_str().to_string(), make.id);
            summary.makes += 1;
        }
    }

    let Some(owner_id) = owner_id else {
        return Ok(summary);
    };

    if cars.list_by_owner(&owner_id).await?.is_empty() {
        for seed_car in CARS {
            let make_id = *make_ids
                .get(seed_car.make)
                .ok_or_else(|| anyhow::anyhow!("Seed make missing: {}", seed_car.make))?;

            let details = CarDetails::new(
                seed_car.name.to_string(),
                make_id,
                seed_car.model.to_string(),
                seed_car.cool_factor,
                seed_car.img.to_string(),
                seed_car.owns,
            )?;

            cars.create(&owner_id, details).await?;
            summary.cars += 1;
        }
    }

    Ok(summary)
}
