use std::fmt;

use crate::domain::car::errors::CarDetailsError;
use crate::domain::car::errors::CoolFactorError;
use crate::domain::make::models::MakeId;
use crate::domain::user::models::UserId;

/// A car in some owner's collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    pub id: CarId,
    pub owner_id: UserId,
    pub details: CarDetails,
}

/// A car joined with the name of its make, as shown in listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarListing {
    pub id: CarId,
    pub name: String,
    pub make: String,
    pub model: String,
    pub cool_factor: CoolFactor,
    pub img: String,
    pub owns: bool,
}

/// Car identifier, assigned by storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CarId(pub i32);

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// How cool a car is, from 0 to 10 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CoolFactor(i16);

impl CoolFactor {
    pub const MIN: i16 = 0;
    pub const MAX: i16 = 10;

    /// # Errors
    /// * `OutOfRange` - Value outside 0..=10
    pub fn new(value: i64) -> Result<Self, CoolFactorError> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(Self(value as i16))
        } else {
            Err(CoolFactorError::OutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            })
        }
    }

    pub fn value(&self) -> i16 {
        self.0
    }
}

/// Writable fields of a car. Used for both creation and full replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarDetails {
    pub name: String,
    pub make_id: MakeId,
    pub model: String,
    pub cool_factor: CoolFactor,
    pub img: String,
    pub owns: bool,
}

impl CarDetails {
    const MAX_TEXT_LENGTH: usize = 128;

    /// Validate raw car fields.
    ///
    /// # Errors
    /// * `EmptyField` - Name or model is blank
    /// * `TooLong` - Name or model exceeds 128 characters
    /// * `CoolFactor` - Cool factor outside 0..=10
    pub fn new(
        name: String,
        make_id: MakeId,
        model: String,
        cool_factor: i64,
        img: String,
        owns: bool,
    ) -> Result<Self, CarDetailsError> {
        Ok(Self {
            name: Self::required_text("name", name)?,
            make_id,
            model: Self::required_text("model", model)?,
            cool_factor: CoolFactor::new(cool_factor)?,
            img: img.trim().to_string(),
            owns,
        })
    }

    fn required_text(field: &'static str, value: String) -> Result<String, CarDetailsError> {
        let value = value.trim().to_string();
        let length = value.chars().count();

        if length == 0 {
            Err(CarDetailsError::EmptyField(field))
        } else if length > Self::MAX_TEXT_LENGTH {
            Err(CarDetailsError::TooLong {
                field,
                max: Self::MAX_TEXT_LENGTH,
                actual: length,
            })
        } else {
            Ok(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(name: &str, model: &str, cool_factor: i64) -> Result<CarDetails, CarDetailsError> {
        CarDetails::new(
            name.to_string(),
            MakeId(1),
            model.to_string(),
            cool_factor,
            "https://example.com/car.jpg".to_string(),
            true,
        )
    }

    #[test]
    fn test_cool_factor_bounds() {
        assert_eq!(CoolFactor::new(0).unwrap().value(), 0);
        assert_eq!(CoolFactor::new(10).unwrap().value(), 10);
        assert!(CoolFactor::new(-1).is_err());
        assert!(CoolFactor::new(11).is_err());
        assert!(CoolFactor::new(i64::MAX).is_err());
    }

    #[test]
    fn test_details_valid() {
        let details = details(" Larry ", "AE86", 9).unwrap();
        assert_eq!(details.name, "Larry");
        assert_eq!(details.cool_factor.value(), 9);
    }

    #[test]
    fn test_details_rejects_blank_fields() {
        assert_eq!(
            details("", "AE86", 9),
            Err(CarDetailsError::EmptyField("name"))
        );
        assert_eq!(
            details("Larry", "  ", 9),
            Err(CarDetailsError::EmptyField("model"))
        );
    }

    #[test]
    fn test_details_rejects_cool_factor() {
        assert!(matches!(
            details("Larry", "AE86", 42),
            Err(CarDetailsError::CoolFactor(_))
        ));
    }
}
