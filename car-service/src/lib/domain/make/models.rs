use std::fmt;

use crate::domain::make::errors::MakeNameError;

/// Car manufacturer. Makes are shared by every owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Make {
    pub id: MakeId,
    pub name: MakeName,
}

/// Make identifier, assigned by storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MakeId(pub i32);

impl fmt::Display for MakeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Make name value type, 1-64 characters after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MakeName(String);

impl MakeName {
    const MAX_LENGTH: usize = 64;

    /// # Errors
    /// * `Empty` - Name is blank
    /// * `TooLong` - Name exceeds 64 characters
    pub fn new(name: String) -> Result<Self, MakeNameError> {
        let name = name.trim().to_string();
        let length = name.chars().count();

        if length == 0 {
            Err(MakeNameError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(MakeNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MakeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_name_trims() {
        let name = MakeName::new("  Ferrari ".to_string()).unwrap();
        assert_eq!(name.as_str(), "Ferrari");
    }

    #[test]
    fn test_make_name_limits() {
        assert_eq!(MakeName::new(" ".to_string()), Err(MakeNameError::Empty));
        assert_eq!(
            MakeName::new("x".repeat(65)),
            Err(MakeNameError::TooLong {
                max: 64,
                actual: 65
            })
        );
    }
}
