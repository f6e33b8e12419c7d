//! Raw form values and presence validation

use crate::error::{Error, Result};
use crate::types::UserInput;

/// Values read from the three form controls at submit time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub budget: String,
    pub genre: String,
    pub sound_character: String,
}

impl FormFields {
    pub fn new(
        budget: impl Into<String>,
        genre: impl Into<String>,
        sound_character: impl Into<String>,
    ) -> Self {
        Self {
            budget: budget.into(),
            genre: genre.into(),
            sound_character: sound_character.into(),
        }
    }

    /// Presence check only. Values are passed through untouched.
    pub fn validate(&self) -> Result<UserInput> {
        if self.budget.is_empty() || self.genre.is_empty() || self.sound_character.is_empty() {
            return Err(Error::Validation);
        }

        Ok(UserInput {
            budget: self.budget.clone(),
            genre: self.genre.clone(),
            sound_character: self.sound_character.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_all_present() {
        let fields = FormFields::new("50-100", "EDM", "bass-heavy");
        let input = fields.validate().expect("validation failed");
        assert_eq!(input.budget, "50-100");
        assert_eq!(input.genre, "EDM");
        assert_eq!(input.sound_character, "bass-heavy");
    }

    #[test]
    fn test_validate_any_empty_field() {
        let cases = [
            FormFields::new("", "EDM", "bass-heavy"),
            FormFields::new("50-100", "", "bass-heavy"),
            FormFields::new("50-100", "EDM", ""),
            FormFields::default(),
        ];

        for fields in cases {
            let err = fields.validate().unwrap_err();
            assert!(matches!(err, Error::Validation), "{:?}", fields);
        }
    }

    #[test]
    fn test_validate_does_not_trim() {
        let input = FormFields::new(" ", " Pop ", "x").validate().expect("validation failed");
        assert_eq!(input.genre, " Pop ");
    }
}
