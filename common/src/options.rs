//! Choices offered by the form controls
//!
//! Values are what the backend expects on the wire; labels are for display.

/// A selectable form value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn opt(value: &'static str, label: &'static str) -> FormOption {
    FormOption { value, label }
}

pub const BUDGET_OPTIONS: &[FormOption] = &[
    opt("< 500k", "Under Rp 500k"),
    opt("500k-1jt", "Rp 500k - 1 million"),
    opt("1jt-2jt", "Rp 1 - 2 million"),
    opt("> 2jt", "Over Rp 2 million"),
];

pub const GENRE_OPTIONS: &[FormOption] = &[
    opt("Pop", "Pop"),
    opt("Rock", "Rock"),
    opt("EDM", "EDM"),
    opt("Jazz", "Jazz"),
    opt("Campuran", "Mixed"),
];

pub const SOUND_CHARACTER_OPTIONS: &[FormOption] = &[
    opt("Bass kuat", "Strong bass"),
    opt("Seimbang", "Balanced"),
    opt("Detail / Jernih", "Detailed / Clear"),
];

/// Which of the three form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Budget,
    Genre,
    SoundCharacter,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Budget, Field::Genre, Field::SoundCharacter];

    /// Element id / JSON key
    pub fn key(&self) -> &'static str {
        match self {
            Field::Budget => "budget",
            Field::Genre => "genre",
            Field::SoundCharacter => "sound_character",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Budget => "Budget",
            Field::Genre => "Genre",
            Field::SoundCharacter => "Sound character",
        }
    }

    pub fn options(&self) -> &'static [FormOption] {
        match self {
            Field::Budget => BUDGET_OPTIONS,
            Field::Genre => GENRE_OPTIONS,
            Field::SoundCharacter => SOUND_CHARACTER_OPTIONS,
        }
    }
}
