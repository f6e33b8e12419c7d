//! Interactive field selection (dialoguer)

use crate::error::Result;
use dialoguer::Select;
use iem_reco_common::{Field, FormFields};

/// Fill the fields not given on the command line.
///
/// With `interactive` false the missing fields stay empty so that
/// validation reports them.
pub fn complete_fields(
    budget: Option<String>,
    genre: Option<String>,
    sound_character: Option<String>,
    interactive: bool,
) -> Result<FormFields> {
    let resolve = |value: Option<String>, field: Field| -> Result<String> {
        match value {
            Some(v) => Ok(v),
            None if interactive => choose(field),
            None => Ok(String::new()),
        }
    };

    Ok(FormFields {
        budget: resolve(budget, Field::Budget)?,
        genre: resolve(genre, Field::Genre)?,
        sound_character: resolve(sound_character, Field::SoundCharacter)?,
    })
}

fn choose(field: Field) -> Result<String> {
    let options = field.options();
    let items: Vec<String> = options
        .iter()
        .map(|o| format!("{} ({})", o.label, o.value))
        .collect();

    let index = Select::new()
        .with_prompt(field.label())
        .items(&items)
        .default(0)
        .interact()?;

    Ok(options[index].value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_fields_non_interactive_keeps_missing_empty() {
        let fields = complete_fields(Some("< 500k".into()), None, Some("Seimbang".into()), false)
            .expect("complete failed");

        assert_eq!(fields.budget, "< 500k");
        assert_eq!(fields.genre, "");
        assert!(fields.validate().is_err());
    }

    #[test]
    fn test_complete_fields_all_given() {
        let fields = complete_fields(
            Some("> 2jt".into()),
            Some("Jazz".into()),
            Some("Detail / Jernih".into()),
            true,
        )
        .expect("complete failed");

        assert_eq!(fields, FormFields::new("> 2jt", "Jazz", "Detail / Jernih"));
    }
}
