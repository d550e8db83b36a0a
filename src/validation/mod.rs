use chrono::NaiveDate;
use std::fmt;

pub const RECIPIENT_LEN: usize = 11;
pub const GENDER_SYMBOLS: &[char] = &['ж', 'Ж', 'м', 'М'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

pub type ValidationResult = Result<(), ValidationError>;

pub fn validate_required(field: &'static str, value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }

    Ok(())
}

pub fn validate_positive_quantity(quantity: i32) -> ValidationResult {
    if quantity <= 0 {
        return Err(ValidationError::new(
            "quantity",
            "must be greater than zero",
        ));
    }

    Ok(())
}

fn is_cyrillic(ch: char) -> bool {
    matches!(ch, 'а'..='я' | 'А'..='Я' | 'ё' | 'Ё')
}

/// Validates the 11-character recipient code: two Cyrillic letters, a
/// `DDMMYY` birth date, two more Cyrillic letters, and a gender symbol.
/// Rules run in order and the first failing rule wins.
pub fn validate_recipient(recipient: &str) -> ValidationResult {
    let chars: Vec<char> = recipient.chars().collect();

    if chars.len() < RECIPIENT_LEN {
        return Err(ValidationError::new("recipient", "too short"));
    }
    if chars.len() > RECIPIENT_LEN {
        return Err(ValidationError::new("recipient", "too long"));
    }

    if chars.iter().any(|ch| !ch.is_alphanumeric()) {
        return Err(ValidationError::new("recipient", "non-alphanumeric"));
    }

    if !chars[0..2].iter().all(|ch| is_cyrillic(*ch)) {
        return Err(ValidationError::new(
            "recipient",
            "first two symbols should be Cyrillic",
        ));
    }

    if !chars[8..10].iter().all(|ch| is_cyrillic(*ch)) {
        return Err(ValidationError::new(
            "recipient",
            "symbols after date should be Cyrillic",
        ));
    }

    let date_part: String = chars[2..8].iter().collect();
    let all_digits = date_part.chars().all(|ch| ch.is_ascii_digit());
    if !all_digits || NaiveDate::parse_from_str(&date_part, "%d%m%y").is_err() {
        return Err(ValidationError::new("recipient", "date not found"));
    }

    if !GENDER_SYMBOLS.contains(&chars[10]) {
        return Err(ValidationError::new("recipient", "invalid gender symbol"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_of(result: ValidationResult) -> String {
        result.unwrap_err().message
    }

    #[test]
    fn validates_required_field() {
        assert!(validate_required("name", "value").is_ok());
        assert!(validate_required("name", "   ").is_err());
        assert!(validate_required("name", "").is_err());
    }

    #[test]
    fn validates_positive_quantity() {
        assert!(validate_positive_quantity(1).is_ok());
        assert!(validate_positive_quantity(100).is_ok());
        assert!(validate_positive_quantity(0).is_err());
        assert!(validate_positive_quantity(-5).is_err());
    }

    #[test]
    fn accepts_well_formed_recipient() {
        assert!(validate_recipient("АБ240191ВГж").is_ok());
        assert!(validate_recipient("яё311299ЪЬМ").is_ok());
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(message_of(validate_recipient("АБ240191Вж")), "too short");
        assert_eq!(message_of(validate_recipient("")), "too short");
        assert_eq!(
            message_of(validate_recipient("АБ240191ВГжж")),
            "too long"
        );
    }

    #[test]
    fn rejects_non_alphanumeric() {
        assert_eq!(
            message_of(validate_recipient("АБ24019-ВГж")),
            "non-alphanumeric"
        );
        assert_eq!(
            message_of(validate_recipient("АБ 40191ВГж")),
            "non-alphanumeric"
        );
    }

    #[test]
    fn rejects_latin_prefix() {
        assert_eq!(
            message_of(validate_recipient("AB240191ВГж")),
            "first two symbols should be Cyrillic"
        );
    }

    #[test]
    fn rejects_latin_letters_after_date() {
        assert_eq!(
            message_of(validate_recipient("АБ240191VGж")),
            "symbols after date should be Cyrillic"
        );
    }

    #[test]
    fn rejects_invalid_calendar_date() {
        // day 32
        assert_eq!(
            message_of(validate_recipient("АБ320191ВГж")),
            "date not found"
        );
        // month 13
        assert_eq!(
            message_of(validate_recipient("АБ241391ВГж")),
            "date not found"
        );
        // letters where the date should be
        assert_eq!(
            message_of(validate_recipient("АБввгг91ВГж")),
            "date not found"
        );
    }

    #[test]
    fn rejects_invalid_gender_symbol() {
        assert_eq!(
            message_of(validate_recipient("АБ240191ВГx")),
            "invalid gender symbol"
        );
        assert_eq!(
            message_of(validate_recipient("АБ240191ВГд")),
            "invalid gender symbol"
        );
    }

    #[test]
    fn accepts_both_gender_cases() {
        for symbol in GENDER_SYMBOLS {
            let code = format!("АБ240191ВГ{}", symbol);
            assert!(validate_recipient(&code).is_ok(), "symbol {}", symbol);
        }
    }

    #[test]
    fn length_is_counted_in_characters_not_bytes() {
        // 11 Cyrillic characters encode to 22 bytes; still a valid length
        let code = "АБ240191ВГж";
        assert_eq!(code.chars().count(), RECIPIENT_LEN);
        assert!(code.len() > RECIPIENT_LEN);
        assert!(validate_recipient(code).is_ok());
    }
}
