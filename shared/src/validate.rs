//! 表单校验
//!
//! Pure predicates over raw field strings. Forms turn a failed check into a
//! user-facing string through [`ErrorMessage`].

use std::fmt;

use crate::StationId;

pub const NAME_MIN_LENGTH: usize = 2;
pub const NAME_MAX_LENGTH: usize = 10;
pub const MIN_DISTANCE: u32 = 1;

/// Fixed message table keyed by failure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorMessage {
    InvalidName,
    NoneOfSelectedSection,
    DuplicatedSection,
    InvalidDistance,
    DuplicatedColor,
    IncompleteForm,
}

impl ErrorMessage {
    pub const fn text(&self) -> &'static str {
        match self {
            ErrorMessage::InvalidName => {
                "Name must be 2 to 10 characters of Korean syllables or digits."
            }
            ErrorMessage::NoneOfSelectedSection => "Select both an up and a down station.",
            ErrorMessage::DuplicatedSection => "Up and down stations must differ.",
            ErrorMessage::InvalidDistance => "Distance must be a number of at least 1.",
            ErrorMessage::DuplicatedColor => "This color is already used by another line.",
            ErrorMessage::IncompleteForm => "Please fill in every field correctly.",
        }
    }
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Hangul syllables (가..힣) and ASCII digits only. Empty input is not valid.
pub fn is_korean_and_number(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| ('\u{AC00}'..='\u{D7A3}').contains(&c) || c.is_ascii_digit())
}

pub fn is_valid_name(value: &str) -> bool {
    let len = value.chars().count();
    (NAME_MIN_LENGTH..=NAME_MAX_LENGTH).contains(&len) && is_korean_and_number(value)
}

pub fn check_name(value: &str) -> Result<(), ErrorMessage> {
    if is_valid_name(value) {
        Ok(())
    } else {
        Err(ErrorMessage::InvalidName)
    }
}

/// Checks a pair of select-box values. An empty string means "nothing selected".
pub fn check_section(up_station_id: &str, down_station_id: &str) -> Result<(), ErrorMessage> {
    if up_station_id.is_empty() || down_station_id.is_empty() {
        return Err(ErrorMessage::NoneOfSelectedSection);
    }
    if up_station_id == down_station_id {
        return Err(ErrorMessage::DuplicatedSection);
    }
    Ok(())
}

pub fn is_valid_section(up_station_id: &str, down_station_id: &str) -> bool {
    check_section(up_station_id, down_station_id).is_ok()
}

/// Parses both select-box values into ids once [`check_section`] passes.
pub fn parse_section(
    up_station_id: &str,
    down_station_id: &str,
) -> Result<(StationId, StationId), ErrorMessage> {
    check_section(up_station_id, down_station_id)?;
    let up = up_station_id
        .parse()
        .map_err(|_| ErrorMessage::NoneOfSelectedSection)?;
    let down = down_station_id
        .parse()
        .map_err(|_| ErrorMessage::NoneOfSelectedSection)?;
    Ok((up, down))
}

pub fn check_distance(raw: &str) -> Result<u32, ErrorMessage> {
    match raw.trim().parse::<u32>() {
        Ok(distance) if distance >= MIN_DISTANCE => Ok(distance),
        _ => Err(ErrorMessage::InvalidDistance),
    }
}

pub fn is_valid_distance(raw: &str) -> bool {
    check_distance(raw).is_ok()
}
