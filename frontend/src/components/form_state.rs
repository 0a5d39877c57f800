//! 表单状态管理模块
//!
//! Drafts hold raw field strings exactly as typed. Each draft derives the
//! inline error for every field and converts itself into an API request
//! once everything checks out.

use subway_shared::protocol::{AddSectionRequest, CreateLineRequest, ModifyLineRequest};
use subway_shared::validate::{
    ErrorMessage, MIN_DISTANCE, check_distance, check_name, check_section, parse_section,
};
use subway_shared::{LineId, Palette, UnknownColor};

fn incomplete(_: ErrorMessage) -> ErrorMessage {
    ErrorMessage::IncompleteForm
}

pub fn is_color_available(color: Palette, used: &[Palette]) -> bool {
    !used.contains(&color)
}

// =========================================================
// Station
// =========================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationDraft {
    pub name: String,
}

impl StationDraft {
    /// No message until something was typed.
    pub fn name_error(&self) -> Option<ErrorMessage> {
        if self.name.is_empty() {
            return None;
        }
        check_name(&self.name).err()
    }

    pub fn to_name(&self) -> Result<String, ErrorMessage> {
        check_name(&self.name).map_err(incomplete)?;
        Ok(self.name.clone())
    }
}

// =========================================================
// Section
// =========================================================

#[derive(Debug, Clone, PartialEq)]
pub struct SectionDraft {
    pub up_station_id: String,
    pub down_station_id: String,
    pub distance: String,
}

impl Default for SectionDraft {
    fn default() -> Self {
        Self {
            up_station_id: String::new(),
            down_station_id: String::new(),
            distance: MIN_DISTANCE.to_string(),
        }
    }
}

impl SectionDraft {
    /// Untouched selects (both empty) show no message yet.
    pub fn section_error(&self) -> Option<ErrorMessage> {
        if self.up_station_id.is_empty() && self.down_station_id.is_empty() {
            return None;
        }
        check_section(&self.up_station_id, &self.down_station_id).err()
    }

    pub fn distance_error(&self) -> Option<ErrorMessage> {
        check_distance(&self.distance).err()
    }

    fn parts(&self) -> Result<(u64, u64, u32), ErrorMessage> {
        let (up, down) = parse_section(&self.up_station_id, &self.down_station_id)?;
        let distance = check_distance(&self.distance)?;
        Ok((up, down, distance))
    }

    pub fn to_request(&self, line_id: LineId) -> Result<AddSectionRequest, ErrorMessage> {
        let (up_station_id, down_station_id, distance) = self.parts().map_err(incomplete)?;
        Ok(AddSectionRequest {
            line_id,
            up_station_id,
            down_station_id,
            distance,
        })
    }
}

// =========================================================
// Line
// =========================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineDraft {
    pub name: String,
    pub section: SectionDraft,
    pub color: Option<Palette>,
}

impl LineDraft {
    pub fn name_error(&self) -> Option<ErrorMessage> {
        if self.name.is_empty() {
            return None;
        }
        check_name(&self.name).err()
    }

    /// Picks a color unless another line already uses it.
    pub fn select_color(&mut self, color: Palette, used: &[Palette]) -> bool {
        if !is_color_available(color, used) {
            return false;
        }
        self.color = Some(color);
        true
    }

    /// Any invalid or empty field yields [`ErrorMessage::IncompleteForm`].
    pub fn to_request(&self, used: &[Palette]) -> Result<CreateLineRequest, ErrorMessage> {
        check_name(&self.name).map_err(incomplete)?;
        let (up_station_id, down_station_id, distance) =
            self.section.parts().map_err(incomplete)?;
        let color = self.color.ok_or(ErrorMessage::IncompleteForm)?;
        if !is_color_available(color, used) {
            return Err(ErrorMessage::DuplicatedColor);
        }
        Ok(CreateLineRequest {
            name: self.name.clone(),
            color,
            up_station_id,
            down_station_id,
            distance,
        })
    }
}

// =========================================================
// Line modification
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModifyLineError {
    #[error("{0}")]
    Invalid(ErrorMessage),
    /// The color field held something outside the palette.
    #[error(transparent)]
    Color(#[from] UnknownColor),
}

/// The color stays a raw string because it comes straight from the radio
/// input's `value` attribute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineModifyDraft {
    pub name: String,
    pub color: String,
}

impl LineModifyDraft {
    pub fn new(name: &str, color: Palette) -> Self {
        Self {
            name: name.to_string(),
            color: color.as_str().to_string(),
        }
    }

    pub fn name_error(&self) -> Option<ErrorMessage> {
        check_name(&self.name).err()
    }

    pub fn to_request(
        &self,
        id: LineId,
        used: &[Palette],
    ) -> Result<ModifyLineRequest, ModifyLineError> {
        check_name(&self.name)
            .map_err(incomplete)
            .map_err(ModifyLineError::Invalid)?;
        let color = Palette::try_from(self.color.as_str())?;
        if !is_color_available(color, used) {
            return Err(ModifyLineError::Invalid(ErrorMessage::DuplicatedColor));
        }
        Ok(ModifyLineRequest {
            id,
            name: self.name.clone(),
            color,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_line() -> LineDraft {
        LineDraft {
            name: "신분당선".into(),
            section: SectionDraft {
                up_station_id: "1".into(),
                down_station_id: "2".into(),
                distance: "5".into(),
            },
            color: Some(Palette::Red400),
        }
    }

    #[test]
    fn fresh_line_draft_shows_no_inline_errors() {
        let draft = LineDraft::default();
        assert_eq!(draft.name_error(), None);
        assert_eq!(draft.section.section_error(), None);
        assert_eq!(draft.section.distance_error(), None);
    }

    #[test]
    fn inline_errors_follow_input() {
        let mut draft = LineDraft::default();
        draft.name = "A".into();
        draft.section.up_station_id = "3".into();
        draft.section.distance = "0".into();
        assert_eq!(draft.name_error(), Some(ErrorMessage::InvalidName));
        assert_eq!(
            draft.section.section_error(),
            Some(ErrorMessage::NoneOfSelectedSection)
        );
        assert_eq!(draft.section.distance_error(), Some(ErrorMessage::InvalidDistance));

        draft.section.down_station_id = "3".into();
        assert_eq!(
            draft.section.section_error(),
            Some(ErrorMessage::DuplicatedSection)
        );
    }

    #[test]
    fn used_color_cannot_be_selected() {
        let used = [Palette::Red400, Palette::Blue600];
        let mut draft = LineDraft::default();
        assert!(!is_color_available(Palette::Red400, &used));
        assert!(!draft.select_color(Palette::Red400, &used));
        assert_eq!(draft.color, None);
        assert!(draft.select_color(Palette::Green400, &used));
        assert_eq!(draft.color, Some(Palette::Green400));
    }

    #[test]
    fn missing_color_blocks_submit() {
        let mut draft = complete_line();
        draft.color = None;
        assert_eq!(draft.to_request(&[]), Err(ErrorMessage::IncompleteForm));
    }

    #[test]
    fn any_invalid_field_blocks_submit() {
        let mut draft = complete_line();
        draft.section.down_station_id = "1".into();
        assert_eq!(draft.to_request(&[]), Err(ErrorMessage::IncompleteForm));

        let mut draft = complete_line();
        draft.name.clear();
        assert_eq!(draft.to_request(&[]), Err(ErrorMessage::IncompleteForm));

        let mut draft = complete_line();
        draft.section.distance = "".into();
        assert_eq!(draft.to_request(&[]), Err(ErrorMessage::IncompleteForm));
    }

    #[test]
    fn complete_draft_builds_request() {
        let req = complete_line().to_request(&[Palette::Blue600]).unwrap();
        assert_eq!(
            req,
            CreateLineRequest {
                name: "신분당선".into(),
                color: Palette::Red400,
                up_station_id: 1,
                down_station_id: 2,
                distance: 5,
            }
        );
    }

    #[test]
    fn color_taken_after_selection_is_rejected() {
        let draft = complete_line();
        assert_eq!(
            draft.to_request(&[Palette::Red400]),
            Err(ErrorMessage::DuplicatedColor)
        );
    }

    #[test]
    fn section_draft_targets_line() {
        let draft = SectionDraft {
            up_station_id: "4".into(),
            down_station_id: "8".into(),
            distance: "1".into(),
        };
        let req = draft.to_request(2).unwrap();
        assert_eq!(req.line_id, 2);
        assert_eq!((req.up_station_id, req.down_station_id, req.distance), (4, 8, 1));
        assert_eq!(
            SectionDraft::default().to_request(2),
            Err(ErrorMessage::IncompleteForm)
        );
    }

    #[test]
    fn modify_rejects_color_outside_palette() {
        let draft = LineModifyDraft {
            name: "분당선".into(),
            color: "#123456".into(),
        };
        assert_eq!(
            draft.to_request(1, &[]),
            Err(ModifyLineError::Color(UnknownColor("#123456".into())))
        );
    }

    #[test]
    fn modify_builds_request_from_valid_draft() {
        let mut draft = LineModifyDraft::new("분당선", Palette::Yellow400);
        draft.name = "수인분당선".into();
        let req = draft.to_request(6, &[Palette::Red400]).unwrap();
        assert_eq!(req.id, 6);
        assert_eq!(req.name, "수인분당선");
        assert_eq!(req.color, Palette::Yellow400);
    }

    #[test]
    fn station_draft_requires_valid_name() {
        let mut draft = StationDraft::default();
        assert_eq!(draft.name_error(), None);
        assert_eq!(draft.to_name(), Err(ErrorMessage::IncompleteForm));
        draft.name = "잠실".into();
        assert_eq!(draft.to_name(), Ok("잠실".to_string()));
    }
}
