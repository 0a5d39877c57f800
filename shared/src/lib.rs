use serde::{Deserialize, Serialize};

pub mod palette;
pub mod protocol;
pub mod validate;

pub use palette::{Palette, UnknownColor};

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// Session storage key holding the access token.
pub const ACCESS_TOKEN_KEY: &str = "ACCESS_TOKEN";
/// Local storage key holding the selected API owner.
pub const API_OWNER_KEY: &str = "API_OWNER";
pub const HEADER_AUTHORIZATION: &str = "Authorization";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

pub type StationId = u64;
pub type LineId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub id: StationId,
    pub name: String,
}

impl Station {
    pub fn new(id: StationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// An edge between two stations of a line.
///
/// `up_station_id` and `down_station_id` never refer to the same station;
/// forms reject such input before a request is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub up_station_id: StationId,
    pub down_station_id: StationId,
    pub distance: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub id: LineId,
    pub name: String,
    pub color: Palette,
    #[serde(default)]
    pub stations: Vec<Station>,
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// Error payload returned by the API on any non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorMessageResponse {
    pub error_message: String,
}

impl ErrorMessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error_message: message.into(),
        }
    }
}

impl std::fmt::Display for ErrorMessageResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.error_message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn line_decodes_camel_case_sections() {
        let line: Line = serde_json::from_value(json!({
            "id": 1,
            "name": "신분당선",
            "color": "RED_400",
            "stations": [{ "id": 1, "name": "강남" }, { "id": 2, "name": "판교" }],
            "sections": [{ "upStationId": 1, "downStationId": 2, "distance": 10 }]
        }))
        .unwrap();

        assert_eq!(line.color, Palette::Red400);
        assert_eq!(line.stations[1], Station::new(2, "판교"));
        assert_eq!(line.sections[0].down_station_id, 2);
    }

    #[test]
    fn line_without_route_defaults_to_empty() {
        let line: Line =
            serde_json::from_value(json!({ "id": 3, "name": "2호선", "color": "GREEN_400" }))
                .unwrap();
        assert!(line.stations.is_empty());
        assert!(line.sections.is_empty());
    }

    #[test]
    fn error_payload_uses_wire_name() {
        let err: ErrorMessageResponse =
            serde_json::from_value(json!({ "errorMessage": "duplicated station" })).unwrap();
        assert_eq!(err.to_string(), "duplicated station");
    }
}
