use crate::{Line, LineId, Palette, Station, StationId};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Whether requests with this method carry a JSON body.
    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put)
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
///
/// Path parameters are part of the request value, so the path is computed
/// per instance. Fields that only feed the path are skipped during
/// serialization.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// Set for endpoints whose success body carries nothing the client
    /// needs. The body is then ignored instead of decoded.
    const DISCARD_BODY: bool = false;
    /// The URL path relative to the API base URL.
    fn path(&self) -> String;
}

// =========================================================
// Login
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
}

impl ApiRequest for LoginRequest {
    type Response = TokenResponse;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/login/token".to_string()
    }
}

// =========================================================
// Stations
// =========================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct ListStationsRequest;

impl ApiRequest for ListStationsRequest {
    type Response = Vec<Station>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/stations".to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStationRequest {
    pub name: String,
}

impl ApiRequest for CreateStationRequest {
    type Response = Station;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/stations".to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteStationRequest {
    #[serde(skip)]
    pub id: StationId,
}

impl ApiRequest for DeleteStationRequest {
    type Response = ();
    const DISCARD_BODY: bool = true;
    const METHOD: HttpMethod = HttpMethod::Delete;
    fn path(&self) -> String {
        format!("/stations/{}", self.id)
    }
}

// =========================================================
// Lines
// =========================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct ListLinesRequest;

impl ApiRequest for ListLinesRequest {
    type Response = Vec<Line>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/lines".to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetLineRequest {
    #[serde(skip)]
    pub id: LineId,
}

impl ApiRequest for GetLineRequest {
    type Response = Line;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("/lines/{}", self.id)
    }
}

/// Creates a line together with its first section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLineRequest {
    pub name: String,
    pub color: Palette,
    pub up_station_id: StationId,
    pub down_station_id: StationId,
    pub distance: u32,
}

impl ApiRequest for CreateLineRequest {
    type Response = Line;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/lines".to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifyLineRequest {
    #[serde(skip)]
    pub id: LineId,
    pub name: String,
    pub color: Palette,
}

impl ApiRequest for ModifyLineRequest {
    type Response = ();
    const DISCARD_BODY: bool = true;
    const METHOD: HttpMethod = HttpMethod::Put;
    fn path(&self) -> String {
        format!("/lines/{}", self.id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteLineRequest {
    #[serde(skip)]
    pub id: LineId,
}

impl ApiRequest for DeleteLineRequest {
    type Response = ();
    const DISCARD_BODY: bool = true;
    const METHOD: HttpMethod = HttpMethod::Delete;
    fn path(&self) -> String {
        format!("/lines/{}", self.id)
    }
}

// =========================================================
// Sections
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSectionRequest {
    #[serde(skip)]
    pub line_id: LineId,
    pub up_station_id: StationId,
    pub down_station_id: StationId,
    pub distance: u32,
}

impl ApiRequest for AddSectionRequest {
    type Response = ();
    const DISCARD_BODY: bool = true;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        format!("/lines/{}/sections", self.line_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteSectionRequest {
    #[serde(skip)]
    pub line_id: LineId,
    #[serde(skip)]
    pub station_id: StationId,
}

impl ApiRequest for DeleteSectionRequest {
    type Response = ();
    const DISCARD_BODY: bool = true;
    const METHOD: HttpMethod = HttpMethod::Delete;
    fn path(&self) -> String {
        format!("/lines/{}/sections?stationId={}", self.line_id, self.station_id)
    }
}
