use subway_shared::protocol::{CreateStationRequest, DeleteStationRequest, ListStationsRequest};
use subway_shared::{Station, StationId};

use super::{ApiClient, ApiError, HttpClient};

pub async fn list<C: HttpClient>(api: &ApiClient<C>) -> Result<Vec<Station>, ApiError> {
    api.send(&ListStationsRequest).await
}

pub async fn create<C: HttpClient>(api: &ApiClient<C>, name: &str) -> Result<Station, ApiError> {
    let req = CreateStationRequest {
        name: name.to_string(),
    };
    api.send(&req).await
}

pub async fn delete<C: HttpClient>(api: &ApiClient<C>, id: StationId) -> Result<(), ApiError> {
    api.send(&DeleteStationRequest { id }).await
}
