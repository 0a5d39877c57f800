use subway_shared::protocol::{
    AddSectionRequest, CreateLineRequest, DeleteLineRequest, DeleteSectionRequest, GetLineRequest,
    ListLinesRequest, ModifyLineRequest,
};
use subway_shared::{Line, LineId, StationId};

use super::{ApiClient, ApiError, HttpClient};

pub async fn list<C: HttpClient>(api: &ApiClient<C>) -> Result<Vec<Line>, ApiError> {
    api.send(&ListLinesRequest).await
}

pub async fn get<C: HttpClient>(api: &ApiClient<C>, id: LineId) -> Result<Line, ApiError> {
    api.send(&GetLineRequest { id }).await
}

pub async fn create<C: HttpClient>(
    api: &ApiClient<C>,
    req: &CreateLineRequest,
) -> Result<Line, ApiError> {
    api.send(req).await
}

pub async fn modify<C: HttpClient>(
    api: &ApiClient<C>,
    req: &ModifyLineRequest,
) -> Result<(), ApiError> {
    api.send(req).await
}

pub async fn delete<C: HttpClient>(api: &ApiClient<C>, id: LineId) -> Result<(), ApiError> {
    api.send(&DeleteLineRequest { id }).await
}

pub async fn add_section<C: HttpClient>(
    api: &ApiClient<C>,
    req: &AddSectionRequest,
) -> Result<(), ApiError> {
    api.send(req).await
}

pub async fn delete_section<C: HttpClient>(
    api: &ApiClient<C>,
    line_id: LineId,
    station_id: StationId,
) -> Result<(), ApiError> {
    api.send(&DeleteSectionRequest {
        line_id,
        station_id,
    })
    .await
}
