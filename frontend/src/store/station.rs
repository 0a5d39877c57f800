use subway_shared::{Station, StationId};

use super::slice::{Phase, Reducer, RequestState, run_thunk};
use crate::api::{self, ApiClient, HttpClient};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationState {
    pub request: RequestState,
    pub stations: Vec<Station>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StationAction {
    Load(Phase<Vec<Station>>),
    Add(Phase<Station>),
    Delete(Phase<StationId>),
    Clear,
}

impl Reducer for StationState {
    type Action = StationAction;

    fn reduce(&mut self, action: StationAction) {
        match action {
            StationAction::Load(phase) => {
                if let Some(stations) = self.request.settle(phase) {
                    self.stations = stations;
                }
            }
            StationAction::Add(phase) => {
                if let Some(station) = self.request.settle(phase) {
                    self.stations.insert(0, station);
                }
            }
            StationAction::Delete(phase) => {
                if let Some(id) = self.request.settle(phase) {
                    self.stations.retain(|s| s.id != id);
                }
            }
            StationAction::Clear => *self = StationState::default(),
        }
    }
}

pub async fn load_stations<C: HttpClient>(api: &ApiClient<C>, dispatch: &impl Fn(StationAction)) {
    run_thunk("station/load", dispatch, StationAction::Load, api::station::list(api)).await;
}

pub async fn add_station<C: HttpClient>(
    api: &ApiClient<C>,
    name: &str,
    dispatch: &impl Fn(StationAction),
) {
    run_thunk(
        "station/add",
        dispatch,
        StationAction::Add,
        api::station::create(api, name),
    )
    .await;
}

pub async fn delete_station<C: HttpClient>(
    api: &ApiClient<C>,
    id: StationId,
    dispatch: &impl Fn(StationAction),
) {
    run_thunk("station/delete", dispatch, StationAction::Delete, async move {
        api::station::delete(api, id).await.map(|()| id)
    })
    .await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockHttpClient;
    use crate::store::Recorder;
    use serde_json::json;
    use subway_shared::protocol::HttpMethod;

    const STATIONS: &str = "http://api.test/stations";

    fn seeded() -> StationState {
        StationState {
            request: RequestState::default(),
            stations: vec![Station::new(1, "강남"), Station::new(2, "역삼"), Station::new(3, "선릉")],
        }
    }

    #[tokio::test]
    async fn load_replaces_collection() {
        let mock = MockHttpClient::new();
        mock.mock_response(
            HttpMethod::Get,
            STATIONS,
            200,
            json!([{ "id": 9, "name": "교대" }]),
        );
        let api = ApiClient::new("http://api.test", mock.clone());
        let recorder = Recorder::new(seeded());

        load_stations(&api, &recorder.dispatcher()).await;

        assert_eq!(recorder.state().stations, vec![Station::new(9, "교대")]);
    }

    #[tokio::test]
    async fn add_prepends_created_station() {
        let mock = MockHttpClient::new();
        mock.mock_response(
            HttpMethod::Post,
            STATIONS,
            201,
            json!({ "id": 7, "name": "Gangnam" }),
        );
        let api = ApiClient::new("http://api.test", mock.clone());
        let recorder = Recorder::new(seeded());

        add_station(&api, "Gangnam", &recorder.dispatcher()).await;

        let snapshots = recorder.snapshots();
        assert_eq!(snapshots.len(), 2);
        assert!(snapshots[0].request.is_loading);
        assert_eq!(snapshots[0].request.error_message, "");
        assert!(!snapshots[1].request.is_loading);
        assert_eq!(snapshots[1].request.error_message, "");

        let mut expected = vec![Station::new(7, "Gangnam")];
        expected.extend(seeded().stations);
        assert_eq!(recorder.state().stations, expected);
    }

    #[tokio::test]
    async fn delete_keeps_relative_order() {
        let mock = MockHttpClient::new();
        mock.mock_raw(HttpMethod::Delete, "http://api.test/stations/2", 204, "");
        let api = ApiClient::new("http://api.test", mock.clone());
        let recorder = Recorder::new(seeded());

        delete_station(&api, 2, &recorder.dispatcher()).await;

        assert_eq!(
            recorder.state().stations,
            vec![Station::new(1, "강남"), Station::new(3, "선릉")]
        );
    }

    #[tokio::test]
    async fn rejected_request_keeps_collection_and_sets_error() {
        let mock = MockHttpClient::new();
        mock.mock_response(
            HttpMethod::Delete,
            "http://api.test/stations/1",
            400,
            json!({ "errorMessage": "구간에 포함된 역은 삭제할 수 없습니다." }),
        );
        let api = ApiClient::new("http://api.test", mock.clone());
        let recorder = Recorder::new(seeded());

        delete_station(&api, 1, &recorder.dispatcher()).await;

        let state = recorder.state();
        assert!(!state.request.is_loading);
        assert_eq!(state.request.error_message, "구간에 포함된 역은 삭제할 수 없습니다.");
        assert_eq!(state.stations, seeded().stations);
    }

    #[tokio::test]
    async fn next_request_clears_error_on_pending() {
        let mock = MockHttpClient::new();
        mock.mock_response(HttpMethod::Get, STATIONS, 200, json!([]));
        let api = ApiClient::new("http://api.test", mock.clone());
        let mut state = seeded();
        state.request.error_message = "stale".into();
        let recorder = Recorder::new(state);

        load_stations(&api, &recorder.dispatcher()).await;

        assert_eq!(recorder.snapshots()[0].request.error_message, "");
        assert!(recorder.state().stations.is_empty());
    }

    #[test]
    fn overlapping_loads_apply_in_resolution_order() {
        let mut state = StationState::default();
        state.reduce(StationAction::Load(Phase::Pending));
        state.reduce(StationAction::Load(Phase::Pending));
        state.reduce(StationAction::Load(Phase::Fulfilled(vec![Station::new(2, "newer")])));
        state.reduce(StationAction::Load(Phase::Fulfilled(vec![Station::new(1, "older")])));
        // The older response resolved last, so it wins.
        assert_eq!(state.stations, vec![Station::new(1, "older")]);
    }

    #[test]
    fn clear_resets_to_initial_state() {
        let mut state = seeded();
        state.request.error_message = "x".into();
        state.reduce(StationAction::Clear);
        assert_eq!(state, StationState::default());
    }
}
