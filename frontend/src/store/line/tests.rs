use super::*;
use crate::api::MockHttpClient;
use crate::store::Recorder;
use serde_json::json;
use subway_shared::protocol::HttpMethod;
use subway_shared::{Section, Station};

const BASE: &str = "http://api.test";

fn line(id: LineId, name: &str, color: Palette) -> Line {
    Line {
        id,
        name: name.to_string(),
        color,
        stations: Vec::new(),
        sections: Vec::new(),
    }
}

fn seeded() -> LineState {
    LineState {
        request: RequestState::default(),
        lines: vec![
            line(1, "1호선", Palette::Blue600),
            line(2, "2호선", Palette::Green400),
        ],
    }
}

#[tokio::test]
async fn load_lines_replaces_collection() {
    let mock = MockHttpClient::new();
    mock.mock_response(
        HttpMethod::Get,
        "http://api.test/lines",
        200,
        json!([{ "id": 5, "name": "신분당선", "color": "RED_600" }]),
    );
    let api = ApiClient::new(BASE, mock.clone());
    let recorder = Recorder::new(seeded());

    load_lines(&api, &recorder.dispatcher()).await;

    assert_eq!(recorder.state().lines, vec![line(5, "신분당선", Palette::Red600)]);
    assert_eq!(recorder.state().used_colors(), vec![Palette::Red600]);
}

#[tokio::test]
async fn add_line_prepends_and_posts_first_section() {
    let mock = MockHttpClient::new();
    mock.mock_response(
        HttpMethod::Post,
        "http://api.test/lines",
        201,
        json!({
            "id": 3,
            "name": "3호선",
            "color": "ORANGE_400",
            "stations": [{ "id": 10, "name": "교대" }, { "id": 11, "name": "고속터미널" }],
            "sections": [{ "upStationId": 10, "downStationId": 11, "distance": 4 }]
        }),
    );
    let api = ApiClient::new(BASE, mock.clone());
    let recorder = Recorder::new(seeded());

    let req = CreateLineRequest {
        name: "3호선".into(),
        color: Palette::Orange400,
        up_station_id: 10,
        down_station_id: 11,
        distance: 4,
    };
    add_line(&api, req, &recorder.dispatcher()).await;

    let sent: serde_json::Value =
        serde_json::from_str(mock.last_request().unwrap().body.as_deref().unwrap()).unwrap();
    assert_eq!(sent["upStationId"], 10);
    assert_eq!(sent["color"], "ORANGE_400");

    let state = recorder.state();
    assert_eq!(state.lines.len(), 3);
    assert_eq!(state.lines[0].id, 3);
    assert_eq!(state.lines[0].stations[1], Station::new(11, "고속터미널"));
    assert_eq!(state.lines[1].id, 1);
}

#[tokio::test]
async fn modify_line_updates_in_place() {
    let mock = MockHttpClient::new();
    mock.mock_raw(HttpMethod::Put, "http://api.test/lines/2", 200, "");
    let api = ApiClient::new(BASE, mock.clone());
    let recorder = Recorder::new(seeded());

    let req = ModifyLineRequest {
        id: 2,
        name: "순환선".into(),
        color: Palette::Teal400,
    };
    modify_line(&api, req, &recorder.dispatcher()).await;

    let state = recorder.state();
    assert_eq!(state.lines[1], line(2, "순환선", Palette::Teal400));
    assert_eq!(state.lines[0], line(1, "1호선", Palette::Blue600));
}

#[tokio::test]
async fn delete_line_filters_by_id() {
    let mock = MockHttpClient::new();
    mock.mock_raw(HttpMethod::Delete, "http://api.test/lines/1", 204, "");
    let api = ApiClient::new(BASE, mock.clone());
    let recorder = Recorder::new(seeded());

    delete_line(&api, 1, &recorder.dispatcher()).await;

    assert_eq!(recorder.state().lines, vec![line(2, "2호선", Palette::Green400)]);
}

#[tokio::test]
async fn add_section_refetches_the_line() {
    let mock = MockHttpClient::new();
    mock.mock_raw(HttpMethod::Post, "http://api.test/lines/2/sections", 200, "");
    mock.mock_response(
        HttpMethod::Get,
        "http://api.test/lines/2",
        200,
        json!({
            "id": 2,
            "name": "2호선",
            "color": "GREEN_400",
            "stations": [{ "id": 1, "name": "강남" }, { "id": 2, "name": "역삼" }],
            "sections": [{ "upStationId": 1, "downStationId": 2, "distance": 3 }]
        }),
    );
    let api = ApiClient::new(BASE, mock.clone());
    let recorder = Recorder::new(seeded());

    let req = AddSectionRequest {
        line_id: 2,
        up_station_id: 1,
        down_station_id: 2,
        distance: 3,
    };
    add_section(&api, req, &recorder.dispatcher()).await;

    assert_eq!(mock.requests.borrow().len(), 2);
    let updated = recorder.state().find(2).cloned().unwrap();
    assert_eq!(
        updated.sections,
        vec![Section {
            up_station_id: 1,
            down_station_id: 2,
            distance: 3
        }]
    );
    // Only two snapshots: one pending and one fulfilled for the whole intent.
    assert_eq!(recorder.snapshots().len(), 2);
}

#[tokio::test]
async fn failed_section_delete_skips_refetch() {
    let mock = MockHttpClient::new();
    mock.mock_response(
        HttpMethod::Delete,
        "http://api.test/lines/1/sections?stationId=4",
        400,
        json!({ "errorMessage": "구간이 하나인 노선은 역을 제거할 수 없습니다." }),
    );
    let api = ApiClient::new(BASE, mock.clone());
    let recorder = Recorder::new(seeded());

    delete_section(&api, 1, 4, &recorder.dispatcher()).await;

    assert_eq!(mock.requests.borrow().len(), 1);
    let state = recorder.state();
    assert_eq!(
        state.request.error_message,
        "구간이 하나인 노선은 역을 제거할 수 없습니다."
    );
    assert_eq!(state.lines, seeded().lines);
}

#[test]
fn rejected_after_close_still_lands_in_error_message() {
    let mut state = seeded();
    state.reduce(LineAction::Add(Phase::Pending));
    state.reduce(LineAction::Add(Phase::Rejected(
        subway_shared::ErrorMessageResponse::new("duplicated line name"),
    )));
    assert!(!state.request.is_loading);
    assert_eq!(state.request.error_message, "duplicated line name");
    assert_eq!(state.lines.len(), 2);
}
