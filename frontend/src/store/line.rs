use subway_shared::protocol::{AddSectionRequest, CreateLineRequest, ModifyLineRequest};
use subway_shared::{Line, LineId, Palette, StationId};

use super::slice::{Phase, Reducer, RequestState, run_thunk};
use crate::api::{self, ApiClient, HttpClient};

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineState {
    pub request: RequestState,
    pub lines: Vec<Line>,
}

impl LineState {
    /// Colors taken by the currently loaded lines.
    pub fn used_colors(&self) -> Vec<Palette> {
        self.lines.iter().map(|line| line.color).collect()
    }

    pub fn find(&self, id: LineId) -> Option<&Line> {
        self.lines.iter().find(|line| line.id == id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LineAction {
    Load(Phase<Vec<Line>>),
    Add(Phase<Line>),
    Modify(Phase<ModifyLineRequest>),
    Delete(Phase<LineId>),
    /// Section changes re-fetch the affected line and carry it here.
    SectionChanged(Phase<Line>),
    Clear,
}

impl Reducer for LineState {
    type Action = LineAction;

    fn reduce(&mut self, action: LineAction) {
        match action {
            LineAction::Load(phase) => {
                if let Some(lines) = self.request.settle(phase) {
                    self.lines = lines;
                }
            }
            LineAction::Add(phase) => {
                if let Some(line) = self.request.settle(phase) {
                    self.lines.insert(0, line);
                }
            }
            LineAction::Modify(phase) => {
                if let Some(change) = self.request.settle(phase) {
                    if let Some(line) = self.lines.iter_mut().find(|l| l.id == change.id) {
                        line.name = change.name;
                        line.color = change.color;
                    }
                }
            }
            LineAction::Delete(phase) => {
                if let Some(id) = self.request.settle(phase) {
                    self.lines.retain(|l| l.id != id);
                }
            }
            LineAction::SectionChanged(phase) => {
                if let Some(updated) = self.request.settle(phase) {
                    match self.lines.iter_mut().find(|l| l.id == updated.id) {
                        Some(line) => *line = updated,
                        None => self.lines.push(updated),
                    }
                }
            }
            LineAction::Clear => *self = LineState::default(),
        }
    }
}

pub async fn load_lines<C: HttpClient>(api: &ApiClient<C>, dispatch: &impl Fn(LineAction)) {
    run_thunk("line/load", dispatch, LineAction::Load, api::line::list(api)).await;
}

pub async fn add_line<C: HttpClient>(
    api: &ApiClient<C>,
    req: CreateLineRequest,
    dispatch: &impl Fn(LineAction),
) {
    run_thunk("line/add", dispatch, LineAction::Add, async move {
        api::line::create(api, &req).await
    })
    .await;
}

pub async fn modify_line<C: HttpClient>(
    api: &ApiClient<C>,
    req: ModifyLineRequest,
    dispatch: &impl Fn(LineAction),
) {
    run_thunk("line/modify", dispatch, LineAction::Modify, async move {
        api::line::modify(api, &req).await.map(|()| req)
    })
    .await;
}

pub async fn delete_line<C: HttpClient>(
    api: &ApiClient<C>,
    id: LineId,
    dispatch: &impl Fn(LineAction),
) {
    run_thunk("line/delete", dispatch, LineAction::Delete, async move {
        api::line::delete(api, id).await.map(|()| id)
    })
    .await;
}

pub async fn add_section<C: HttpClient>(
    api: &ApiClient<C>,
    req: AddSectionRequest,
    dispatch: &impl Fn(LineAction),
) {
    run_thunk(
        "line/addSection",
        dispatch,
        LineAction::SectionChanged,
        async move {
            api::line::add_section(api, &req).await?;
            api::line::get(api, req.line_id).await
        },
    )
    .await;
}

pub async fn delete_section<C: HttpClient>(
    api: &ApiClient<C>,
    line_id: LineId,
    station_id: StationId,
    dispatch: &impl Fn(LineAction),
) {
    run_thunk(
        "line/deleteSection",
        dispatch,
        LineAction::SectionChanged,
        async move {
            api::line::delete_section(api, line_id, station_id).await?;
            api::line::get(api, line_id).await
        },
    )
    .await;
}
