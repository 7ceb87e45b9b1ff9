//! Store implementation for the contragent directory screen.

use super::command::ContragentCommand;
use super::error::ContragentScreenError;
use crate::context::Backend;
use crate::fetch;
use crate::model::Contragent;
use crate::samples;
use crate::view::contragents::{self, ContragentCriteria};
use async_trait::async_trait;
use screen_flow::ScreenStore;

/// State of the contragent directory screen.
#[derive(Default)]
pub struct ContragentStore {
    all: Vec<Contragent>,
    loaded: bool,
    notice: Option<String>,
    criteria: ContragentCriteria,
}

/// What the directory screen renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ContragentSnapshot {
    /// The filtered, sorted directory.
    pub contragents: Vec<Contragent>,
    /// Distinct legal forms present in the full collection, for the filter panel.
    pub available_kinds: Vec<String>,
    /// Distinct segments present in the full collection, for the filter panel.
    pub available_segments: Vec<String>,
    /// The criteria the view was derived from.
    pub criteria: ContragentCriteria,
    /// False until the first load completes, so the UI can tell "no results"
    /// apart from "not yet loaded".
    pub loaded: bool,
    /// Non-fatal banner text when sample data is being shown.
    pub notice: Option<String>,
}

#[async_trait]
impl ScreenStore for ContragentStore {
    type Command = ContragentCommand;
    type Snapshot = ContragentSnapshot;
    type SubmitRequest = ();
    type SubmitOutcome = ();
    type Context = Backend;
    type Error = ContragentScreenError;

    async fn load(&mut self, ctx: &Backend) -> Result<(), ContragentScreenError> {
        let loaded = fetch::resolve(
            "contragents",
            ctx.api.get_contragents().await,
            ctx.fetch_policy,
            samples::contragents,
        )
        .map_err(ContragentScreenError::Fetch)?;
        self.all = loaded.records;
        self.notice = loaded.notice;
        self.loaded = true;
        Ok(())
    }

    fn apply(&mut self, command: ContragentCommand) -> Result<(), ContragentScreenError> {
        match command {
            ContragentCommand::SetQuery(query) => self.criteria.query = query,
            ContragentCommand::SetKindFilter(kind) => self.criteria.kind = kind,
            ContragentCommand::SetSegmentFilter(segment) => self.criteria.segment = segment,
            ContragentCommand::SetSort(sort) => self.criteria.sort = sort,
            ContragentCommand::ClearFilters => self.criteria.clear_filters(),
        }
        Ok(())
    }

    // The directory is read-only
    async fn submit(&mut self, _request: (), _ctx: &Backend) -> Result<(), ContragentScreenError> {
        Ok(())
    }

    fn snapshot(&self) -> ContragentSnapshot {
        ContragentSnapshot {
            contragents: contragents::compute_view(&self.all, &self.criteria),
            available_kinds: contragents::available_kinds(&self.all),
            available_segments: contragents::available_segments(&self.all),
            criteria: self.criteria.clone(),
            loaded: self.loaded,
            notice: self.notice.clone(),
        }
    }
}
