use dioxus::prelude::{Signal, WritableExt, spawn};
use time::OffsetDateTime;
use tracing::{error, info, warn};

use crate::models::{FilterCriteria, FilterField, Log, LogListing};
use crate::services::api::LogsApi;
use crate::table::Pagination;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Loading,
    Loaded {
        fetched_at: OffsetDateTime,
    },
    Failed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogbookEvent {
    LoadStarted,
    LoadSucceeded {
        logs: Vec<Log>,
        fetched_at: OffsetDateTime,
    },
    LoadFailed,
    CriteriaEdited {
        field: FilterField,
        value: String,
    },
    ApplyFilter,
    ResetFilter,
    ToggleFilterPanel,
    CloseFilterPanel,
    NextPage,
    PreviousPage,
}

/// Everything the logs page renders from. The only writer is
/// [`LogbookState::transition`]; views read it and emit events.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogbookState {
    phase: LoadPhase,
    canonical: Vec<Log>,
    visible: Vec<Log>,
    criteria: FilterCriteria,
    filtering: bool,
    pagination: Pagination,
    panel_open: bool,
}

impl LogbookState {
    pub fn transition(mut self, event: LogbookEvent) -> Self {
        match event {
            LogbookEvent::LoadStarted => {
                self = Self::default();
            }
            LogbookEvent::LoadSucceeded { logs, fetched_at } => {
                self.visible = logs.clone();
                self.canonical = logs;
                self.criteria = FilterCriteria::default();
                self.filtering = false;
                self.pagination = Pagination::first();
                self.phase = LoadPhase::Loaded { fetched_at };
            }
            LogbookEvent::LoadFailed => {
                self = Self {
                    phase: LoadPhase::Failed,
                    ..Self::default()
                };
            }
            LogbookEvent::CriteriaEdited { field, value } => {
                self.criteria.set(field, value);
            }
            LogbookEvent::ApplyFilter => {
                self.visible = self.criteria.select(&self.canonical);
                self.filtering = true;
                self.pagination = Pagination::first();
                self.panel_open = false;
            }
            LogbookEvent::ResetFilter => {
                self.criteria = FilterCriteria::default();
                self.visible = self.canonical.clone();
                self.filtering = false;
                self.pagination = Pagination::first();
                self.panel_open = false;
            }
            LogbookEvent::ToggleFilterPanel => {
                self.panel_open = !self.panel_open;
            }
            LogbookEvent::CloseFilterPanel => {
                self.panel_open = false;
            }
            LogbookEvent::NextPage => {
                self.pagination = self.pagination.next(self.visible.len());
            }
            LogbookEvent::PreviousPage => {
                self.pagination = self.pagination.previous();
            }
        }
        self
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn canonical(&self) -> &[Log] {
        &self.canonical
    }

    pub fn visible(&self) -> &[Log] {
        &self.visible
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn is_filtering(&self) -> bool {
        self.filtering
    }

    pub fn is_panel_open(&self) -> bool {
        self.panel_open
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn page_count(&self) -> usize {
        Pagination::page_count(self.visible.len())
    }

    pub fn current_page(&self) -> &[Log] {
        self.pagination.slice(&self.visible)
    }

    pub fn can_next(&self) -> bool {
        self.pagination.can_next(self.visible.len())
    }

    pub fn can_previous(&self) -> bool {
        self.pagination.can_previous()
    }
}

/// The single list call made when the page opens, folded into the event
/// that finishes the load.
pub async fn fetch_logbook(api: &LogsApi) -> LogbookEvent {
    match api.list_logs().await {
        Ok(body) => {
            let listing = LogListing::from_value(body);
            if !listing.is_recognized() {
                warn!("list response was neither an envelope nor an array; showing no logs");
            }
            let logs = listing.into_logs();
            info!(count = logs.len(), "logs loaded");
            LogbookEvent::LoadSucceeded {
                logs,
                fetched_at: OffsetDateTime::now_utc(),
            }
        }
        Err(err) => {
            error!(error = %err, "failed to load logs");
            LogbookEvent::LoadFailed
        }
    }
}

pub fn dispatch(mut state: Signal<LogbookState>, event: LogbookEvent) {
    let mut guard = state.write();
    let current = std::mem::take(&mut *guard);
    *guard = current.transition(event);
}

pub fn queue_initial_load(api: LogsApi, state: Signal<LogbookState>) {
    dispatch(state, LogbookEvent::LoadStarted);
    spawn(async move {
        let outcome = fetch_logbook(&api).await;
        dispatch(state, outcome);
    });
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::config::ApiConfig;
    use crate::models::{Car, Employee};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn log(id: u64, ceo_number: &str, car_number: &str) -> Log {
        Log {
            id,
            employee: Employee {
                ceo_number: ceo_number.into(),
                ..Employee::default()
            },
            car: Car {
                car_number: car_number.into(),
                ..Car::default()
            },
            taken_date: "2024-05-01".into(),
            ..Log::default()
        }
    }

    fn fleet(len: u64) -> Vec<Log> {
        (1..=len)
            .map(|id| log(id, if id % 2 == 0 { "1001" } else { "2002" }, "A1"))
            .collect()
    }

    fn loaded(logs: Vec<Log>) -> LogbookState {
        LogbookState::default()
            .transition(LogbookEvent::LoadStarted)
            .transition(LogbookEvent::LoadSucceeded {
                logs,
                fetched_at: OffsetDateTime::UNIX_EPOCH,
            })
    }

    fn edit(field: FilterField, value: &str) -> LogbookEvent {
        LogbookEvent::CriteriaEdited {
            field,
            value: value.into(),
        }
    }

    #[test]
    fn starts_loading_and_shows_everything_once_loaded() {
        assert_eq!(LogbookState::default().phase(), &LoadPhase::Loading);

        let state = loaded(fleet(3));

        assert_eq!(
            state.phase(),
            &LoadPhase::Loaded {
                fetched_at: OffsetDateTime::UNIX_EPOCH
            }
        );
        assert_eq!(state.visible(), state.canonical());
        assert_eq!(state.visible().len(), 3);
        assert!(!state.is_filtering());
    }

    #[test]
    fn failure_clears_everything() {
        let state = loaded(fleet(3))
            .transition(LogbookEvent::LoadStarted)
            .transition(LogbookEvent::LoadFailed);

        assert_eq!(state.phase(), &LoadPhase::Failed);
        assert!(state.canonical().is_empty());
        assert!(state.visible().is_empty());
    }

    #[test]
    fn load_started_drops_previous_rows() {
        let state = loaded(fleet(3)).transition(LogbookEvent::LoadStarted);

        assert_eq!(state.phase(), &LoadPhase::Loading);
        assert!(state.visible().is_empty());
    }

    #[test]
    fn apply_filter_narrows_visible_and_closes_panel() {
        let state = loaded(fleet(6))
            .transition(LogbookEvent::ToggleFilterPanel)
            .transition(edit(FilterField::EmployeeNumber, "1001"));
        assert!(state.is_panel_open());
        assert!(!state.is_filtering(), "typing alone does not filter");
        assert_eq!(state.visible().len(), 6);

        let state = state.transition(LogbookEvent::ApplyFilter);

        assert!(state.is_filtering());
        assert!(!state.is_panel_open());
        assert_eq!(
            state.visible().iter().map(|log| log.id).collect::<Vec<_>>(),
            vec![2, 4, 6]
        );
        assert_eq!(state.canonical().len(), 6);
    }

    #[test]
    fn applying_twice_is_idempotent() {
        let once = loaded(fleet(6))
            .transition(edit(FilterField::EmployeeNumber, "2002"))
            .transition(LogbookEvent::ApplyFilter);
        let twice = once.clone().transition(LogbookEvent::ApplyFilter);

        assert_eq!(once, twice);
    }

    #[test]
    fn reset_then_empty_apply_equals_no_filter() {
        let state = loaded(fleet(6))
            .transition(edit(FilterField::CarNumber, "ZZZ"))
            .transition(LogbookEvent::ApplyFilter);
        assert!(state.visible().is_empty());

        let reset = state.transition(LogbookEvent::ResetFilter);
        assert!(!reset.is_filtering());
        assert_eq!(reset.criteria(), &FilterCriteria::default());
        assert_eq!(reset.visible(), reset.canonical());

        let applied = reset.clone().transition(LogbookEvent::ApplyFilter);
        assert_eq!(applied.visible(), reset.visible());
    }

    #[test]
    fn reload_after_filter_restores_full_collection() {
        let state = loaded(fleet(4))
            .transition(edit(FilterField::EmployeeNumber, "1001"))
            .transition(LogbookEvent::ApplyFilter)
            .transition(LogbookEvent::ResetFilter)
            .transition(LogbookEvent::LoadStarted)
            .transition(LogbookEvent::LoadSucceeded {
                logs: fleet(4),
                fetched_at: OffsetDateTime::UNIX_EPOCH,
            });

        assert_eq!(state.visible(), fleet(4).as_slice());
        assert!(!state.is_filtering());
    }

    #[test]
    fn paging_respects_bounds_and_resets_on_filter() {
        let state = loaded(fleet(120));
        assert_eq!(state.page_count(), 3);
        assert!(!state.can_previous());
        assert_eq!(state.current_page().len(), 50);

        let last = state
            .transition(LogbookEvent::NextPage)
            .transition(LogbookEvent::NextPage)
            .transition(LogbookEvent::NextPage);
        assert_eq!(last.pagination().page_number(), 3);
        assert!(!last.can_next());
        assert_eq!(last.current_page().len(), 20);

        let filtered = last
            .transition(edit(FilterField::EmployeeNumber, "1001"))
            .transition(LogbookEvent::ApplyFilter);
        assert_eq!(filtered.pagination().page_number(), 1);
        assert_eq!(filtered.page_count(), 2);

        let back = filtered
            .transition(LogbookEvent::NextPage)
            .transition(LogbookEvent::PreviousPage)
            .transition(LogbookEvent::PreviousPage);
        assert_eq!(back.pagination().page_number(), 1);
    }

    #[test]
    fn close_keeps_typed_criteria() {
        let state = loaded(fleet(2))
            .transition(LogbookEvent::ToggleFilterPanel)
            .transition(edit(FilterField::TakenDate, "2024-05-01"))
            .transition(LogbookEvent::CloseFilterPanel);

        assert!(!state.is_panel_open());
        assert_eq!(state.criteria().get(FilterField::TakenDate), "2024-05-01");
    }

    fn api_for(server: &MockServer) -> LogsApi {
        let config = ApiConfig::new(&format!("{}/api/", server.uri()), Duration::from_secs(5))
            .expect("mock base is valid");
        LogsApi::new(&config).expect("client builds")
    }

    fn apply_outcome(event: LogbookEvent) -> LogbookState {
        LogbookState::default()
            .transition(LogbookEvent::LoadStarted)
            .transition(event)
    }

    #[tokio::test]
    async fn fetch_accepts_envelope_and_bare_array_alike() {
        let rows = json!([
            { "id": 1, "employee": { "ceoNumber": "1001" }, "car": { "carNumber": "A1" } },
            { "id": 2, "employee": { "ceoNumber": "1002" }, "car": { "carNumber": "B2" } }
        ]);

        let envelope_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/logs/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 2, "next": null, "previous": null, "results": rows.clone()
            })))
            .expect(1)
            .mount(&envelope_server)
            .await;

        let bare_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/logs/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(rows))
            .expect(1)
            .mount(&bare_server)
            .await;

        let from_envelope = apply_outcome(fetch_logbook(&api_for(&envelope_server)).await);
        let from_bare = apply_outcome(fetch_logbook(&api_for(&bare_server)).await);

        assert!(matches!(from_envelope.phase(), LoadPhase::Loaded { .. }));
        assert_eq!(from_envelope.visible(), from_bare.visible());
        assert_eq!(from_envelope.visible().len(), 2);
    }

    #[tokio::test]
    async fn empty_results_load_successfully() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/logs/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 0, "next": null, "previous": null, "results": []
            })))
            .mount(&server)
            .await;

        let state = apply_outcome(fetch_logbook(&api_for(&server)).await);

        assert!(matches!(state.phase(), LoadPhase::Loaded { .. }));
        assert!(state.current_page().is_empty());
        assert_eq!(state.page_count(), 1);
    }

    #[tokio::test]
    async fn unexpected_body_loads_as_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/logs/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "detail": "ok" })))
            .mount(&server)
            .await;

        let state = apply_outcome(fetch_logbook(&api_for(&server)).await);

        assert!(matches!(state.phase(), LoadPhase::Loaded { .. }));
        assert!(state.visible().is_empty());
    }

    #[tokio::test]
    async fn server_error_goes_straight_to_failed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/logs/"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(1)
            .mount(&server)
            .await;

        let event = fetch_logbook(&api_for(&server)).await;
        assert_eq!(event, LogbookEvent::LoadFailed);

        let state = apply_outcome(event);
        assert_eq!(state.phase(), &LoadPhase::Failed);
        assert!(state.visible().is_empty());
    }
}
