use axum::{
    extract::{Path, Query, State},
    http::{HeaderName, HeaderValue},
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{error, info, Span};

use crate::api::dtos::requests::{DayQuery, RangeQuery};
use crate::api::dtos::responses::{DayAvailabilityResponse, SlotResponse, SlotsResponse};
use crate::domain::models::availability::{CategoryFilter, DateRange, DayAvailability};
use crate::error::AppError;
use crate::state::AppState;

pub const AVAILABILITY_STATUS_HEADER: &str = "x-availability-status";

/// How a computation ended. Every outcome other than `Ok` comes with an
/// empty result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityStatus {
    Ok,
    NotConfigured,
    SourceFailure,
    Timeout,
}

impl AvailabilityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AvailabilityStatus::Ok => "ok",
            AvailabilityStatus::NotConfigured => "not-configured",
            AvailabilityStatus::SourceFailure => "source-failure",
            AvailabilityStatus::Timeout => "timeout",
        }
    }

    fn header(&self) -> [(HeaderName, HeaderValue); 1] {
        [(
            HeaderName::from_static(AVAILABILITY_STATUS_HEADER),
            HeaderValue::from_static(self.as_str()),
        )]
    }
}

pub async fn get_availability(
    State(state): State<Arc<AppState>>,
    Path(studio_id): Path<String>,
    Query(params): Query<RangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    Span::current().record("studio_id", studio_id.as_str());

    let range = parse_range(&state, params.start.as_deref(), params.end.as_deref())?;
    let filter = parse_category(params.category.as_deref())?;

    let (days, status) = compute_availability(&state, &studio_id, range, filter).await;
    let body: Vec<DayAvailabilityResponse> = days.iter().map(DayAvailabilityResponse::from).collect();

    Ok((status.header(), Json(body)))
}

pub async fn get_slots(
    State(state): State<Arc<AppState>>,
    Path(studio_id): Path<String>,
    Query(params): Query<DayQuery>,
) -> Result<impl IntoResponse, AppError> {
    Span::current().record("studio_id", studio_id.as_str());

    let date = parse_date(params.date.as_deref(), "date")?;
    let filter = parse_category(params.category.as_deref())?;

    let (days, status) = compute_availability(&state, &studio_id, DateRange::single(date), filter).await;
    let slots: Vec<SlotResponse> = days
        .iter()
        .find(|d| d.date == date)
        .map(|d| d.slots.iter().map(SlotResponse::from).collect())
        .unwrap_or_default();

    Ok((status.header(), Json(SlotsResponse {
        date: date.format("%Y-%m-%d").to_string(),
        slots,
    })))
}

pub async fn get_available_dates(
    State(state): State<Arc<AppState>>,
    Path(studio_id): Path<String>,
    Query(params): Query<RangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    Span::current().record("studio_id", studio_id.as_str());

    let range = parse_range(&state, params.start.as_deref(), params.end.as_deref())?;
    let filter = parse_category(params.category.as_deref())?;

    let (days, status) = compute_availability(&state, &studio_id, range, filter).await;
    let dates: Vec<String> = days.iter().map(|d| d.date.format("%Y-%m-%d").to_string()).collect();

    Ok((status.header(), Json(dates)))
}

/// Runs the calculation under the configured deadline and degrades every
/// failure to an empty result, logging why.
async fn compute_availability(
    state: &AppState,
    studio_id: &str,
    range: DateRange,
    filter: CategoryFilter,
) -> (Vec<DayAvailability>, AvailabilityStatus) {
    let deadline = state.config.source_fetch_timeout();
    let computation = state.availability_service.get_availability(studio_id, range, filter);

    match timeout(deadline, computation).await {
        Ok(Ok(days)) => {
            info!("Availability for studio {}: {} open day(s) in {} .. {}", studio_id, days.len(), range.start, range.end);
            (days, AvailabilityStatus::Ok)
        }
        Ok(Err(e)) if e.is_configuration_not_found() => {
            info!("{}", e);
            (Vec::new(), AvailabilityStatus::NotConfigured)
        }
        Ok(Err(e)) => {
            error!("Availability lookup failed for studio {}: {}", studio_id, e);
            (Vec::new(), AvailabilityStatus::SourceFailure)
        }
        Err(_) => {
            error!("Availability lookup for studio {} exceeded {:?}", studio_id, deadline);
            (Vec::new(), AvailabilityStatus::Timeout)
        }
    }
}

fn parse_date(raw: Option<&str>, name: &str) -> Result<NaiveDate, AppError> {
    let raw = raw.ok_or_else(|| AppError::Validation(format!("{} required", name)))?;
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("Invalid {} (expected YYYY-MM-DD)", name)))
}

fn parse_category(raw: Option<&str>) -> Result<CategoryFilter, AppError> {
    raw.map(str::parse::<CategoryFilter>).transpose().map_err(AppError::Validation).map(Option::unwrap_or_default)
}

fn parse_range(state: &AppState, start: Option<&str>, end: Option<&str>) -> Result<DateRange, AppError> {
    let range = DateRange::new(parse_date(start, "start")?, parse_date(end, "end")?);

    if range.len_days() > state.config.max_range_days {
        return Err(AppError::Validation(format!(
            "Range too long: {} days requested, at most {} allowed",
            range.len_days(),
            state.config.max_range_days
        )));
    }

    Ok(range)
}
