use serde::Deserialize;

/// Query of the range endpoints. Fields are optional so that a missing
/// parameter is reported as a validation error rather than a rejection.
#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub start: Option<String>,
    pub end: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DayQuery {
    pub date: Option<String>,
    pub category: Option<String>,
}
