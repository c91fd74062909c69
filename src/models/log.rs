use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

use super::car::Car;
use super::employee::Employee;

/// One vehicle check-out/check-in record. Employee and car are full
/// snapshots as returned by the service, not foreign keys.
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Log {
    #[serde_as(as = "DefaultOnNull")]
    pub id: u64,
    #[serde_as(as = "DefaultOnNull")]
    pub employee: Employee,
    #[serde_as(as = "DefaultOnNull")]
    pub car: Car,
    #[serde(rename = "carIsInUse")]
    #[serde_as(as = "DefaultOnNull")]
    pub car_in_use: bool,
    pub created_at: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    pub taken_date: String,
    #[serde_as(as = "DefaultOnNull")]
    pub taken_time: String,
    pub ended_at: Option<String>,
    pub return_date: Option<String>,
    pub return_time: Option<String>,
    #[serde(rename = "carNote", skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Log {
    /// The vehicle has not been handed back yet.
    pub fn is_outstanding(&self) -> bool {
        self.return_date.as_deref().is_none_or(str::is_empty)
    }
}

/// Body for create and replace calls: a log without its identifier.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LogDraft {
    pub employee: Employee,
    pub car: Car,
    #[serde(rename = "carIsInUse")]
    pub car_in_use: bool,
    pub taken_date: String,
    pub taken_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_time: Option<String>,
    #[serde(rename = "carNote", skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl From<&Log> for LogDraft {
    fn from(log: &Log) -> Self {
        Self {
            employee: log.employee.clone(),
            car: log.car.clone(),
            car_in_use: log.car_in_use,
            taken_date: log.taken_date.clone(),
            taken_time: log.taken_time.clone(),
            ended_at: log.ended_at.clone(),
            return_date: log.return_date.clone(),
            return_time: log.return_time.clone(),
            note: log.note.clone(),
        }
    }
}
