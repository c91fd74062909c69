use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

/// Employee snapshot embedded in every log. Owned by the remote service.
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Employee {
    #[serde_as(as = "DefaultOnNull")]
    pub id: u64,
    /// Administrative number, the key operators search by.
    #[serde_as(as = "DefaultOnNull")]
    pub ceo_number: String,
    #[serde_as(as = "DefaultOnNull")]
    pub ceo_name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub phone_number: String,
    // The service spells this field "jobTtile".
    #[serde(rename = "jobTtile", alias = "jobTitle")]
    #[serde_as(as = "DefaultOnNull")]
    pub job_title: String,
    #[serde_as(as = "DefaultOnNull")]
    pub department: String,
    #[serde_as(as = "DefaultOnNull")]
    pub unit: String,
    #[serde_as(as = "DefaultOnNull")]
    pub nationality: String,
}
