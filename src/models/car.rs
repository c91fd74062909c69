use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnError, DefaultOnNull, DisplayFromStr, PickFirst, serde_as};

#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Car {
    #[serde_as(as = "DefaultOnNull")]
    pub id: u64,
    #[serde_as(as = "DefaultOnNull")]
    pub car_number: String,
    #[serde_as(as = "DefaultOnNull")]
    pub v_type: String,
    /// Sent as a number or a numeric string; anything else reads as unknown.
    #[serde_as(as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    pub car_year: Option<i32>,
    #[serde(rename = "cownerName")]
    #[serde_as(as = "DefaultOnNull")]
    pub owner_name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub section: String,
}
