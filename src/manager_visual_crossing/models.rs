use serde::Deserialize;
use serde_json::{Map, Value};

/// One day of the timeline, keyed by the provider's own attribute names
pub type DayRecord = Map<String, Value>;

#[derive(Deserialize)]
pub struct Timeline {
    #[serde(default)]
    pub days: Vec<DayRecord>,
}
