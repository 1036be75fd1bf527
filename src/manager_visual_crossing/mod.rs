pub mod errors;
pub mod models;

use std::time::Duration;
use log::debug;
use reqwest::{Client, StatusCode, Url};
use crate::manager_visual_crossing::errors::VCError;
use crate::manager_visual_crossing::models::{DayRecord, Timeline};

const UNIT_GROUP: &str = "metric";
const LANGUAGE: &str = "en";

/// Struct for fetching single day weather records from the Visual Crossing timeline API
pub struct VisualCrossing {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl VisualCrossing {
    /// Returns a VisualCrossing struct ready for fetching weather records
    ///
    /// # Arguments
    ///
    /// * 'base_url' - url of the timeline service, location and date are appended as path segments
    /// * 'api_key' - the provider's API key, sent as the `key` query parameter
    /// * 'timeout' - upper bound for a whole request to the provider
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<VisualCrossing, VCError> {
        let base_url = Url::parse(base_url).map_err(|e| VCError::Url(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(VCError::Url(format!("{} can not be used as a base url", base_url)));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url,
            api_key: api_key.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Retrieves the weather record for one location and date.
    /// The timeline is always requested for a single date, so only the first
    /// element of the returned `days` array is of interest.
    ///
    /// Any status other than 200 is returned as `VCError::Status` carrying the
    /// provider's response body. The body is read as raw bytes and decoded as UTF-8
    /// regardless of the declared charset, invalid sequences become U+FFFD.
    ///
    /// # Arguments
    ///
    /// * 'location' - address, place name or lat,long as understood by the provider
    /// * 'date' - date as understood by the provider, e.g. 2024-01-31
    pub async fn day_record(&self, location: &str, date: &str) -> Result<DayRecord, VCError> {
        let url = self.timeline_url(location, date)?;
        debug!("requesting timeline for {} on {}", location, date);

        let req = self.client
            .get(url)
            .query(&[("key", self.api_key.as_str()), ("unitGroup", UNIT_GROUP), ("lang", LANGUAGE)])
            .send().await?;

        let status = req.status();
        let body = req.bytes().await?;
        if status != StatusCode::OK {
            return Err(VCError::Status(status.as_u16(), String::from_utf8_lossy(&body).into_owned()));
        }

        let timeline: Timeline = serde_json::from_slice(&body)?;

        timeline.days.into_iter().next().ok_or(VCError::NoDays)
    }

    fn timeline_url(&self, location: &str, date: &str) -> Result<Url, VCError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| VCError::Url(format!("{} can not be used as a base url", self.base_url)))?
            .pop_if_empty()
            .push(location)
            .push(date);

        Ok(url)
    }
}
