//! Request options and bodies for data API operations.

use std::fmt;

use serde::Serialize;

/// Output format for lookup endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// JSON records (the API default).
    Json,
    /// CSV rows.
    Csv,
}

impl ResponseFormat {
    /// Returns the query parameter value for this format.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How often a scheduled product is refreshed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MonitoringFrequency {
    /// Refresh every hour.
    Hourly,
    /// Refresh once a day.
    #[default]
    Daily,
    /// Refresh once a week.
    Weekly,
}

impl MonitoringFrequency {
    /// Returns the wire value for this frequency.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
        }
    }
}

impl fmt::Display for MonitoringFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Joins identifiers with `,` for batch endpoints.
///
/// # Example
///
/// ```rust
/// use shopsavvy_data_api::clients::data_api::join_identifiers;
///
/// assert_eq!(join_identifiers(&["a", "b", "c"]), "a,b,c");
/// assert_eq!(join_identifiers(&["only"]), "only");
/// ```
#[must_use]
pub fn join_identifiers<S: AsRef<str>>(identifiers: &[S]) -> String {
    identifiers
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(",")
}

#[derive(Debug, Serialize)]
pub(crate) struct ScheduleRequest<'a> {
    pub identifier: &'a str,
    pub frequency: MonitoringFrequency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retailer: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScheduleBatchRequest<'a> {
    pub identifiers: String,
    pub frequency: MonitoringFrequency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retailer: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RemoveRequest<'a> {
    pub identifier: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct RemoveBatchRequest {
    pub identifiers: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_join_identifiers_has_no_trailing_separator() {
        assert_eq!(join_identifiers(&["012345678901", "B08N5WRWNW"]), "012345678901,B08N5WRWNW");
        assert_eq!(join_identifiers(&[String::from("x")]), "x");
        assert!(!join_identifiers(&["a", "b"]).ends_with(','));
    }

    #[test]
    fn test_join_identifiers_empty_input() {
        let empty: [&str; 0] = [];
        assert_eq!(join_identifiers(&empty), "");
    }

    #[test]
    fn test_schedule_request_omits_null_retailer() {
        let body = ScheduleRequest {
            identifier: "p1",
            frequency: MonitoringFrequency::Hourly,
            retailer: None,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"identifier": "p1", "frequency": "hourly"})
        );
    }

    #[test]
    fn test_schedule_batch_request_includes_retailer_when_set() {
        let body = ScheduleBatchRequest {
            identifiers: join_identifiers(&["a", "b"]),
            frequency: MonitoringFrequency::Weekly,
            retailer: Some("amazon"),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"identifiers": "a,b", "frequency": "weekly", "retailer": "amazon"})
        );
    }

    #[test]
    fn test_format_and_frequency_wire_values() {
        assert_eq!(ResponseFormat::Csv.to_string(), "csv");
        assert_eq!(ResponseFormat::Json.as_str(), "json");
        assert_eq!(Some(ResponseFormat::Csv).map(ResponseFormat::as_str), Some("csv"));
        assert_eq!(MonitoringFrequency::Weekly.as_str(), "weekly");
        assert_eq!(MonitoringFrequency::default(), MonitoringFrequency::Daily);
        assert_eq!(MonitoringFrequency::Hourly.to_string(), "hourly");
    }
}
