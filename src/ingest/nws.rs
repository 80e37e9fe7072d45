/// NWS (National Weather Service) Alerts API Client
///
/// Retrieves currently active weather alerts for the US from the NWS
/// public API. The endpoint returns a single GeoJSON page by API contract,
/// so no pagination is needed.
///
/// API Documentation: https://www.weather.gov/documentation/services-web-api

use serde::Deserialize;

use crate::config::ApiConfig;
use crate::model::FetchError;

// ============================================================================
// NWS API Response Structures
// ============================================================================

/// Active alerts response envelope.
#[derive(Debug, Deserialize)]
pub struct ActiveAlertsResponse {
    #[serde(default)]
    pub features: Vec<AlertFeature>,
}

/// One GeoJSON feature; only `properties` is of interest here.
#[derive(Debug, Deserialize)]
pub struct AlertFeature {
    #[serde(default)]
    pub properties: AlertProperties,
}

/// The alert fields consumed by the normalizer. Every field is optional at
/// the wire level; the NWS omits headlines on some alert kinds.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AlertProperties {
    pub event: Option<String>,
    pub headline: Option<String>,
    #[serde(rename = "areaDesc")]
    pub area_desc: Option<String>,
    pub effective: Option<String>, // ISO 8601 timestamp
}

// ============================================================================
// API Client Functions
// ============================================================================

/// Fetch all currently active alerts.
///
/// # Parameters
/// - `client`: HTTP client
/// - `config`: endpoint configuration
/// - `area`: optional two-letter area filter (e.g. "IL")
///
/// # Returns
/// The `properties` of every alert feature, in response order. A non-2xx
/// status or transport failure is returned as a `FetchError`; the caller
/// decides whether to degrade it to an empty list.
pub fn fetch_active_alerts(
    client: &reqwest::blocking::Client,
    config: &ApiConfig,
    area: Option<&str>,
) -> Result<Vec<AlertProperties>, FetchError> {
    let url = format!("{}/alerts/active", config.nws_base_url);

    let mut request = client.get(&url).header("Accept", "application/json");
    if let Some(area) = area {
        request = request.query(&[("area", area)]);
    }

    let response = request.send()?;

    if !response.status().is_success() {
        return Err(FetchError::HttpStatus(response.status().as_u16()));
    }

    let body = response.text()?;
    parse_active_alerts(&body)
}

/// Parse an active-alerts response body into the flat property list.
pub fn parse_active_alerts(body: &str) -> Result<Vec<AlertProperties>, FetchError> {
    let parsed: ActiveAlertsResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))?;

    Ok(parsed.features.into_iter().map(|f| f.properties).collect())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_feature() {
        let body = r#"{
            "features": [
                {
                    "properties": {
                        "event": "Tornado Warning",
                        "headline": "Tornado Warning issued May 1",
                        "areaDesc": "Peoria County, IL",
                        "effective": "2023-05-01T12:00:00-05:00"
                    }
                }
            ]
        }"#;

        let alerts = parse_active_alerts(body).expect("valid body should parse");
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].event.as_deref(), Some("Tornado Warning"));
        assert_eq!(alerts[0].area_desc.as_deref(), Some("Peoria County, IL"));
        assert_eq!(
            alerts[0].effective.as_deref(),
            Some("2023-05-01T12:00:00-05:00")
        );
    }

    #[test]
    fn test_parse_tolerates_missing_properties_fields() {
        // The NWS omits headline (and occasionally other fields) on some
        // alert kinds; they must parse as None, not fail.
        let body = r#"{
            "features": [
                { "properties": { "event": "Flood Advisory" } },
                { "properties": {} }
            ]
        }"#;

        let alerts = parse_active_alerts(body).expect("sparse properties should parse");
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].event.as_deref(), Some("Flood Advisory"));
        assert!(alerts[0].headline.is_none());
        assert!(alerts[1].event.is_none());
    }

    #[test]
    fn test_parse_empty_feature_list() {
        let alerts = parse_active_alerts(r#"{"features": []}"#).expect("empty list is valid");
        assert!(alerts.is_empty());
    }

    #[test]
    fn test_parse_missing_features_key_yields_empty_list() {
        // A response with no `features` key is treated as zero alerts
        // rather than a parse failure.
        let alerts = parse_active_alerts(r#"{"title": "Current watches"}"#)
            .expect("missing features key should default");
        assert!(alerts.is_empty());
    }

    #[test]
    fn test_parse_rejects_malformed_body() {
        let result = parse_active_alerts("<html>502 Bad Gateway</html>");
        assert!(matches!(result, Err(FetchError::Parse(_))));
    }
}
