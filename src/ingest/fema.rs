/// OpenFEMA Disaster Declarations API Client
///
/// Retrieves historical disaster declaration summaries from the OpenFEMA
/// v2 API. The endpoint is paginated OData-style: results are requested in
/// fixed-size pages via `$top`/`$skip` and accumulated until a short page
/// signals the end of the result set.
///
/// API Documentation: https://www.fema.gov/about/openfema/api

use chrono::NaiveDate;
use serde::Deserialize;

use crate::config::ApiConfig;
use crate::logging::{self, DataSource};
use crate::model::FetchError;

/// OData page size. The API caps `$top` at 1000; a page shorter than this
/// marks the final page.
pub const PAGE_SIZE: usize = 1000;

/// Widest declaration-date window of the replicated dataset. Call sites
/// usually narrow this to a single year; fetching the full window pulls
/// tens of thousands of records.
pub fn default_window() -> (NaiveDate, NaiveDate) {
    (
        NaiveDate::from_ymd_opt(1980, 1, 1).expect("static date is valid"),
        NaiveDate::from_ymd_opt(2024, 12, 31).expect("static date is valid"),
    )
}

// ============================================================================
// OpenFEMA API Response Structures
// ============================================================================

/// Declarations response envelope.
#[derive(Debug, Deserialize)]
pub struct DeclarationsResponse {
    #[serde(rename = "DisasterDeclarationsSummaries", default)]
    pub summaries: Vec<DisasterDeclaration>,
}

/// The declaration fields consumed by the normalizer. Every field is
/// optional at the wire level.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DisasterDeclaration {
    #[serde(rename = "incidentType")]
    pub incident_type: Option<String>,
    #[serde(rename = "declarationDate")]
    pub declaration_date: Option<String>, // ISO 8601 timestamp
    pub state: Option<String>,
    #[serde(rename = "disasterNumber")]
    pub disaster_number: Option<i64>,
}

// ============================================================================
// Filter Construction
// ============================================================================

/// Builds the OData `$filter` expression for a declaration-date window
/// (inclusive calendar dates) and an optional state constraint.
pub fn build_filter(start: NaiveDate, end: NaiveDate, state: Option<&str>) -> String {
    let mut filter = format!(
        "declarationDate ge '{}T00:00:00.000Z' and declarationDate le '{}T23:59:59.999Z'",
        start.format("%Y-%m-%d"),
        end.format("%Y-%m-%d")
    );

    if let Some(state) = state {
        filter.push_str(&format!(" and state eq '{}'", state));
    }

    filter
}

// ============================================================================
// API Client Functions
// ============================================================================

/// Fetch all disaster declarations in the given date window.
///
/// # Parameters
/// - `client`: HTTP client
/// - `config`: endpoint configuration
/// - `start`, `end`: inclusive declaration-date window
/// - `state`: optional two-letter state filter (e.g. "IL")
///
/// # Returns
/// All matching declarations, concatenated across pages in response order.
///
/// A failure on the first page is returned as a `FetchError`. A failure
/// after at least one page has been accumulated terminates pagination and
/// returns the records fetched so far as a success; truncation is logged
/// as a warning but not surfaced to the caller, for compatibility with the
/// published dataset.
pub fn fetch_declarations(
    client: &reqwest::blocking::Client,
    config: &ApiConfig,
    start: NaiveDate,
    end: NaiveDate,
    state: Option<&str>,
) -> Result<Vec<DisasterDeclaration>, FetchError> {
    let url = format!("{}/DisasterDeclarationsSummaries", config.fema_base_url);
    let filter = build_filter(start, end, state);
    let top = PAGE_SIZE.to_string();

    let mut all = Vec::new();
    let mut skip: usize = 0;

    loop {
        let page = match request_page(client, &url, &filter, &top, skip) {
            Ok(page) => page,
            Err(err) if all.is_empty() => return Err(err),
            Err(err) => {
                logging::warn(
                    DataSource::Fema,
                    &format!(
                        "pagination stopped at offset {} ({}); returning {} records fetched so far",
                        skip,
                        err,
                        all.len()
                    ),
                );
                break;
            }
        };

        let count = page.len();
        all.extend(page);

        if count < PAGE_SIZE {
            break;
        }
        skip += PAGE_SIZE;
    }

    Ok(all)
}

/// Request and parse a single page at the given offset.
fn request_page(
    client: &reqwest::blocking::Client,
    url: &str,
    filter: &str,
    top: &str,
    skip: usize,
) -> Result<Vec<DisasterDeclaration>, FetchError> {
    let skip_param = skip.to_string();

    let response = client
        .get(url)
        .header("Accept", "application/json")
        .query(&[
            ("$filter", filter),
            ("$inlinecount", "allpages"),
            ("$top", top),
            ("$skip", skip_param.as_str()),
        ])
        .send()?;

    if !response.status().is_success() {
        return Err(FetchError::HttpStatus(response.status().as_u16()));
    }

    let body = response.text()?;
    parse_declarations(&body)
}

/// Parse a declarations response body into the summary list.
pub fn parse_declarations(body: &str) -> Result<Vec<DisasterDeclaration>, FetchError> {
    let parsed: DeclarationsResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))?;

    Ok(parsed.summaries)
}

// ============================================================================
// Tests
// ============================================================================
