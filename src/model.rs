/// Core data types for the disaster database service.
///
/// This module defines the shared domain model imported by all other modules.
/// It holds the types and the default-value constants of the output schema,
/// with no logic and no I/O.

// ---------------------------------------------------------------------------
// Output schema defaults
// ---------------------------------------------------------------------------

/// Default for any missing date, type, or location field. The output schema
/// contract requires the literal string rather than an absent value.
pub const UNKNOWN: &str = "Unknown";

/// Default for the disaster number of rows that have none (all NWS rows,
/// plus FEMA records missing the field).
pub const NOT_APPLICABLE: &str = "N/A";

/// Default headline for NWS rows whose alert carried none. Distinct from
/// `UNKNOWN` to match the published dataset.
pub const NO_HEADLINE: &str = "No headline";

// ---------------------------------------------------------------------------
// Source tag
// ---------------------------------------------------------------------------

/// Which upstream API a normalized event came from.
///
/// Every `NormalizedEvent` carries exactly one of these; the rendered forms
/// "NWS" and "FEMA" are part of the output schema contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Nws,
    Fema,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Nws => "NWS",
            Source::Fema => "FEMA",
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Normalized event
// ---------------------------------------------------------------------------

/// One row of the merged output dataset.
///
/// Produced by `normalize::normalize` from either a FEMA disaster
/// declaration or an NWS alert. Rows have no identity beyond their position
/// and are immutable once created. String fields are already defaulted per
/// the schema contract (`UNKNOWN` / `NOT_APPLICABLE`); only `headline` stays
/// optional, because the column is blank for FEMA rows rather than
/// defaulted.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedEvent {
    pub date: String, // ISO 8601 as returned by the API, or UNKNOWN
    pub event_type: String,
    pub estimated_loss: u64,
    pub location: String, // state code (FEMA) or area description (NWS)
    pub source: Source,
    pub disaster_number: String,
    pub headline: Option<String>, // NWS rows only
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when fetching from the NWS or OpenFEMA APIs.
///
/// Fetchers return these as typed failures so callers can distinguish
/// "no events occurred" from "fetch failed". Degrading a failure to an
/// empty input list happens only at the orchestration layer.
#[derive(Debug, PartialEq)]
pub enum FetchError {
    /// Non-2xx HTTP response from the remote API.
    HttpStatus(u16),
    /// Transport-level failure: DNS, connect, TLS, or body read.
    Transport(String),
    /// The response body could not be deserialized.
    Parse(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::HttpStatus(code) => write!(f, "HTTP error: {}", code),
            FetchError::Transport(msg) => write!(f, "Transport error: {}", msg),
            FetchError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(err.to_string())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
