/// Coarse economic-loss estimation by event type.
///
/// Assigns each event one of four fixed dollar buckets based on keyword
/// substring matching. The figures are order-of-magnitude placeholders
/// carried over from the published dataset, not actuarial estimates; the
/// bucket boundaries and the order of checks are part of the output
/// contract and must not be reordered.

// ---------------------------------------------------------------------------
// Loss buckets (USD)
// ---------------------------------------------------------------------------

/// Hurricanes and tropical storms.
pub const LOSS_HURRICANE: u64 = 1_000_000_000;

/// Tornadoes and floods.
pub const LOSS_TORNADO_FLOOD: u64 = 500_000_000;

/// Blizzards and winter storms.
pub const LOSS_WINTER_STORM: u64 = 250_000_000;

/// Everything else, including unknown or missing event types.
pub const LOSS_DEFAULT: u64 = 100_000_000;

// ---------------------------------------------------------------------------
// Severity keywords
// ---------------------------------------------------------------------------

/// Keywords gating which NWS alerts are retained by the normalizer.
/// Matched case-insensitively as substrings of the alert's event type.
pub const SEVERE_KEYWORDS: [&str; 4] = ["hurricane", "tornado", "flood", "blizzard"];

/// Returns `true` if the event type names one of the severe phenomena.
pub fn is_severe(event_type: &str) -> bool {
    let lowered = event_type.to_lowercase();
    SEVERE_KEYWORDS.iter().any(|keyword| lowered.contains(keyword))
}

// ---------------------------------------------------------------------------
// Estimation
// ---------------------------------------------------------------------------

/// Maps an event-type string to its fixed loss bucket.
///
/// Matching is case-insensitive substring membership, first match wins:
/// hurricane/tropical storm, then tornado/flood, then blizzard/winter
/// storm, then the default. An event type naming several phenomena
/// therefore resolves to the most expensive one ("Hurricane with flooding"
/// is a hurricane). `None` and the empty string fall through to the
/// default bucket.
pub fn estimate_loss(event_type: Option<&str>) -> u64 {
    let lowered = match event_type {
        Some(raw) => raw.to_lowercase(),
        None => return LOSS_DEFAULT,
    };

    if lowered.contains("hurricane") || lowered.contains("tropical storm") {
        LOSS_HURRICANE
    } else if lowered.contains("tornado") || lowered.contains("flood") {
        LOSS_TORNADO_FLOOD
    } else if lowered.contains("blizzard") || lowered.contains("winter storm") {
        LOSS_WINTER_STORM
    } else {
        LOSS_DEFAULT
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
