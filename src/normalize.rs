/// Normalization of the two upstream record shapes into one output schema.
///
/// FEMA declarations and NWS alerts arrive with different fields and
/// different completeness guarantees; this module flattens both into
/// `NormalizedEvent` rows and applies the loss estimate per record. FEMA
/// records pass through unfiltered; NWS alerts are gated by the severity
/// filter. No deduplication is attempted across sources.

use crate::estimate;
use crate::ingest::fema::DisasterDeclaration;
use crate::ingest::nws::AlertProperties;
use crate::model::{NO_HEADLINE, NOT_APPLICABLE, NormalizedEvent, Source, UNKNOWN};

/// Merges disaster declarations and weather alerts into the flat output
/// record set. FEMA rows are emitted first, then retained NWS rows, each
/// group in input order.
pub fn normalize(
    declarations: &[DisasterDeclaration],
    alerts: &[AlertProperties],
) -> Vec<NormalizedEvent> {
    let mut events = Vec::with_capacity(declarations.len() + alerts.len());

    for declaration in declarations {
        events.push(normalize_declaration(declaration));
    }

    for alert in alerts {
        if let Some(event) = normalize_alert(alert) {
            events.push(event);
        }
    }

    events
}

/// Every declaration becomes exactly one FEMA-tagged row; missing fields
/// take the schema defaults.
fn normalize_declaration(declaration: &DisasterDeclaration) -> NormalizedEvent {
    NormalizedEvent {
        date: or_unknown(declaration.declaration_date.as_deref()),
        event_type: or_unknown(declaration.incident_type.as_deref()),
        estimated_loss: estimate::estimate_loss(declaration.incident_type.as_deref()),
        location: or_unknown(declaration.state.as_deref()),
        source: Source::Fema,
        disaster_number: declaration
            .disaster_number
            .map(|n| n.to_string())
            .unwrap_or_else(|| NOT_APPLICABLE.to_string()),
        headline: None,
    }
}

/// An alert becomes an NWS-tagged row only if its event type passes the
/// severity filter. Alerts with no event type are dropped; they cannot
/// match any severity keyword.
fn normalize_alert(alert: &AlertProperties) -> Option<NormalizedEvent> {
    let event_type = match alert.event.as_deref() {
        Some(event) if estimate::is_severe(event) => event,
        _ => return None,
    };

    Some(NormalizedEvent {
        date: or_unknown(alert.effective.as_deref()),
        event_type: event_type.to_string(),
        estimated_loss: estimate::estimate_loss(Some(event_type)),
        location: or_unknown(alert.area_desc.as_deref()),
        source: Source::Nws,
        disaster_number: NOT_APPLICABLE.to_string(),
        headline: Some(
            alert
                .headline
                .clone()
                .unwrap_or_else(|| NO_HEADLINE.to_string()),
        ),
    })
}

fn or_unknown(value: Option<&str>) -> String {
    value.unwrap_or(UNKNOWN).to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::{LOSS_DEFAULT, LOSS_HURRICANE, LOSS_TORNADO_FLOOD};

    fn alert(event: Option<&str>) -> AlertProperties {
        AlertProperties {
            event: event.map(String::from),
            headline: Some("Take cover now".to_string()),
            area_desc: Some("Tazewell County, IL".to_string()),
            effective: Some("2023-05-01T12:00:00-05:00".to_string()),
        }
    }

    fn declaration(incident_type: Option<&str>) -> DisasterDeclaration {
        DisasterDeclaration {
            incident_type: incident_type.map(String::from),
            declaration_date: Some("2023-04-01T00:00:00.000Z".to_string()),
            state: Some("IL".to_string()),
            disaster_number: Some(4676),
        }
    }

    // --- FEMA side ----------------------------------------------------------

    #[test]
    fn test_every_declaration_yields_exactly_one_row() {
        // No filtering on the FEMA side, severe or not.
        let declarations = vec![
            declaration(Some("Hurricane")),
            declaration(Some("Biological")),
            declaration(None),
            DisasterDeclaration::default(),
        ];

        let events = normalize(&declarations, &[]);
        assert_eq!(events.len(), 4);
        assert!(events.iter().all(|e| e.source == Source::Fema));
    }

    #[test]
    fn test_declaration_fields_map_into_schema() {
        let events = normalize(&[declaration(Some("Hurricane"))], &[]);

        assert_eq!(events[0].date, "2023-04-01T00:00:00.000Z");
        assert_eq!(events[0].event_type, "Hurricane");
        assert_eq!(events[0].estimated_loss, LOSS_HURRICANE);
        assert_eq!(events[0].location, "IL");
        assert_eq!(events[0].disaster_number, "4676");
        assert!(events[0].headline.is_none(), "FEMA rows carry no headline");
    }

    #[test]
    fn test_empty_declaration_takes_schema_defaults() {
        let events = normalize(&[DisasterDeclaration::default()], &[]);

        assert_eq!(events[0].date, "Unknown");
        assert_eq!(events[0].event_type, "Unknown");
        assert_eq!(events[0].location, "Unknown");
        assert_eq!(events[0].disaster_number, "N/A");
        assert_eq!(events[0].estimated_loss, LOSS_DEFAULT);
    }

    // --- NWS side -----------------------------------------------------------

    #[test]
    fn test_severity_filter_gates_alerts() {
        let alerts = vec![
            alert(Some("Tornado Warning")),
            alert(Some("Severe Thunderstorm Warning")), // dropped
            alert(Some("Flash Flood Warning")),
            alert(Some("Dense Fog Advisory")), // dropped
            alert(None),                       // dropped: no event type
        ];

        let events = normalize(&[], &alerts);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event_type, "Tornado Warning");
        assert_eq!(events[1].event_type, "Flash Flood Warning");
    }

    #[test]
    fn test_no_emitted_nws_event_lacks_all_severity_keywords() {
        let alerts: Vec<AlertProperties> = [
            "Hurricane Warning",
            "Tornado Watch",
            "Winter Weather Advisory",
            "Coastal Flood Statement",
            "Red Flag Warning",
            "Blizzard Warning",
            "Heat Advisory",
        ]
        .into_iter()
        .map(|e| alert(Some(e)))
        .collect();

        for event in normalize(&[], &alerts) {
            assert!(
                estimate::is_severe(&event.event_type),
                "emitted NWS event '{}' must contain a severity keyword",
                event.event_type
            );
        }
    }

    #[test]
    fn test_missing_headline_becomes_no_headline() {
        let mut sparse = alert(Some("Blizzard Warning"));
        sparse.headline = None;
        sparse.area_desc = None;
        sparse.effective = None;

        let events = normalize(&[], &[sparse]);
        assert_eq!(events[0].headline.as_deref(), Some("No headline"));
        assert_eq!(events[0].location, "Unknown");
        assert_eq!(events[0].date, "Unknown");
        assert_eq!(events[0].disaster_number, "N/A");
    }

    // --- Merge behavior -----------------------------------------------------

    #[test]
    fn test_fema_rows_precede_nws_rows() {
        let events = normalize(
            &[declaration(Some("Flood"))],
            &[alert(Some("Tornado Warning"))],
        );

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].source, Source::Fema);
        assert_eq!(events[1].source, Source::Nws);
    }

    #[test]
    fn test_tornado_warning_scenario_row() {
        // A single tornado-warning feature maps to exactly this row; every
        // column is pinned because downstream consumers key on them.
        let input = AlertProperties {
            event: Some("Tornado Warning".to_string()),
            headline: Some("H1".to_string()),
            area_desc: Some("County X".to_string()),
            effective: Some("2023-05-01".to_string()),
        };

        let events = normalize(&[], &[input]);
        assert_eq!(
            events,
            vec![NormalizedEvent {
                date: "2023-05-01".to_string(),
                event_type: "Tornado Warning".to_string(),
                estimated_loss: LOSS_TORNADO_FLOOD,
                location: "County X".to_string(),
                source: Source::Nws,
                disaster_number: "N/A".to_string(),
                headline: Some("H1".to_string()),
            }]
        );
    }

    #[test]
    fn test_empty_inputs_produce_empty_output() {
        assert!(normalize(&[], &[]).is_empty());
    }
}
