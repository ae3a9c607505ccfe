// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for the component model: whitelists, add/set/remove.

use vcal_object::{Component, ComponentKind, VCalendar, VComponent, VEvent, VObjectError};

const EVENT_PROPERTIES: [&str; 9] = [
    "DTSTART",
    "DURATION",
    "DTSTAMP",
    "UID",
    "DESCRIPTION",
    "LOCATION",
    "SEQUENCE",
    "SUMMARY",
    "TRANSP",
];

const CALENDAR_PROPERTIES: [&str; 4] = ["PRODID", "VERSION", "CALSCALE", "METHOD"];

#[test]
fn test_set_every_supported_property() {
    for name in EVENT_PROPERTIES {
        let mut event = VEvent::new();
        event.set(&name.to_lowercase(), "value").unwrap();
        assert_eq!(event.properties().get(name), Some("value"), "{name}");
    }

    for name in CALENDAR_PROPERTIES {
        let mut calendar = VCalendar::new();
        calendar.set(name, "value").unwrap();
        assert_eq!(calendar.properties().get(name), Some("value"), "{name}");
    }
}

#[test]
fn test_unsupported_names_fail_both_ways() {
    let mut calendar = VCalendar::new();
    let mut event = VEvent::new();
    let calendar_before = calendar.clone();
    let event_before = event.clone();

    for name in ["SUMMARY", "X-WR-CALNAME", "", "dtend"] {
        assert_eq!(
            calendar.add_property(name, "v").unwrap_err(),
            VObjectError::UnsupportedProperty(name.to_owned())
        );
        assert_eq!(
            calendar.remove_property(name).unwrap_err(),
            VObjectError::UnsupportedProperty(name.to_owned())
        );
    }
    for name in ["PRODID", "DTEND", "RRULE"] {
        assert!(event.set(name, "v").is_err());
        assert!(event.remove_property(name).is_err());
    }

    assert_eq!(calendar, calendar_before);
    assert_eq!(event, event_before);
}

#[test]
fn test_key_set_never_changes() {
    let mut event = VEvent::new();
    let names: Vec<_> = event.defaults().names().collect();

    event.set("SUMMARY", "a").unwrap();
    event.remove_property("DTSTAMP").unwrap();
    let _ = event.set("X-CUSTOM", "b");

    let after: Vec<_> = event.properties().names().collect();
    assert_eq!(names, after);
}

#[test]
fn test_remove_property_omits_line() {
    let mut calendar = VCalendar::new();
    calendar.remove_property("calscale").unwrap();

    assert!(calendar.properties().contains("CALSCALE"));
    assert!(calendar.defaults().is_set("CALSCALE"));
    let text = calendar.serialize();
    assert!(!text.contains("CALSCALE"));
    assert!(text.contains("METHOD:PUBLISH\r\n"));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        VObjectError::UnsupportedProperty("foo".to_owned()).to_string(),
        "Invalid parameter: property 'foo' is not supported"
    );
    assert_eq!(
        VObjectError::MissingParameters.to_string(),
        "Missing parameters: at least two are required"
    );
    assert_eq!(
        VObjectError::InvalidParameterType.to_string(),
        "Invalid parameter: argument has to be a string"
    );
    assert_eq!(
        VObjectError::ChildrenNotSupported(ComponentKind::Event).to_string(),
        "Invalid parameter: VEVENT cannot contain components"
    );
}

#[test]
fn test_component_enum_delegates() {
    let mut component = Component::from(VEvent::new());
    assert_eq!(component.kind(), ComponentKind::Event);
    component.set("summary", "via enum").unwrap();
    assert_eq!(
        component.as_event().unwrap().properties().get("SUMMARY"),
        Some("via enum")
    );
    assert!(component.as_calendar().is_none());

    let mut nested = Component::from(VCalendar::new());
    assert_eq!(nested.type_name(), "VCALENDAR");
    assert!(nested.set("SUMMARY", "x").is_err());
}

#[test]
fn test_chained_mutation() {
    let mut event = VEvent::new();
    event
        .set("UID", "1@example.com")
        .and_then(|e| e.set("SUMMARY", "Standup"))
        .and_then(|e| e.remove_property("TRANSP"))
        .unwrap();

    assert_eq!(event.properties().get("UID"), Some("1@example.com"));
    assert_eq!(event.properties().get("SUMMARY"), Some("Standup"));
    assert!(!event.properties().is_set("TRANSP"));
}

#[test]
fn test_remove_absent_child() {
    let mut calendar = VCalendar::new();
    let mut kept = VEvent::new();
    kept.set("UID", "kept").unwrap();
    calendar.add(kept.clone());

    let mut other = kept.clone();
    other.set("UID", "other").unwrap();
    calendar.remove(&other);

    assert_eq!(calendar.children().len(), 1);
    assert_eq!(calendar.children()[0], kept);

    calendar.remove(&kept).remove(&kept);
    assert!(calendar.children().is_empty());
}
