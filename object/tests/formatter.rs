// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for the formatter.

use std::io::{self, Write};

use vcal_object::formatter::Formatter;
use vcal_object::{VCalendar, VComponent, VEvent, format};

#[test]
fn test_format_creates_crlf_line_endings() {
    let mut calendar = VCalendar::new();
    calendar.add(VEvent::new());

    let formatted = format(&calendar).unwrap();
    assert!(formatted.ends_with("\r\n"));
    for line in formatted.split_terminator("\r\n") {
        assert!(!line.contains('\n'), "stray LF in {line:?}");
        assert!(!line.contains('\r'), "stray CR in {line:?}");
    }
}

#[test]
fn test_format_matches_serialize_and_display() {
    let mut calendar = VCalendar::new();
    let mut event = VEvent::new();
    event.set("SUMMARY", "Same").unwrap();
    calendar.add(event);

    let formatted = format(&calendar).unwrap();
    assert_eq!(formatted, calendar.serialize());
    assert_eq!(formatted, calendar.to_string());
}

#[test]
fn test_format_to_writer() {
    let mut formatter = Formatter::new(Vec::new());
    formatter.write(&VCalendar::new()).unwrap();
    formatter.write(&VCalendar::new()).unwrap();
    formatter.flush().unwrap();

    let text = String::from_utf8(formatter.into_writer()).unwrap();
    assert_eq!(text.matches("BEGIN:VCALENDAR\r\n").count(), 2);
}

struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("disk full"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_format_propagates_writer_errors() {
    let mut formatter = Formatter::new(FailingWriter);
    let err = formatter.write(&VEvent::new()).unwrap_err();
    assert_eq!(err.to_string(), "disk full");
}
