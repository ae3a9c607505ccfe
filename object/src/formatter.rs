// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Component formatter.
//!
//! Writes a component tree in the line-based text format to any
//! `std::io::Write` implementer:
//!
//! ```text
//! BEGIN:<TYPE>
//! <NAME>:<VALUE>      one line per set property
//! <children>          recursively
//! END:<TYPE>
//! ```
//!
//! Every line ends with CRLF. Values are written verbatim, without escaping
//! or folding.

use std::io::{self, Write};

use crate::component::VComponent;
use crate::keyword::{KW_BEGIN, KW_END};

/// Convenience function to format a component to a `String`.
///
/// # Example
///
/// ```
/// use vcal_object::{VCalendar, format};
///
/// let text = format(&VCalendar::new())?;
/// assert_eq!(
///     text,
///     "BEGIN:VCALENDAR\r\n\
///      PRODID:-//Copernica BV//Copernica Calendar //NL\r\n\
///      VERSION:2.0\r\n\
///      CALSCALE:GREGORIAN\r\n\
///      METHOD:PUBLISH\r\n\
///      END:VCALENDAR\r\n"
/// );
/// # Ok::<(), std::io::Error>(())
/// ```
///
/// # Errors
///
/// Returns an error if writing to the internal buffer fails or if the output
/// contains invalid UTF-8 data.
pub fn format<C: VComponent + ?Sized>(component: &C) -> io::Result<String> {
    let mut buffer = Vec::new();
    Formatter::new(&mut buffer).write(component)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Component formatter that writes to any `Write` implementer.
///
/// # Example
///
/// ```
/// use vcal_object::formatter::Formatter;
/// use vcal_object::VEvent;
///
/// let mut buffer = Vec::new();
/// let mut formatter = Formatter::new(&mut buffer);
/// formatter.write(&VEvent::new())?;
/// assert!(buffer.starts_with(b"BEGIN:VEVENT\r\n"));
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct Formatter<W: Write> {
    writer: W,
}

impl<W: Write> Formatter<W> {
    /// Create a new formatter.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Get a reference to the underlying writer.
    #[must_use]
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Consumes this formatter, returning the underlying writer.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Write a component and its children.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write<C: VComponent + ?Sized>(&mut self, component: &C) -> io::Result<()> {
        let type_name = component.type_name();
        self.with_block(type_name, |f| {
            for (name, value) in component.properties().iter_set() {
                f.write_property(name, value)?;
            }
            for child in component.children() {
                f.write(child)?;
            }
            Ok(())
        })
    }

    /// Write a `NAME:VALUE` line.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write_property(&mut self, name: &str, value: &str) -> io::Result<()> {
        write!(self.writer, "{name}:{value}")?;
        self.writeln()
    }

    /// Write a CRLF line ending.
    fn writeln(&mut self) -> io::Result<()> {
        self.writer.write_all(b"\r\n")
    }

    fn with_block<F>(&mut self, type_name: &str, body: F) -> io::Result<()>
    where
        F: FnOnce(&mut Self) -> io::Result<()>,
    {
        self.write_property(KW_BEGIN, type_name)?;
        body(self)?;
        self.write_property(KW_END, type_name)
    }

    /// Flush the underlying writer.
    ///
    /// # Errors
    /// Returns an error if flushing fails.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
