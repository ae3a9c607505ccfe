// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! A small calendar object model with a line-based text format.
//!
//! A [`VCalendar`] is the root of a tree holding [`VEvent`] children. Every
//! component carries a fixed whitelist of properties, and the whole tree can be
//! serialized to text and parsed back.
//!
//! ```
//! use vcal_object::{VCalendar, VComponent, VEvent};
//!
//! let mut event = VEvent::new();
//! event.set("summary", "Meeting")?.set("DTSTART", "20240101T090000")?;
//!
//! let mut calendar = VCalendar::new();
//! calendar.add(event);
//!
//! let text = calendar.serialize();
//! assert!(text.starts_with("BEGIN:VCALENDAR\r\n"));
//! assert!(text.contains("SUMMARY:Meeting\r\n"));
//!
//! let parsed = VCalendar::from_serialized(&text);
//! assert_eq!(parsed.children().len(), 1);
//! # Ok::<(), vcal_object::VObjectError>(())
//! ```

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
#![allow(clippy::must_use_candidate, clippy::return_self_not_must_use)]

mod calendar;
mod component;
pub mod datetime;
mod dynamic;
mod error;
mod event;
pub mod formatter;
pub mod keyword;
mod kind;
mod parser;
mod property;

pub use crate::calendar::VCalendar;
pub use crate::component::{Component, VComponent};
pub use crate::datetime::format_date;
pub use crate::dynamic::Arg;
pub use crate::error::VObjectError;
pub use crate::event::VEvent;
pub use crate::formatter::format;
pub use crate::kind::ComponentKind;
pub use crate::property::PropertyMap;
