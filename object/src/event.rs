// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Event component (VEVENT).

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use jiff::civil::DateTime;

use crate::component::storage::Storage;
use crate::component::{Component, VComponent};
use crate::datetime::format_date;
use crate::keyword::KW_DTSTAMP;
use crate::kind::ComponentKind;
use crate::property::PropertyMap;

/// Event component (VEVENT)
///
/// A leaf: events have no child storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VEvent {
    properties: PropertyMap,
}

impl VEvent {
    /// An event with default properties, stamped with the current time.
    #[must_use]
    pub fn new() -> Self {
        Self {
            properties: ComponentKind::Event.defaults(),
        }
    }

    /// An event with default properties and the given `DTSTAMP`.
    #[must_use]
    pub fn with_timestamp(stamp: &DateTime) -> Self {
        let mut event = Self::new();
        event
            .properties
            .assign(KW_DTSTAMP, Some(format_date(stamp)));
        event
    }

    /// An event whose properties are loaded from serialized text.
    #[must_use]
    pub fn from_serialized(src: &str) -> Self {
        let mut event = Self::new();
        event.unserialize(src);
        event
    }
}

impl Default for VEvent {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for VEvent {
    fn properties_mut(&mut self) -> &mut PropertyMap {
        &mut self.properties
    }

    fn children_mut(&mut self) -> Option<&mut Vec<Component>> {
        None
    }
}

impl VComponent for VEvent {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Event
    }

    fn properties(&self) -> &PropertyMap {
        &self.properties
    }
}

impl FromStr for VEvent {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_serialized(s))
    }
}

impl fmt::Display for VEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}
