// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Calendar component (VCALENDAR), the root of a component tree.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::component::storage::Storage;
use crate::component::{Component, VComponent};
use crate::event::VEvent;
use crate::kind::ComponentKind;
use crate::property::PropertyMap;

/// Calendar component (VCALENDAR)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCalendar {
    properties: PropertyMap,
    children: Vec<Component>,
}

impl VCalendar {
    /// A calendar with default properties and no children.
    #[must_use]
    pub fn new() -> Self {
        Self {
            properties: ComponentKind::Calendar.defaults(),
            children: Vec::new(),
        }
    }

    /// A calendar whose children are loaded from serialized text.
    #[must_use]
    pub fn from_serialized(src: &str) -> Self {
        let mut calendar = Self::new();
        calendar.unserialize(src);
        calendar
    }

    /// Append a child component.
    pub fn add(&mut self, child: impl Into<Component>) -> &mut Self {
        self.children.push(child.into());
        self
    }

    /// Remove the first child equal to `child`. Does nothing if there is none.
    pub fn remove<C>(&mut self, child: &C) -> &mut Self
    where
        Component: PartialEq<C>,
    {
        if let Some(index) = self.children.iter().position(|c| c == child) {
            self.children.remove(index);
        }
        self
    }

    /// The events among the children, in order.
    pub fn events(&self) -> impl Iterator<Item = &VEvent> {
        self.children.iter().filter_map(Component::as_event)
    }
}

impl Default for VCalendar {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for VCalendar {
    fn properties_mut(&mut self) -> &mut PropertyMap {
        &mut self.properties
    }

    fn children_mut(&mut self) -> Option<&mut Vec<Component>> {
        Some(&mut self.children)
    }
}

impl VComponent for VCalendar {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Calendar
    }

    fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    fn children(&self) -> &[Component] {
        &self.children
    }
}

impl FromStr for VCalendar {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_serialized(s))
    }
}

impl fmt::Display for VCalendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}
