// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The capability set shared by every calendar component.

use std::fmt;

use self::storage::Storage;
use crate::calendar::VCalendar;
use crate::dynamic::{self, Arg};
use crate::error::VObjectError;
use crate::event::VEvent;
use crate::formatter::Formatter;
use crate::kind::ComponentKind;
use crate::parser;
use crate::property::PropertyMap;

pub(crate) mod storage {
    use crate::component::Component;
    use crate::property::PropertyMap;

    /// Mutable access to a component's state, kept out of the public API so
    /// that property maps can only be changed through whitelist checks.
    pub trait Storage {
        fn properties_mut(&mut self) -> &mut PropertyMap;

        /// `None` for kinds that cannot hold children.
        fn children_mut(&mut self) -> Option<&mut Vec<Component>>;
    }
}

/// Operations every component supports.
///
/// Implemented by [`VCalendar`], [`VEvent`] and the [`Component`] enum. The
/// trait is sealed: the set of kinds is closed.
pub trait VComponent: Storage {
    /// The kind of this component.
    fn kind(&self) -> ComponentKind;

    /// The current property map.
    fn properties(&self) -> &PropertyMap;

    /// Children in insertion order. Always empty for leaf kinds.
    fn children(&self) -> &[Component] {
        &[]
    }

    /// The type tag, e.g. `VCALENDAR`.
    fn type_name(&self) -> &'static str {
        self.kind().type_name()
    }

    /// The supported properties with their default values.
    fn defaults(&self) -> PropertyMap {
        self.kind().defaults()
    }

    /// Set a whitelisted property. `name` is matched case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`VObjectError::UnsupportedProperty`] if `name` is not on the
    /// whitelist of this component kind; the component is left unchanged.
    fn add_property(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<&mut Self, VObjectError> {
        let key = whitelisted(self.kind(), name)?;
        self.properties_mut().assign(&key, Some(value.into()));
        Ok(self)
    }

    /// Alias of [`VComponent::add_property`].
    ///
    /// # Errors
    ///
    /// See [`VComponent::add_property`].
    fn set(&mut self, name: &str, value: impl Into<String>) -> Result<&mut Self, VObjectError> {
        self.add_property(name, value)
    }

    /// Unset a whitelisted property. The key stays in the map.
    ///
    /// # Errors
    ///
    /// Returns [`VObjectError::UnsupportedProperty`] if `name` is not on the
    /// whitelist of this component kind.
    fn remove_property(&mut self, name: &str) -> Result<&mut Self, VObjectError> {
        let key = whitelisted(self.kind(), name)?;
        self.properties_mut().assign(&key, None);
        Ok(self)
    }

    /// Loosely typed form of `add`: a component argument adds a child,
    /// otherwise a property name and a value are expected.
    ///
    /// # Errors
    ///
    /// - [`VObjectError::ChildrenNotSupported`] when adding a component to a leaf
    /// - [`VObjectError::MissingParameters`] with fewer than two arguments
    /// - [`VObjectError::InvalidParameterType`] when the name or value is not text
    /// - [`VObjectError::UnsupportedProperty`] for names off the whitelist
    fn add_args(&mut self, args: Vec<Arg>) -> Result<&mut Self, VObjectError> {
        dynamic::add(self, args)?;
        Ok(self)
    }

    /// Loosely typed form of `remove`: a component argument removes a child,
    /// otherwise a property name is expected.
    ///
    /// # Errors
    ///
    /// - [`VObjectError::MissingParameters`] with no argument
    /// - [`VObjectError::InvalidParameterType`] when the name is not text
    /// - [`VObjectError::UnsupportedProperty`] for names off the whitelist
    fn remove_args(&mut self, args: &[Arg]) -> Result<&mut Self, VObjectError> {
        dynamic::remove(self, args)?;
        Ok(self)
    }

    /// Serialize this component and its children.
    fn serialize(&self) -> String {
        let mut buffer = Vec::new();
        // Writing into a `Vec` does not fail.
        let _ = Formatter::new(&mut buffer).write(self);
        String::from_utf8_lossy(&buffer).into_owned()
    }

    /// Replace the parsed state of this component with the content of `src`.
    ///
    /// Previously held children are discarded.
    fn unserialize(&mut self, src: &str) {
        parser::load(self, src);
    }
}

fn whitelisted(kind: ComponentKind, name: &str) -> Result<String, VObjectError> {
    let key = name.to_ascii_uppercase();
    if kind.supports(&key) {
        Ok(key)
    } else {
        Err(VObjectError::UnsupportedProperty(name.to_owned()))
    }
}

/// A component of any kind, as held in a calendar's children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component {
    /// A nested calendar.
    Calendar(VCalendar),

    /// An event.
    Event(VEvent),
}

impl Component {
    /// The event, if this is one.
    #[must_use]
    pub fn as_event(&self) -> Option<&VEvent> {
        match self {
            Self::Event(v) => Some(v),
            Self::Calendar(_) => None,
        }
    }

    /// The calendar, if this is one.
    #[must_use]
    pub fn as_calendar(&self) -> Option<&VCalendar> {
        match self {
            Self::Calendar(v) => Some(v),
            Self::Event(_) => None,
        }
    }
}

impl Storage for Component {
    fn properties_mut(&mut self) -> &mut PropertyMap {
        match self {
            Self::Calendar(v) => v.properties_mut(),
            Self::Event(v) => v.properties_mut(),
        }
    }

    fn children_mut(&mut self) -> Option<&mut Vec<Component>> {
        match self {
            Self::Calendar(v) => v.children_mut(),
            Self::Event(v) => v.children_mut(),
        }
    }
}

impl VComponent for Component {
    fn kind(&self) -> ComponentKind {
        match self {
            Self::Calendar(v) => v.kind(),
            Self::Event(v) => v.kind(),
        }
    }

    fn properties(&self) -> &PropertyMap {
        match self {
            Self::Calendar(v) => v.properties(),
            Self::Event(v) => v.properties(),
        }
    }

    fn children(&self) -> &[Component] {
        match self {
            Self::Calendar(v) => v.children(),
            Self::Event(v) => v.children(),
        }
    }
}

impl From<VEvent> for Component {
    fn from(value: VEvent) -> Self {
        Self::Event(value)
    }
}

impl From<VCalendar> for Component {
    fn from(value: VCalendar) -> Self {
        Self::Calendar(value)
    }
}

impl PartialEq<VEvent> for Component {
    fn eq(&self, other: &VEvent) -> bool {
        self.as_event() == Some(other)
    }
}

impl PartialEq<VCalendar> for Component {
    fn eq(&self, other: &VCalendar) -> bool {
        self.as_calendar() == Some(other)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}
