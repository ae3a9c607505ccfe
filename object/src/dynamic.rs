// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Loosely typed `add`/`remove` entry points, for callers that forward
//! arguments from an untyped host such as a script binding.

use crate::calendar::VCalendar;
use crate::component::{Component, VComponent};
use crate::error::VObjectError;
use crate::event::VEvent;

/// A loosely typed argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    /// A text value, the only type accepted for property names and values.
    Text(String),

    /// An integer.
    Integer(i64),

    /// A boolean.
    Boolean(bool),

    /// A component.
    Component(Component),
}

impl Arg {
    fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for Arg {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<Component> for Arg {
    fn from(value: Component) -> Self {
        Self::Component(value)
    }
}

impl From<VEvent> for Arg {
    fn from(value: VEvent) -> Self {
        Self::Component(value.into())
    }
}

impl From<VCalendar> for Arg {
    fn from(value: VCalendar) -> Self {
        Self::Component(value.into())
    }
}

pub(crate) fn add<C: VComponent + ?Sized>(
    component: &mut C,
    args: Vec<Arg>,
) -> Result<(), VObjectError> {
    let mut args = args.into_iter();
    let (first, second) = match (args.next(), args.next()) {
        (Some(Arg::Component(child)), _) => {
            let kind = component.kind();
            let children = component
                .children_mut()
                .ok_or(VObjectError::ChildrenNotSupported(kind))?;
            children.push(child);
            return Ok(());
        }
        (Some(first), Some(second)) => (first, second),
        _ => return Err(VObjectError::MissingParameters),
    };

    match (first.as_text(), second) {
        (Some(name), Arg::Text(value)) => {
            component.add_property(name, value)?;
            Ok(())
        }
        _ => Err(VObjectError::InvalidParameterType),
    }
}

pub(crate) fn remove<C: VComponent + ?Sized>(
    component: &mut C,
    args: &[Arg],
) -> Result<(), VObjectError> {
    match args.first() {
        Some(Arg::Component(child)) => {
            // Leaves have no children, so there is nothing to remove
            if let Some(children) = component.children_mut() {
                if let Some(index) = children.iter().position(|c| c == child) {
                    children.remove(index);
                }
            }
            Ok(())
        }
        Some(Arg::Text(name)) => {
            component.remove_property(name)?;
            Ok(())
        }
        Some(_) => Err(VObjectError::InvalidParameterType),
        None => Err(VObjectError::MissingParameters),
    }
}
