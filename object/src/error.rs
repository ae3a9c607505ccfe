// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::kind::ComponentKind;

/// Errors raised when a component is used against its property contract.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VObjectError {
    /// Fewer arguments than the operation requires.
    #[error("Missing parameters: at least two are required")]
    MissingParameters,

    /// A property name or value that is not text.
    #[error("Invalid parameter: argument has to be a string")]
    InvalidParameterType,

    /// A property name outside the component's whitelist.
    #[error("Invalid parameter: property '{0}' is not supported")]
    UnsupportedProperty(String),

    /// A child added to a component kind that cannot hold children.
    #[error("Invalid parameter: {0} cannot contain components")]
    ChildrenNotSupported(ComponentKind),
}
