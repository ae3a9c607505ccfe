// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Line scanner and loaders for the text format.
//!
//! # Architecture
//!
//! ```text
//! Source Text → Scanner → Content Lines (with depth) → Loader → Component
//! ```
//!
//! The scanner never fails. Lines without a `:` separator are skipped, and
//! unknown property names are ignored by the loaders.

use crate::component::storage::Storage;
use crate::component::{Component, VComponent};
use crate::event::VEvent;
use crate::keyword::{KW_BEGIN, KW_END, KW_VEVENT};
use crate::kind::ComponentKind;
use crate::property::PropertyMap;

/// A scanned content line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ContentLine<'src> {
    /// `BEGIN:<tag>`, with the depth of the block it opens (root is 1).
    Begin { tag: &'src str, depth: usize },

    /// `END:<tag>`, with the depth of the block it closes.
    End { tag: &'src str, depth: usize },

    /// `<name>:<value>`, with the depth of the enclosing block (0 outside
    /// any block).
    Property {
        name: &'src str,
        value: &'src str,
        depth: usize,
    },
}

/// Scan `src` into content lines, tracking block nesting.
///
/// Lines are split on LF with an optional trailing CR removed. Each line is
/// split at its first `:`. Only a name of exactly `BEGIN` or `END` changes
/// the depth, so values containing those words are plain text.
pub(crate) fn scan(src: &str) -> impl Iterator<Item = ContentLine<'_>> {
    let mut depth = 0usize;
    src.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty())
        .filter_map(move |line| {
            let Some((name, value)) = line.split_once(':') else {
                tracing::debug!(line, "skipping line without ':' separator");
                return None;
            };
            let scanned = match name {
                KW_BEGIN => {
                    depth += 1;
                    ContentLine::Begin { tag: value, depth }
                }
                KW_END => {
                    let closed = depth;
                    depth = depth.saturating_sub(1);
                    ContentLine::End {
                        tag: value,
                        depth: closed,
                    }
                }
                _ => ContentLine::Property { name, value, depth },
            };
            Some(scanned)
        })
}

/// Load `src` into `component`, dispatching on its kind.
///
/// A calendar rebuilds its children from the blocks nested directly in the
/// root and keeps its own properties. Any other kind resets its properties to
/// the defaults and applies every property line of `src`, at any depth.
pub(crate) fn load<C: VComponent + ?Sized>(component: &mut C, src: &str) {
    match component.kind() {
        ComponentKind::Calendar => {
            let children = parse_children(src);
            tracing::trace!(count = children.len(), "loaded calendar children");
            if let Some(slot) = component.children_mut() {
                *slot = children;
            }
        }
        ComponentKind::Event => {
            let mut properties = component.defaults();
            apply_properties(
                &mut properties,
                scan(src).filter_map(|line| match line {
                    ContentLine::Property { name, value, .. } => Some((name, value)),
                    _ => None,
                }),
            );
            *component.properties_mut() = properties;
        }
    }
}

/// Each block opened directly inside the root becomes an event, whatever its
/// tag. Blocks nested deeper are skipped.
fn parse_children(src: &str) -> Vec<Component> {
    const CHILD_DEPTH: usize = 2;

    let mut children = Vec::new();
    let mut current: Option<Vec<(&str, &str)>> = None;

    for line in scan(src) {
        match line {
            ContentLine::Begin { tag, depth } if depth == CHILD_DEPTH => {
                if tag != KW_VEVENT {
                    tracing::debug!(tag, "loading nested block as an event");
                }
                current = Some(Vec::new());
            }
            ContentLine::End { tag, depth } if depth == CHILD_DEPTH => {
                tracing::trace!(tag, "closing nested block");
                if let Some(lines) = current.take() {
                    children.push(build_event(lines));
                }
            }
            ContentLine::Property { name, value, depth } if depth == CHILD_DEPTH => {
                if let Some(lines) = current.as_mut() {
                    lines.push((name, value));
                }
            }
            _ => {}
        }
    }

    // Unterminated block at end of input
    if let Some(lines) = current {
        children.push(build_event(lines));
    }

    children
}

fn build_event(lines: Vec<(&str, &str)>) -> Component {
    let mut event = VEvent::new();
    apply_properties(event.properties_mut(), lines);
    Component::Event(event)
}

/// Overwrite the values of known keys. The name match is exact.
fn apply_properties<'src>(
    properties: &mut PropertyMap,
    lines: impl IntoIterator<Item = (&'src str, &'src str)>,
) {
    for (name, value) in lines {
        if !properties.assign(name, Some(value.to_owned())) {
            tracing::trace!(name, "ignoring unrecognized property");
        }
    }
}
