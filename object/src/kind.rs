// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Component kinds and their property whitelists.

use strum::{AsRefStr, Display, EnumString, IntoStaticStr};

use crate::datetime::now_stamp;
use crate::keyword::{
    KW_CALSCALE, KW_CALSCALE_GREGORIAN, KW_DESCRIPTION, KW_DTSTAMP, KW_DTSTART, KW_DURATION,
    KW_LOCATION, KW_METHOD, KW_METHOD_PUBLISH, KW_PRODID, KW_PRODID_COPERNICA, KW_SEQUENCE,
    KW_SUMMARY, KW_TRANSP, KW_TRANSP_OPAQUE, KW_UID, KW_VERSION, KW_VERSION_2_0,
};
use crate::property::PropertyMap;

/// The closed set of component types.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, IntoStaticStr,
)]
pub enum ComponentKind {
    /// The root calendar, `VCALENDAR`.
    #[strum(serialize = "VCALENDAR")]
    Calendar,

    /// A calendar event, `VEVENT`.
    #[strum(serialize = "VEVENT")]
    Event,
}

/// Initial value of a whitelisted property.
#[derive(Debug, Clone, Copy)]
pub(crate) enum DefaultValue {
    Unset,
    Fixed(&'static str),
    /// Current local time, formatted by [`crate::format_date`].
    Now,
}

const CALENDAR_DEFAULTS: &[(&str, DefaultValue)] = &[
    (KW_PRODID, DefaultValue::Fixed(KW_PRODID_COPERNICA)),
    (KW_VERSION, DefaultValue::Fixed(KW_VERSION_2_0)),
    (KW_CALSCALE, DefaultValue::Fixed(KW_CALSCALE_GREGORIAN)),
    (KW_METHOD, DefaultValue::Fixed(KW_METHOD_PUBLISH)),
];

const EVENT_DEFAULTS: &[(&str, DefaultValue)] = &[
    (KW_DTSTART, DefaultValue::Unset),
    (KW_DURATION, DefaultValue::Unset),
    (KW_DTSTAMP, DefaultValue::Now),
    (KW_UID, DefaultValue::Unset),
    (KW_DESCRIPTION, DefaultValue::Unset),
    (KW_LOCATION, DefaultValue::Unset),
    (KW_SEQUENCE, DefaultValue::Fixed("0")),
    (KW_SUMMARY, DefaultValue::Unset),
    (KW_TRANSP, DefaultValue::Fixed(KW_TRANSP_OPAQUE)),
];

impl ComponentKind {
    /// The type tag written after `BEGIN:` and `END:`.
    #[must_use]
    pub fn type_name(self) -> &'static str {
        self.into()
    }

    /// Whether components of this kind can hold children.
    #[must_use]
    pub const fn has_children(self) -> bool {
        matches!(self, Self::Calendar)
    }

    /// Supported property names, in serialization order.
    pub fn property_names(self) -> impl ExactSizeIterator<Item = &'static str> {
        self.table().iter().map(|(name, _)| *name)
    }

    /// Whether `name` is on the whitelist. The comparison is exact.
    #[must_use]
    pub fn supports(self, name: &str) -> bool {
        self.table().iter().any(|(key, _)| *key == name)
    }

    /// A fresh property map holding this kind's default values.
    #[must_use]
    pub fn defaults(self) -> PropertyMap {
        PropertyMap::from_entries(self.table().iter().map(|&(name, default)| {
            let value = match default {
                DefaultValue::Unset => None,
                DefaultValue::Fixed(v) => Some(v.to_owned()),
                DefaultValue::Now => Some(now_stamp()),
            };
            (name, value)
        }))
    }

    pub(crate) const fn table(self) -> &'static [(&'static str, DefaultValue)] {
        match self {
            Self::Calendar => CALENDAR_DEFAULTS,
            Self::Event => EVENT_DEFAULTS,
        }
    }
}
