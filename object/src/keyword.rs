// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Keywords used by the text format.

pub const KW_BEGIN: &str = "BEGIN";
pub const KW_END: &str = "END";

// Component types
pub const KW_VCALENDAR: &str = "VCALENDAR";
pub const KW_VEVENT: &str = "VEVENT";

// Calendar properties
pub const KW_PRODID: &str = "PRODID";
pub const KW_VERSION: &str = "VERSION";
pub const KW_CALSCALE: &str = "CALSCALE";
pub const KW_METHOD: &str = "METHOD";

// Event properties
pub const KW_DTSTART: &str = "DTSTART";
pub const KW_DURATION: &str = "DURATION";
pub const KW_DTSTAMP: &str = "DTSTAMP";
pub const KW_UID: &str = "UID";
pub const KW_DESCRIPTION: &str = "DESCRIPTION";
pub const KW_LOCATION: &str = "LOCATION";
pub const KW_SEQUENCE: &str = "SEQUENCE";
pub const KW_SUMMARY: &str = "SUMMARY";
pub const KW_TRANSP: &str = "TRANSP";

// Default values
pub const KW_PRODID_COPERNICA: &str = "-//Copernica BV//Copernica Calendar //NL";
pub const KW_VERSION_2_0: &str = "2.0";
pub const KW_CALSCALE_GREGORIAN: &str = "GREGORIAN";
pub const KW_METHOD_PUBLISH: &str = "PUBLISH";
pub const KW_TRANSP_OPAQUE: &str = "OPAQUE";
