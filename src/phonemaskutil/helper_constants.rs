// Copyright (C) 2026 The rphonemask Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// The character reserving exactly one digit position in a mask
/// template. Every other template character is a literal.
pub const SLOT_MARKER: char = '.';

/// Region used when neither a pin nor the injected default-region
/// resolver yields a usable country.
pub const FALLBACK_REGION: &'static str = "us";

/// The number of characters in a well-formed ISO 3166-1 region code.
pub const ISO_CODE_LENGTH: usize = 2;

/// Captures the digits of a leading `+<digits>` run. Applied anchored
/// at the start of the formatted value.
pub const LEADING_COUNTRY_CODE_PATTERN: &'static str = r"\+([0-9]+)";

/// Captures the digits of the first parenthesized group, which by mask
/// convention is the area code.
pub const AREA_CODE_GROUP_PATTERN: &'static str = r"\(([0-9]+)\)";

/// The trailing run of unfilled slot markers, whitespace and
/// separators that display trimming removes.
pub const TRAILING_NON_DIGIT_PATTERN: &'static str = r"[^0-9]+$";

/// An opening parenthesis left dangling before digits at the end of a
/// trimmed display string. Such a group gets its `)` appended back.
pub const UNCLOSED_DIGIT_GROUP_PATTERN: &'static str = r"\([0-9]+$";

/// The capturing tail of the anchored subscriber-number pattern built
/// by the parser: everything after the known country/area digits.
pub const SUBSCRIBER_CAPTURE_PATTERN: &'static str = r"([0-9]+)";
