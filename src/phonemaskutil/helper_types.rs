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

use super::errors::MalformedCountryRowError;
use super::helper_constants::ISO_CODE_LENGTH;

/// Raw country-table row: `(iso code, display name, decoration, dial
/// code, mask template)`. The decoration (a flag emoji in the compiled
/// table) is opaque pass-through data the engine never interprets.
pub type CountryRow = (
    &'static str,
    &'static str,
    Option<&'static str>,
    &'static str,
    &'static str,
);

/// A validated, fixed-field country record. Rows are positional data;
/// everything past the table loader works with these instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRecord {
    pub iso_code: String,
    pub display_name: String,
    pub decoration: Option<String>,
    pub dial_code: String,
    pub mask: String,
}

impl CountryRecord {
    /// Builds a record from a raw row, checking the shape constraints
    /// the rest of the engine relies on: a two-letter lowercase ISO
    /// code, a non-empty all-digit dial code and a non-empty mask.
    /// Mask/dial-code consistency is a trusted precondition of the
    /// static table and is not checked here.
    pub fn from_row(row: &CountryRow) -> Result<Self, MalformedCountryRowError> {
        let (iso_code, display_name, decoration, dial_code, mask) = *row;
        if iso_code.len() != ISO_CODE_LENGTH
            || !iso_code.chars().all(|c| c.is_ascii_lowercase())
        {
            return Err(MalformedCountryRowError::BadIsoCode(iso_code.to_owned()));
        }
        if dial_code.is_empty() || !dial_code.chars().all(|c| c.is_ascii_digit()) {
            return Err(MalformedCountryRowError::BadDialCode(dial_code.to_owned()));
        }
        if mask.is_empty() {
            return Err(MalformedCountryRowError::EmptyMask(iso_code.to_owned()));
        }
        Ok(Self {
            iso_code: iso_code.to_owned(),
            display_name: display_name.to_owned(),
            decoration: decoration.map(str::to_owned),
            dial_code: dial_code.to_owned(),
            mask: mask.to_owned(),
        })
    }
}

/// Derived view of a mask template used for caret placement.
///
/// `slot_offsets` lists the char offsets of the digit slots in
/// template order. `prev_slot` has one entry per char offset from `0`
/// to the template length inclusive, each holding the offset of the
/// nearest slot at or before that position; positions before the first
/// slot fall back to the first slot offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskShape {
    pub slot_offsets: Vec<usize>,
    pub prev_slot: Vec<usize>,
}

impl MaskShape {
    /// The offset where typing continues after `filled` slots have
    /// consumed a digit. When every slot is taken this falls back to
    /// the last `prev_slot` entry.
    pub fn first_free_slot(&self, filled: usize) -> usize {
        self.slot_offsets
            .get(filled)
            .or_else(|| self.prev_slot.last())
            .copied()
            .unwrap_or(0)
    }

    /// The offset of the slot strictly before `offset`, clamped to the
    /// first slot. This is where a caret rests after a backspace.
    pub fn slot_before(&self, offset: usize) -> usize {
        self.slot_offsets
            .iter()
            .rev()
            .find(|&&slot| slot < offset)
            .or_else(|| self.slot_offsets.first())
            .copied()
            .unwrap_or(0)
    }
}

/// Structured decomposition of a formatted phone number. Every field
/// may be absent independently; absence denotes an incomplete number,
/// not an error.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PhoneNumber {
    pub country_code: Option<u32>,
    pub area_code: Option<u32>,
    pub subscriber_number: Option<String>,
    pub iso_code: Option<String>,
}

impl PhoneNumber {
    /// Concatenates the area code and subscriber number as a digit
    /// string; absent fields contribute nothing. This is the string
    /// the per-region validation patterns run against.
    pub fn national_digits(&self) -> String {
        let mut digits = String::new();
        if let Some(area_code) = self.area_code {
            let mut buf = itoa::Buffer::new();
            digits.push_str(buf.format(area_code));
        }
        if let Some(subscriber_number) = &self.subscriber_number {
            digits.push_str(subscriber_number);
        }
        digits
    }
}

/// A `[lenient, strict]` pattern pair for one region. Both sources are
/// matched in full against [`PhoneNumber::national_digits`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRule {
    pub lenient: &'static str,
    pub strict: &'static str,
}

impl ValidationRule {
    pub fn pattern_for(&self, strict: bool) -> &'static str {
        if strict {
            self.strict
        } else {
            self.lenient
        }
    }
}

/// Caret bounds in char offsets. `start == end` is a plain caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn caret(position: usize) -> Self {
        Self {
            start: position,
            end: position,
        }
    }
}

/// Widget-owned input state, threaded through the engine by value.
/// The engine never mutates a state in place: each edit produces a
/// fresh one with `last_key_was_backspace` reset, since the flag
/// covers exactly the one edit just processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputState {
    pub value: String,
    pub selection: Selection,
    pub pinned_region: Option<String>,
    pub last_key_was_backspace: bool,
}
