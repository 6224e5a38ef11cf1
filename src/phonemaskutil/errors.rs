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

use thiserror::Error;

/// The one hard failure of the validation surface. Everything else in
/// this crate signals "no match" or "incomplete" through absence;
/// asking to validate a number whose region was never resolved is a
/// caller contract violation and is reported instead.
#[derive(Debug, PartialEq, Error)]
pub enum MissingRuleError {
    #[error("Phone number has no region code to validate against")]
    NoRegionCode,
    #[error("No validation rule for region \"{0}\"")]
    NoRuleForRegion(String),
}

/// Classifies country-table rows rejected at load time. Rejected rows
/// are logged and skipped; they never become `CountryRecord`s.
#[derive(Debug, PartialEq, Error)]
pub enum MalformedCountryRowError {
    #[error("Region code \"{0}\" is not a two-letter lowercase ISO code")]
    BadIsoCode(String),
    #[error("Dial code \"{0}\" is not a non-empty digit string")]
    BadDialCode(String),
    #[error("Mask template for region \"{0}\" is empty")]
    EmptyMask(String),
}
