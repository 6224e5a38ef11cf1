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

use std::collections::HashMap;

use regex::Regex;

use super::helper_constants::{
    AREA_CODE_GROUP_PATTERN, LEADING_COUNTRY_CODE_PATTERN, TRAILING_NON_DIGIT_PATTERN,
    UNCLOSED_DIGIT_GROUP_PATTERN,
};
use super::helper_types::ValidationRule;
use crate::regexp_cache::RegexCache;

/// Helper struct holding the engine's pre-compiled regular expressions
/// and the static per-region mappings.
pub(super) struct PhoneMaskRegExpsAndMappings {
    /// The trailing run of markers, whitespace and separators removed
    /// by display trimming.
    pub(super) trailing_non_digit_pattern: Regex,

    /// An opening parenthesis followed only by digits at the end of a
    /// trimmed display string; trimming re-closes such a group.
    pub(super) unclosed_digit_group_pattern: Regex,

    /// Captures the country-code digits of a leading `+<digits>` run.
    /// Only meaningful through `captures_start`.
    pub(super) leading_country_code_pattern: Regex,

    /// Captures the area-code digits of the first `(<digits>)` group.
    pub(super) area_code_group_pattern: Regex,

    /// Region code to its `[lenient, strict]` validation pair.
    pub(super) validation_rules: HashMap<&'static str, ValidationRule>,

    /// Cache for the patterns built at runtime: anchored
    /// subscriber-number patterns and the validation patterns above.
    pub(super) regexp_cache: RegexCache,
}

impl PhoneMaskRegExpsAndMappings {
    pub(super) fn new(rules: &[(&'static str, [&'static str; 2])]) -> Self {
        let mut validation_rules = HashMap::with_capacity(rules.len());
        for &(region, [lenient, strict]) in rules {
            validation_rules.insert(region, ValidationRule { lenient, strict });
        }

        Self {
            trailing_non_digit_pattern: Regex::new(TRAILING_NON_DIGIT_PATTERN).unwrap(),
            unclosed_digit_group_pattern: Regex::new(UNCLOSED_DIGIT_GROUP_PATTERN).unwrap(),
            leading_country_code_pattern: Regex::new(LEADING_COUNTRY_CODE_PATTERN).unwrap(),
            area_code_group_pattern: Regex::new(AREA_CODE_GROUP_PATTERN).unwrap(),
            validation_rules,
            regexp_cache: RegexCache::with_capacity(64),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::metadata::VALIDATION_RULES;

    use super::PhoneMaskRegExpsAndMappings;

    #[test]
    fn check_regexps_are_compiling() {
        let reg_exps = PhoneMaskRegExpsAndMappings::new(VALIDATION_RULES);
        // The compiled validation table must only carry valid patterns.
        for (region, rule) in &reg_exps.validation_rules {
            for pattern in [rule.lenient, rule.strict] {
                assert!(
                    reg_exps.regexp_cache.get_regex(pattern).is_ok(),
                    "invalid pattern for region {}: {}",
                    region,
                    pattern
                );
            }
        }
    }
}
