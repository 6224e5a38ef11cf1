use log::{debug, warn};

use super::errors::MissingRuleError;
use super::helper_constants::{FALLBACK_REGION, SUBSCRIBER_CAPTURE_PATTERN};
use super::helper_functions::fill_template;
use super::helper_types::{CountryRecord, CountryRow, InputState, PhoneNumber, Selection};
use super::mask_regexps_and_mappings::PhoneMaskRegExpsAndMappings;
use crate::macros::owned_from_cow_or;
use crate::mask_shape_cache::MaskShapeCache;
use crate::metadata;
use crate::regex_util::{RegexConsume, RegexFullMatch};
use crate::string_util;

/// The masked phone-number input engine.
///
/// Owns the validated country table and the compiled pattern set; all
/// operations are pure over that state, so one instance (usually the
/// global `PHONE_MASK_UTIL`) is safely shared across threads.
pub struct PhoneMaskUtil {
    /// Helper struct holding useful regular expressions and the
    /// per-region validation mappings.
    reg_exps: PhoneMaskRegExpsAndMappings,

    /// Memoized mask shapes, keyed by template string.
    shape_cache: MaskShapeCache,

    /// The validated country table, in tie-break order: for dial codes
    /// shared between countries, the earlier record wins.
    country_table: Vec<CountryRecord>,

    /// Region used when no candidate matches and the caller asks for
    /// the default fallback record.
    default_region: String,
}

impl PhoneMaskUtil {
    pub(super) fn new() -> Self {
        Self::new_for_tables(metadata::COUNTRY_ROWS, metadata::VALIDATION_RULES)
    }

    /// Builds an engine over caller-supplied tables. Malformed rows
    /// are logged and skipped; an entirely unusable table is a data
    /// corruption we cannot recover from.
    pub fn new_for_tables(
        rows: &[CountryRow],
        rules: &[(&'static str, [&'static str; 2])],
    ) -> Self {
        let mut country_table = Vec::with_capacity(rows.len());
        for row in rows {
            match CountryRecord::from_row(row) {
                Ok(record) => country_table.push(record),
                Err(err) => warn!("Skipping malformed country row: {}", err),
            }
        }
        if country_table.is_empty() {
            let err_message = "No valid rows in the country table";
            log::error!("{}", err_message);
            panic!("{}", err_message);
        }

        // The default region must always resolve to a table record, so
        // a table without the preferred fallback uses its first row.
        let default_region = if country_table
            .iter()
            .any(|record| record.iso_code == FALLBACK_REGION)
        {
            FALLBACK_REGION.to_owned()
        } else {
            let first = country_table[0].iso_code.clone();
            warn!(
                "Fallback region \"{}\" is not in the country table, defaulting to \"{}\"",
                FALLBACK_REGION, first
            );
            first
        };

        Self {
            reg_exps: PhoneMaskRegExpsAndMappings::new(rules),
            shape_cache: MaskShapeCache::with_capacity(rows.len()),
            country_table,
            default_region,
        }
    }

    /// Applies the host-supplied timezone-to-region resolver once, at
    /// construction. The resolved region only sticks when the table
    /// actually covers it; otherwise the fallback stands.
    pub fn with_default_region_resolver<F>(mut self, resolver: F, timezone_id: &str) -> Self
    where
        F: FnOnce(&str) -> Option<String>,
    {
        if let Some(region) = resolver(timezone_id) {
            if self.country_table.iter().any(|r| r.iso_code == region) {
                self.default_region = region;
            } else {
                warn!(
                    "Resolver mapped timezone {} to unsupported region \"{}\", keeping \"{}\"",
                    timezone_id, region, self.default_region
                );
            }
        }
        self
    }

    pub fn country_table(&self) -> &[CountryRecord] {
        &self.country_table
    }

    pub fn supported_regions(&self) -> Vec<&str> {
        self.country_table
            .iter()
            .map(|record| record.iso_code.as_str())
            .collect()
    }

    pub fn default_region(&self) -> &str {
        &self.default_region
    }

    pub fn country_for_region(&self, region_code: &str) -> Option<&CountryRecord> {
        self.country_table
            .iter()
            .find(|record| record.iso_code == region_code)
            .or_else(|| {
                warn!("Invalid or unknown region code provided: {}", region_code);
                None
            })
    }

    /// Finds the first candidate, in candidate order, whose dial code
    /// is a prefix of `raw_digits` and which matches the pin when one
    /// is given. Candidate order is the tie-break for shared dial
    /// codes, so callers put preferred countries first.
    pub fn country_for_digits<'a>(
        &self,
        raw_digits: &str,
        candidates: &'a [CountryRecord],
        pinned_region: Option<&str>,
    ) -> Option<&'a CountryRecord> {
        candidates.iter().find(|record| {
            raw_digits.starts_with(record.dial_code.as_str())
                && pinned_region.map_or(true, |pin| record.iso_code == pin)
        })
    }

    /// Like [`Self::country_for_digits`], falling back to the default
    /// region's record from the compiled table.
    pub fn country_for_digits_or_default<'a>(
        &'a self,
        raw_digits: &str,
        candidates: &'a [CountryRecord],
        pinned_region: Option<&str>,
    ) -> &'a CountryRecord {
        self.country_for_digits(raw_digits, candidates, pinned_region)
            .unwrap_or_else(|| {
                self.country_for_region(&self.default_region)
                    .expect("The default region is validated at construction; this indicates a library bug!")
            })
    }

    /// Formats raw input against a template. The result is always
    /// exactly as long as the template; trailing unfilled slots keep
    /// their marker. Display trimming is a separate step applied by
    /// [`Self::format_and_track`].
    pub fn format_to_mask(&self, raw_input: &str, template: &str) -> String {
        let digits = string_util::extract_digits(raw_input);
        fill_template(&digits, template).0
    }

    /// Formats, trims and recomputes the caret for one edit.
    ///
    /// `selection` holds the pre-edit caret bounds; `raw_input` is the
    /// post-edit field content. Each bound is re-derived from the
    /// digit-consuming view of the raw-input prefix up to it: the
    /// caret lands on the first slot that prefix leaves unfilled, one
    /// slot earlier when the edit was a backspace. Offsets are clamped
    /// to the trimmed display.
    pub fn format_and_track(
        &self,
        raw_input: &str,
        template: &str,
        selection: Selection,
        is_backspace: bool,
    ) -> (String, Selection) {
        let digits = string_util::extract_digits(raw_input);
        let (formatted, _) = fill_template(&digits, template);
        let display = self.trim_display(formatted);
        let display_len = display.chars().count();

        let start = self
            .track_caret(raw_input, template, selection.start, is_backspace)
            .min(display_len);
        let end = self
            .track_caret(raw_input, template, selection.end, is_backspace)
            .min(display_len)
            .max(start);

        (display, Selection { start, end })
    }

    /// Threads a widget [`InputState`] through one formatting pass.
    /// The returned state always has the backspace flag cleared: the
    /// flag describes exactly the edit that was just processed.
    pub fn apply_edit(&self, state: &InputState, template: &str) -> InputState {
        let (value, selection) = self.format_and_track(
            &state.value,
            template,
            state.selection,
            state.last_key_was_backspace,
        );
        InputState {
            value,
            selection,
            pinned_region: state.pinned_region.clone(),
            last_key_was_backspace: false,
        }
    }

    fn track_caret(
        &self,
        raw_input: &str,
        template: &str,
        offset: usize,
        is_backspace: bool,
    ) -> usize {
        let shape = self.shape_cache.get_shape(template);
        let prefix_digits = string_util::extract_digits_up_to(raw_input, offset);
        let (_, filled) = fill_template(&prefix_digits, template);
        let caret = shape.first_free_slot(filled);
        if is_backspace {
            shape.slot_before(caret)
        } else {
            caret
        }
    }

    /// Removes the trailing non-digit run a partially filled mask
    /// leaves behind, then re-closes a dangling `(digits` group so the
    /// partial number still reads well-formed.
    fn trim_display(&self, formatted: String) -> String {
        let mut trimmed = owned_from_cow_or!(
            self.reg_exps
                .trailing_non_digit_pattern
                .replace(&formatted, ""),
            formatted
        );
        if self
            .reg_exps
            .unclosed_digit_group_pattern
            .find(&trimmed)
            .is_some()
        {
            trimmed.push(')');
        }
        trimmed
    }

    /// Decomposes a formatted value into country code, area code and
    /// subscriber number. Absence of any field is not an error; it
    /// denotes an incomplete number. When no candidate owns the raw
    /// digits every field is absent, except that the region echoes the
    /// pin when one was given.
    pub fn parse(
        &self,
        formatted_value: &str,
        candidates: &[CountryRecord],
        pinned_region: Option<&str>,
    ) -> PhoneNumber {
        let raw_digits = string_util::extract_digits(formatted_value);
        let record =
            match self.country_for_digits(&raw_digits, candidates, pinned_region) {
                Some(record) => record,
                None => {
                    debug!(
                        "No candidate country owns \"{}\" (pin: {:?})",
                        raw_digits, pinned_region
                    );
                    return PhoneNumber {
                        iso_code: pinned_region.map(str::to_owned),
                        ..Default::default()
                    };
                }
            };

        let country_code_digits = self
            .reg_exps
            .leading_country_code_pattern
            .captures_start(formatted_value)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str().to_owned());
        let area_code_digits = self
            .reg_exps
            .area_code_group_pattern
            .captures(formatted_value)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str().to_owned());

        let subscriber_number = self.capture_subscriber_number(
            &raw_digits,
            country_code_digits.as_deref().unwrap_or(""),
            area_code_digits.as_deref().unwrap_or(""),
        );

        PhoneNumber {
            country_code: country_code_digits.and_then(|digits| digits.parse().ok()),
            area_code: area_code_digits.and_then(|digits| digits.parse().ok()),
            subscriber_number,
            iso_code: Some(record.iso_code.clone()),
        }
    }

    /// Matches the known country-code and area-code digits literally
    /// at the start of the raw digit string; whatever one-or-more
    /// digits follow is the subscriber number. A raw string shorter
    /// than the known prefix yields absence.
    fn capture_subscriber_number(
        &self,
        raw_digits: &str,
        country_code_digits: &str,
        area_code_digits: &str,
    ) -> Option<String> {
        let pattern = fast_cat::concat_str!(
            "^",
            country_code_digits,
            area_code_digits,
            SUBSCRIBER_CAPTURE_PATTERN
        );
        let regex = self
            .reg_exps
            .regexp_cache
            .get_regex(&pattern)
            .expect("Subscriber pattern is built from digit literals; this indicates a library bug!");
        regex
            .captures(raw_digits)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str().to_owned())
    }

    /// Runs the region's lenient or strict pattern against the whole
    /// area-code + subscriber digit string. Prefix matches do not
    /// count: a partial digit sequence is still invalid.
    pub fn is_valid(
        &self,
        phone_number: &PhoneNumber,
        strict: bool,
    ) -> Result<bool, MissingRuleError> {
        let region = phone_number
            .iso_code
            .as_deref()
            .ok_or(MissingRuleError::NoRegionCode)?;
        let rule = self
            .reg_exps
            .validation_rules
            .get(region)
            .ok_or_else(|| MissingRuleError::NoRuleForRegion(region.to_owned()))?;
        let regex = self
            .reg_exps
            .regexp_cache
            .get_regex(rule.pattern_for(strict))
            .expect("A valid regex is expected in the validation table; this indicates a library bug!");
        Ok(regex.full_match(&phone_number.national_digits()))
    }
}
