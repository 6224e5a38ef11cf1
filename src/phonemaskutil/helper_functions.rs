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

use super::helper_constants::SLOT_MARKER;
use super::helper_types::MaskShape;

/// Consumes a digit queue against a mask template.
///
/// Slot markers take the next queued digit, or stay as the marker when
/// the queue is exhausted. A literal that is itself a digit consumes an
/// equal queued front digit without changing the output; this is what
/// aligns a typed dial code with the dial-code digits embedded in the
/// template, while input typed without the dial code flows past them
/// untouched. Any other literal is emitted unchanged.
///
/// Returns the filled template (always exactly as long as the
/// template) and the number of slots that consumed a digit.
pub fn fill_template(digits: &str, template: &str) -> (String, usize) {
    let mut queue = digits.chars().peekable();
    let mut formatted = String::with_capacity(template.len());
    let mut filled = 0usize;

    for template_char in template.chars() {
        if template_char == SLOT_MARKER {
            match queue.next() {
                Some(digit) => {
                    formatted.push(digit);
                    filled += 1;
                }
                None => formatted.push(template_char),
            }
        } else {
            if template_char.is_ascii_digit() && queue.peek() == Some(&template_char) {
                queue.next();
            }
            formatted.push(template_char);
        }
    }
    (formatted, filled)
}

/// Derives the slot-offset list and the prev-slot table for a
/// template. See [`MaskShape`] for the table layout.
pub fn build_mask_shape(template: &str) -> MaskShape {
    let mut slot_offsets = Vec::new();
    let mut char_len = 0usize;
    for (offset, template_char) in template.chars().enumerate() {
        if template_char == SLOT_MARKER {
            slot_offsets.push(offset);
        }
        char_len = offset + 1;
    }

    let first_slot = slot_offsets.first().copied().unwrap_or(0);
    let mut prev_slot = Vec::with_capacity(char_len + 1);
    let mut upcoming = slot_offsets.iter().peekable();
    let mut nearest = first_slot;
    for offset in 0..=char_len {
        while let Some(&&slot) = upcoming.peek() {
            if slot > offset {
                break;
            }
            nearest = slot;
            upcoming.next();
        }
        prev_slot.push(nearest);
    }

    MaskShape {
        slot_offsets,
        prev_slot,
    }
}

#[cfg(test)]
mod tests {
    use super::{build_mask_shape, fill_template};

    const US_TEMPLATE: &str = "+1 (...) ...-....";

    #[test]
    fn fill_template_keeps_template_length() {
        for digits in ["", "1", "1202", "12025551234", "120255512349999"] {
            let (formatted, _) = fill_template(digits, US_TEMPLATE);
            assert_eq!(formatted.chars().count(), US_TEMPLATE.chars().count());
        }
    }

    #[test]
    fn fill_template_aligns_typed_dial_code_with_literal() {
        let (formatted, filled) = fill_template("12025551234", US_TEMPLATE);
        assert_eq!(formatted, "+1 (202) 555-1234");
        assert_eq!(filled, 10);
    }

    #[test]
    fn fill_template_without_dial_code_skips_digit_literal() {
        let (formatted, filled) = fill_template("2025551234", US_TEMPLATE);
        assert_eq!(formatted, "+1 (202) 555-1234");
        assert_eq!(filled, 10);
    }

    #[test]
    fn fill_template_leaves_unfilled_slots_as_markers() {
        let (formatted, filled) = fill_template("1202", US_TEMPLATE);
        assert_eq!(formatted, "+1 (202) ...-....");
        assert_eq!(filled, 3);
    }

    #[test]
    fn fill_template_is_idempotent_over_its_digit_content() {
        let (first_pass, _) = fill_template("12025551234", US_TEMPLATE);
        let digits: String = first_pass.chars().filter(|c| c.is_ascii_digit()).collect();
        let (second_pass, _) = fill_template(&digits, US_TEMPLATE);
        assert_eq!(first_pass, second_pass);
    }

    #[test]
    fn build_mask_shape_us_template() {
        let shape = build_mask_shape(US_TEMPLATE);
        assert_eq!(shape.slot_offsets, vec![4, 5, 6, 9, 10, 11, 13, 14, 15, 16]);
        assert_eq!(shape.prev_slot.len(), US_TEMPLATE.len() + 1);
        // Before the first slot the table falls back to the first slot.
        assert_eq!(shape.prev_slot[0], 4);
        assert_eq!(shape.prev_slot[3], 4);
        assert_eq!(shape.prev_slot[4], 4);
        assert_eq!(shape.prev_slot[8], 6);
        assert_eq!(shape.prev_slot[12], 11);
        assert_eq!(shape.prev_slot[17], 16);
    }

    #[test]
    fn build_mask_shape_without_slots_is_degenerate_but_total() {
        let shape = build_mask_shape("+--");
        assert!(shape.slot_offsets.is_empty());
        assert_eq!(shape.first_free_slot(0), 0);
        assert_eq!(shape.slot_before(2), 0);
    }

    #[test]
    fn first_free_slot_and_slot_before() {
        let shape = build_mask_shape(US_TEMPLATE);
        assert_eq!(shape.first_free_slot(0), 4);
        assert_eq!(shape.first_free_slot(3), 9);
        assert_eq!(shape.first_free_slot(7), 14);
        // All ten slots consumed: fall back to the last prev-slot entry.
        assert_eq!(shape.first_free_slot(10), 16);
        assert_eq!(shape.first_free_slot(99), 16);

        assert_eq!(shape.slot_before(14), 13);
        // Stepping over the '-' literal between slot groups.
        assert_eq!(shape.slot_before(13), 11);
        assert_eq!(shape.slot_before(4), 4);
        assert_eq!(shape.slot_before(0), 4);
    }
}
