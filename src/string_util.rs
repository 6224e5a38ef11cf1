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

/// Extracts the decimal digits of `raw`, in order, as an ASCII digit
/// string. Non-ASCII decimal forms (full-width digits and friends) are
/// normalized first so keyboard layout quirks do not break masking.
pub fn extract_digits(raw: &str) -> String {
    let normalized = dec_from_char::normalize_decimals(raw);
    normalized.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Same as [`extract_digits`] but only looks at the first `char_offset`
/// characters of `raw`. Normalization is char-for-char, so the offset
/// means the same thing before and after it.
pub fn extract_digits_up_to(raw: &str, char_offset: usize) -> String {
    let normalized = dec_from_char::normalize_decimals(raw);
    normalized
        .chars()
        .take(char_offset)
        .filter(|c| c.is_ascii_digit())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{extract_digits, extract_digits_up_to};

    #[test]
    fn test_extract_digits() {
        assert_eq!(extract_digits("+1 (202) 555-1234"), "12025551234");
        assert_eq!(extract_digits("no digits here"), "");
        // Full-width digits are normalized, not dropped.
        assert_eq!(extract_digits("＋１２３"), "123");
    }

    #[test]
    fn test_extract_digits_up_to() {
        assert_eq!(extract_digits_up_to("+1 (202) 555-1234", 8), "1202");
        assert_eq!(extract_digits_up_to("+1 (202) 555-1234", 0), "");
        // Offsets past the end behave like the full string.
        assert_eq!(extract_digits_up_to("+1 (2", 100), "12");
    }
}
