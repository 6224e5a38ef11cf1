//! Compiled-in reference tables: the ordered country table and the
//! per-region validation rules.
//!
//! Row order is significant: it is the tie-break for dial codes shared
//! between countries (the NANP block shares `1`, Russia and Kazakhstan
//! share `7`), so the preferred country of each block comes first.
//!
//! Mask templates use `.` for a digit slot; every other character is a
//! literal. The leading literal digits of a template are its country's
//! dial code, which is what lets typed dial codes align with the mask.

use crate::phonemaskutil::helper_types::CountryRow;

pub static COUNTRY_ROWS: &[CountryRow] = &[
    ("us", "United States", Some("\u{1F1FA}\u{1F1F8}"), "1", "+1 (...) ...-...."),
    ("ca", "Canada", Some("\u{1F1E8}\u{1F1E6}"), "1", "+1 (...) ...-...."),
    ("ru", "Russia", Some("\u{1F1F7}\u{1F1FA}"), "7", "+7 (...) ...-..-.."),
    ("kz", "Kazakhstan", Some("\u{1F1F0}\u{1F1FF}"), "7", "+7 (...) ...-..-.."),
    ("eg", "Egypt", Some("\u{1F1EA}\u{1F1EC}"), "20", "+20 (...) ...-...."),
    ("za", "South Africa", Some("\u{1F1FF}\u{1F1E6}"), "27", "+27 (..) ...-...."),
    ("gr", "Greece", Some("\u{1F1EC}\u{1F1F7}"), "30", "+30 (...) ...-...."),
    ("nl", "Netherlands", Some("\u{1F1F3}\u{1F1F1}"), "31", "+31 (..) ...-...."),
    ("be", "Belgium", Some("\u{1F1E7}\u{1F1EA}"), "32", "+32 (...) ...-..."),
    ("fr", "France", Some("\u{1F1EB}\u{1F1F7}"), "33", "+33 . .. .. .. .."),
    ("es", "Spain", Some("\u{1F1EA}\u{1F1F8}"), "34", "+34 (...) ...-..."),
    ("pt", "Portugal", Some("\u{1F1F5}\u{1F1F9}"), "351", "+351 .. ... ...."),
    ("ie", "Ireland", Some("\u{1F1EE}\u{1F1EA}"), "353", "+353 (...) ...-..."),
    ("by", "Belarus", Some("\u{1F1E7}\u{1F1FE}"), "375", "+375 (..) ...-..-.."),
    ("ua", "Ukraine", Some("\u{1F1FA}\u{1F1E6}"), "380", "+380 (..) ...-..-.."),
    ("it", "Italy", Some("\u{1F1EE}\u{1F1F9}"), "39", "+39 (...) ....-..."),
    ("ch", "Switzerland", Some("\u{1F1E8}\u{1F1ED}"), "41", "+41 .. ... .. .."),
    ("cz", "Czech Republic", Some("\u{1F1E8}\u{1F1FF}"), "420", "+420 (...) ...-..."),
    ("at", "Austria", Some("\u{1F1E6}\u{1F1F9}"), "43", "+43 (...) ...-...."),
    ("gb", "United Kingdom", Some("\u{1F1EC}\u{1F1E7}"), "44", "+44 .... ......"),
    ("pl", "Poland", Some("\u{1F1F5}\u{1F1F1}"), "48", "+48 ...-...-..."),
    ("de", "Germany", Some("\u{1F1E9}\u{1F1EA}"), "49", "+49 ... ........"),
    ("mx", "Mexico", Some("\u{1F1F2}\u{1F1FD}"), "52", "+52 (...) ...-...."),
    ("ar", "Argentina", Some("\u{1F1E6}\u{1F1F7}"), "54", "+54 (...) ...-...."),
    ("br", "Brazil", Some("\u{1F1E7}\u{1F1F7}"), "55", "+55 (..) .....-...."),
    ("au", "Australia", Some("\u{1F1E6}\u{1F1FA}"), "61", "+61 . .... ...."),
    ("jp", "Japan", Some("\u{1F1EF}\u{1F1F5}"), "81", "+81 (..) ....-...."),
    ("kr", "South Korea", Some("\u{1F1F0}\u{1F1F7}"), "82", "+82 (..) ....-...."),
    ("cn", "China", Some("\u{1F1E8}\u{1F1F3}"), "86", "+86 (...) ....-...."),
    ("tr", "Turkey", Some("\u{1F1F9}\u{1F1F7}"), "90", "+90 (...) ...-...."),
    ("in", "India", Some("\u{1F1EE}\u{1F1F3}"), "91", "+91 (....) ...-..."),
    ("se", "Sweden", Some("\u{1F1F8}\u{1F1EA}"), "46", "+46 (..) ...-...."),
    ("no", "Norway", Some("\u{1F1F3}\u{1F1F4}"), "47", "+47 (...) ..-..."),
    ("il", "Israel", Some("\u{1F1EE}\u{1F1F1}"), "972", "+972 ..-...-...."),
    ("ae", "United Arab Emirates", Some("\u{1F1E6}\u{1F1EA}"), "971", "+971 (..) ...-...."),
];

/// Per-region `[lenient, strict]` validation patterns, matched against
/// the concatenated area-code and subscriber digits. Lenient admits the
/// digit-count range seen in partially-regulated entry, strict pins the
/// exact national significant length.
pub static VALIDATION_RULES: &[(&str, [&str; 2])] = &[
    ("us", [r"\d{7,10}", r"\d{10}"]),
    ("ca", [r"\d{7,10}", r"\d{10}"]),
    ("ru", [r"\d{7,10}", r"\d{10}"]),
    ("kz", [r"\d{7,10}", r"\d{10}"]),
    ("by", [r"\d{7,9}", r"\d{9}"]),
    ("ua", [r"\d{7,9}", r"\d{9}"]),
    ("gb", [r"\d{9,10}", r"\d{10}"]),
    ("de", [r"\d{6,11}", r"\d{10,11}"]),
    ("fr", [r"\d{8,9}", r"\d{9}"]),
    ("it", [r"\d{8,10}", r"\d{9,10}"]),
    ("es", [r"\d{8,9}", r"\d{9}"]),
    ("pl", [r"\d{8,9}", r"\d{9}"]),
    ("br", [r"\d{10,11}", r"\d{11}"]),
    ("jp", [r"\d{9,10}", r"\d{10}"]),
    ("cn", [r"\d{10,11}", r"\d{11}"]),
    ("in", [r"\d{9,10}", r"\d{10}"]),
    ("au", [r"\d{8,9}", r"\d{9}"]),
];
