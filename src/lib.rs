mod metadata;
mod phonemaskutil;
mod regexp_cache;
mod mask_shape_cache;
pub mod i18n;
pub(crate) mod regex_util;
pub(crate) mod string_util;

/// Small macros for boilerplate places in the code where a name
/// describes what is happening more clearly than a few lines of code.
mod macros;


pub use phonemaskutil::{
    errors::{MalformedCountryRowError, MissingRuleError},
    helper_types::{CountryRecord, CountryRow, InputState, PhoneNumber, Selection, ValidationRule},
    phonemaskutil::PhoneMaskUtil,
    PHONE_MASK_UTIL,
};
