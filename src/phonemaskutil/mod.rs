pub(crate) mod helper_constants;
pub(crate) mod helper_functions;
pub mod errors;
pub mod helper_types;
pub mod phonemaskutil;
mod mask_regexps_and_mappings;

use std::sync::LazyLock;

use crate::phonemaskutil::phonemaskutil::PhoneMaskUtil;

pub static PHONE_MASK_UTIL: LazyLock<PhoneMaskUtil> = LazyLock::new(|| {
    PhoneMaskUtil::new()
});
