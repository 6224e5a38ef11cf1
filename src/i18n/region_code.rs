/// Region-code constants for the regions the compiled country table
/// covers. Codes are lowercase two-letter ISO 3166-1 identifiers, the
/// key form used throughout the country and validation tables.
pub struct RegionCode {}

impl RegionCode {
    /// Returns a region code string representing the "unknown" region.
    pub fn get_unknown() -> &'static str {
        return Self::zz();
    }

    pub fn zz() -> &'static str {
        return "zz";
    }

    pub fn us() -> &'static str {
        return "us";
    }

    pub fn ca() -> &'static str {
        return "ca";
    }

    pub fn ru() -> &'static str {
        return "ru";
    }

    pub fn kz() -> &'static str {
        return "kz";
    }

    pub fn gb() -> &'static str {
        return "gb";
    }

    pub fn de() -> &'static str {
        return "de";
    }

    pub fn fr() -> &'static str {
        return "fr";
    }

    pub fn ua() -> &'static str {
        return "ua";
    }

    pub fn jp() -> &'static str {
        return "jp";
    }

    pub fn br() -> &'static str {
        return "br";
    }
}
