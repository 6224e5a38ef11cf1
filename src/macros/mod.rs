// std::borrow::Cow
// std::option::Option

/// Extracts the owned value from a cow, falling back to the given
/// default when the cow is borrowed.
///
/// Useful with functions returning `Cow<'_, T>` where `Cow::Borrowed`
/// marks that the value was not modified, so the original owned value
/// can be reused instead of copied.
macro_rules! owned_from_cow_or {
    ($getcow:expr, $default:expr) => {{
        if let std::borrow::Cow::Owned(s) = $getcow {
            s
        } else {
            $default
        }
    }};
}

pub(crate) use owned_from_cow_or;
