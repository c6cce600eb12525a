//! Helpers shared by the per-domain field conversions.

use crate::error::ParsingError;

/// Converts a raw wire enum value, rejecting values outside the schema.
pub(crate) fn enumeration<E: TryFrom<i32>>(
    field: &'static str,
    value: i32,
) -> Result<E, ParsingError> {
    E::try_from(value).map_err(|_| {
        log::debug!("rejecting field '{}': unknown enum value {}", field, value);
        ParsingError::InvalidEnum { field, value }
    })
}

/// Unwraps a sub-message that the schema marks as required.
pub(crate) fn required<'a, T>(
    field: &'static str,
    value: &'a Option<T>,
) -> Result<&'a T, ParsingError> {
    value.as_ref().ok_or_else(|| {
        log::debug!("rejecting message: missing field '{}'", field);
        ParsingError::MissingField(field)
    })
}
