use crate::server::error::{internal::InternalError, AppError};

/// Parses a stored Discord snowflake back into `u64`.
///
/// Ids are persisted as text, so a failure here means the row was written by
/// something other than this application.
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed id
/// - `Err(AppError::InternalErr(ParseStringId))` - Value is not numeric
pub fn parse_u64_from_string(value: &str) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId {
            value: value.to_string(),
            source: e,
        })?;

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_snowflakes() {
        assert_eq!(
            parse_u64_from_string("802105175720460318").unwrap(),
            802105175720460318
        );
    }

    #[test]
    fn rejects_non_numeric_ids() {
        assert!(matches!(
            parse_u64_from_string("abc"),
            Err(AppError::InternalErr(InternalError::ParseStringId { .. }))
        ));
    }
}
