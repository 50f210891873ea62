mod name_validator;
mod safe_display;

pub use name_validator::InvalidNameError;
pub use name_validator::is_valid_name;
pub use name_validator::validate_name;
pub use safe_display::SafeDisplay;
pub use safe_display::print_safe;

/// Returns `Ok(())` if `condition` holds, or the error built by `err`
/// otherwise.
pub(crate) fn invariant<E>(
    condition: bool,
    err: impl FnOnce() -> E,
) -> Result<(), E> {
    if condition {
        Ok(())
    } else {
        Err(err())
    }
}

#[cfg(test)]
mod tests;
