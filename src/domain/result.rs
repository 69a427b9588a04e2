//! Result type alias for Caravan

use super::errors::CaravanError;

/// Result type alias for Caravan operations
///
/// This is a convenience type alias that uses `CaravanError` as the error
/// type. Use this throughout the codebase for fallible operations.
pub type Result<T> = std::result::Result<T, CaravanError>;
