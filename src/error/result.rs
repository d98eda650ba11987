//! Result type alias for coordinator operations.

use super::homepage_error::HomepageError;

/// Type alias for Results using HomepageError.
///
/// # Example
///
/// ```ignore
/// use homescreen::error::HomepageResult;
///
/// fn build() -> HomepageResult<HomepageCoordinator> {
///     HomepageCoordinator::builder(sections).build()
/// }
/// ```
pub type HomepageResult<T> = Result<T, HomepageError>;
