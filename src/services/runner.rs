use crate::error::BuildError;
use crate::services::build::BuildSystem;

/// Drops any cached result for the check, then rebuilds and runs it.
/// The output is returned untouched.
pub fn run_check(
    build: &mut dyn BuildSystem,
    check_id: &str,
    location: &str,
) -> Result<String, BuildError> {
    build.invalidate(check_id, location);
    build.run_check(check_id, location)
}
