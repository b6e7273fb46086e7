// crates/shared-kernel/src/application/validate.rs

use crate::errors::Result;

/// Implemented by every inbound request type. Checked by [`crate::application::guard`]
/// before any handler work starts.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
