//! Input size guard
//!
//! Size is the UTF-8 encoded byte length, never the character count. The
//! boundary runs the same check before any work is done.

use crate::error::{self, Result};

/// Reject `text` if its encoded length exceeds `limit` bytes
///
/// # Errors
///
/// Returns `EvalError::TooLarge` when `text.len() > limit`.
pub fn check_text_size(text: &str, limit: usize) -> Result<()> {
    let size = text.len();
    if size > limit {
        log::debug!("rejecting {size} byte text, limit is {limit}");
        return Err(error::too_large(size, limit));
    }
    Ok(())
}
