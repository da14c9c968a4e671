//! Platform clipboard access
//!
//! One opaque write-only call. Clipboard failures are non-fatal: callers
//! surface them as a transient notice and the session continues.

use crate::error::{Error, Result};

/// Copy `text` to the platform clipboard
pub fn copy(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().map_err(|e| Error::clipboard(e.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|e| Error::clipboard(e.to_string()))
}
