//! Error type of the crate.

use thiserror::Error;

/// Errors that can occur while setting up the layers control.
///
/// Synchronization itself does not fail: early passes are skipped until the
/// host map and widget exist, and widget mutations are assumed non-failing.
#[derive(Debug, Error)]
pub enum LayersControlError {
    /// The host map was not available when the widget had to be created.
    #[error("host map is not ready")]
    MapNotReady,

    /// The host library failed to create the layers control widget.
    #[error("failed to create layers control widget: {0}")]
    ControlCreation(String),
}
