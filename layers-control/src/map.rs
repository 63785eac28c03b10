//! The map handle seam towards the host map library.

/// Access to the live host map instance.
///
/// Implemented by the host binding. The map may come up asynchronously:
/// [`map`](MapHandle::map) returns `None` until the host has finished
/// initializing, and the directive treats that as "not yet ready" rather
/// than an error.
pub trait MapHandle {
    /// The host library's map type.
    type Map;

    /// Triggers host map creation if it has not been started yet.
    ///
    /// Must be idempotent; the directive may call it more than once.
    fn init(&mut self);

    /// The live map instance, or `None` before initialization completes.
    fn map(&self) -> Option<&Self::Map>;
}
