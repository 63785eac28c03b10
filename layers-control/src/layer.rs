//! Opaque layer handle contract.
//!
//! The crate never looks inside a layer. A layer is whatever the host map
//! library hands out; all we do is clone handles, compare them by identity
//! and pass them back to the host's layers control widget.

use std::rc::Rc;
use std::sync::Arc;

/// A map of display name to layer handle.
pub type LayerMap<L> = std::collections::HashMap<String, L, ahash::RandomState>;

/// An opaque handle to a layer owned by the host map library.
///
/// Identity, not equality: `same_handle` must report whether two handles
/// refer to the same live layer object. Replacing a layer under an existing
/// name is detected through this check, so value-equal but distinct layer
/// instances must compare as different.
pub trait LayerHandle: Clone {
    /// Returns true if both handles refer to the same live layer.
    fn same_handle(&self, other: &Self) -> bool;
}

impl<T: ?Sized> LayerHandle for Arc<T> {
    fn same_handle(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> LayerHandle for Rc<T> {
    fn same_handle(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> LayerHandle for &T {
    fn same_handle(&self, other: &Self) -> bool {
        std::ptr::eq(*self, *other)
    }
}
