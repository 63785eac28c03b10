//! Declarative layers control synchronization for interactive maps.
//!
//! This crate keeps a host map library's layers control widget (the UI
//! element that lets the user pick a base layer and toggle overlays) in
//! sync with a declarative configuration: two mappings of display name to
//! layer handle, one for base layers and one for overlays.
//!
//! The configuration is treated as immutable. Supplying a new instance
//! through [`LayersControlDirective::set_config`] is the change signal; a
//! keyed differ per mapping then determines which layers were added,
//! removed or replaced since the last applied state, and only those are
//! pushed to the live widget. The widget is never torn down and rebuilt.
//!
//! The host library stays behind two narrow seams: [`MapHandle`] gives
//! access to the live map (possibly not ready yet) and [`LayersControl`] is
//! the capability interface over the widget itself. Layer handles are fully
//! opaque; the crate only clones them and compares them by identity through
//! [`LayerHandle`], which is implemented for `Arc`, `Rc` and references out
//! of the box.
//!
//! All of this is synchronous and single-threaded, meant to be driven from
//! whatever event dispatch the host UI provides.

pub mod config;
pub mod control;
pub mod diff;
pub mod error;
pub mod layer;
pub mod map;

mod directive;

pub use config::LayersControlConfig;
pub use control::{ControlLayersWrapper, LayersControl};
pub use diff::{ChangeKind, ChangeRecord, Changeset, KeyedDiffer, KeyedMap};
pub use directive::LayersControlDirective;
pub use error::LayersControlError;
pub use layer::{LayerHandle, LayerMap};
pub use map::MapHandle;
