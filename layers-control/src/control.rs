//! The layers control widget seam and the changeset application logic.

use log::{debug, trace};

use crate::diff::{ChangeKind, ChangeRecord, Changeset};
use crate::error::LayersControlError;
use crate::layer::LayerHandle;

/// The narrow capability interface over the host's layers control widget.
///
/// Implemented by the host binding. The widget registers layers under
/// display names, in one of two roles: a base layer (widget shows one at a
/// time) or an overlay (freely toggleable). Removal of a layer that is not
/// currently registered is left to the widget's own behavior; the
/// synchronization logic never produces such removals on its own.
pub trait LayersControl: Sized {
    /// The opaque layer handle type of the host library.
    type Layer: LayerHandle;
    /// The host library's map type the widget is bound to.
    type Map;
    /// Host-specific widget construction options, passed through opaquely.
    type Options;

    /// Creates the live widget and attaches it to the given map.
    fn create(map: &Self::Map, options: Option<&Self::Options>)
        -> Result<Self, LayersControlError>;

    /// Registers `layer` as a base layer under the given display name.
    fn add_base_layer(&mut self, layer: Self::Layer, name: &str);

    /// Registers `layer` as an overlay under the given display name.
    fn add_overlay(&mut self, layer: Self::Layer, name: &str);

    /// Removes the layer from the widget, whatever its role.
    fn remove_layer(&mut self, layer: &Self::Layer);
}

enum LayerRole {
    Base,
    Overlay,
}

/// Owner of the live layers control widget.
///
/// Holds the widget from creation on and applies changesets to it. Before
/// [`init`](ControlLayersWrapper::init) has been called, applying a
/// changeset is a silent no-op so that early synchronization passes can be
/// skipped without special casing by the caller.
pub struct ControlLayersWrapper<C: LayersControl> {
    control: Option<C>,
}

impl<C: LayersControl> Default for ControlLayersWrapper<C> {
    fn default() -> Self {
        Self { control: None }
    }
}

impl<C: LayersControl> ControlLayersWrapper<C> {
    /// Creates a wrapper with no live widget yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the live widget bound to `map`, once.
    ///
    /// Subsequent calls leave the existing widget in place.
    pub fn init(
        &mut self,
        map: &C::Map,
        options: Option<&C::Options>,
    ) -> Result<&mut Self, LayersControlError> {
        if self.control.is_none() {
            self.control = Some(C::create(map, options)?);
        } else {
            debug!("Layers control widget already exists, keeping it");
        }

        Ok(self)
    }

    /// The live widget, if it has been created.
    pub fn control(&self) -> Option<&C> {
        self.control.as_ref()
    }

    /// True once the live widget has been created.
    pub fn is_initialized(&self) -> bool {
        self.control.is_some()
    }

    /// Applies a base layers changeset to the widget.
    pub fn apply_base_layer_changes(&mut self, changes: &Changeset<String, C::Layer>) {
        match self.control.as_mut() {
            Some(control) => apply_changes(control, changes, LayerRole::Base),
            None => debug!("Layers control widget does not exist, skipping base layer changes"),
        }
    }

    /// Applies an overlays changeset to the widget.
    pub fn apply_overlay_changes(&mut self, changes: &Changeset<String, C::Layer>) {
        match self.control.as_mut() {
            Some(control) => apply_changes(control, changes, LayerRole::Overlay),
            None => debug!("Layers control widget does not exist, skipping overlay changes"),
        }
    }
}

fn apply_changes<C: LayersControl>(
    control: &mut C,
    changes: &Changeset<String, C::Layer>,
    role: LayerRole,
) {
    for record in changes {
        match record.kind {
            ChangeKind::Added => {
                trace!("Adding layer {}", record.key);
                add_current(control, record, &role);
            }
            ChangeKind::Removed => {
                trace!("Removing layer {}", record.key);
                if let Some(previous) = &record.previous {
                    control.remove_layer(previous);
                }
            }
            // The widget has no replace primitive, so a changed layer is
            // removed and re-added under the same name.
            ChangeKind::Changed => {
                trace!("Replacing layer {}", record.key);
                if let Some(previous) = &record.previous {
                    control.remove_layer(previous);
                }
                add_current(control, record, &role);
            }
        }
    }
}

fn add_current<C: LayersControl>(
    control: &mut C,
    record: &ChangeRecord<String, C::Layer>,
    role: &LayerRole,
) {
    let Some(current) = &record.current else {
        return;
    };

    match role {
        LayerRole::Base => control.add_base_layer(current.clone(), &record.key),
        LayerRole::Overlay => control.add_overlay(current.clone(), &record.key),
    }
}
