//! The synchronization orchestrator.

use log::debug;

use crate::config::LayersControlConfig;
use crate::control::{ControlLayersWrapper, LayersControl};
use crate::diff::KeyedDiffer;
use crate::error::LayersControlError;
use crate::map::MapHandle;

/// Keeps the host's layers control widget in sync with a declarative
/// configuration.
///
/// The configuration is treated as immutable: changes are only picked up
/// when a new instance is supplied through
/// [`set_config`](LayersControlDirective::set_config). On every replacement
/// a differ per mapping determines what changed, and only those layers are
/// added to or removed from the widget; the widget is never rebuilt.
///
/// A directive goes through two kinds of triggers, both synchronous:
/// [`on_init`](LayersControlDirective::on_init) once when the host mounts
/// it, and [`set_config`](LayersControlDirective::set_config) on every
/// configuration replacement. Configuration supplied before `on_init` is
/// stored but not applied; the initial synchronization pass inside
/// `on_init` then brings the fresh widget up to the cumulative state.
pub struct LayersControlDirective<M, C>
where
    M: MapHandle,
    C: LayersControl<Map = M::Map>,
{
    map_handle: M,
    control_layers: ControlLayersWrapper<C>,
    options: Option<C::Options>,
    config: LayersControlConfig<C::Layer>,
    base_layers_differ: KeyedDiffer<String, C::Layer>,
    overlays_differ: KeyedDiffer<String, C::Layer>,
}

impl<M, C> LayersControlDirective<M, C>
where
    M: MapHandle,
    C: LayersControl<Map = M::Map>,
{
    /// Creates a directive over the given map handle with an empty
    /// configuration.
    pub fn new(map_handle: M) -> Self {
        Self {
            map_handle,
            control_layers: ControlLayersWrapper::new(),
            options: None,
            config: LayersControlConfig::default(),
            base_layers_differ: KeyedDiffer::new(),
            overlays_differ: KeyedDiffer::new(),
        }
    }

    /// Sets the widget construction options passed through to
    /// [`LayersControl::create`].
    ///
    /// Only has an effect if set before [`on_init`](Self::on_init).
    pub fn set_options(&mut self, options: C::Options) {
        self.options = Some(options);
    }

    /// The currently stored, normalized configuration.
    pub fn config(&self) -> &LayersControlConfig<C::Layer> {
        &self.config
    }

    /// The map handle the directive was created over.
    pub fn map_handle(&self) -> &M {
        &self.map_handle
    }

    /// The live widget, once created.
    pub fn control(&self) -> Option<&C> {
        self.control_layers.control()
    }

    /// Initialization trigger, fired once by the host.
    ///
    /// Ensures the host map exists, creates the layers control widget bound
    /// to it, and runs the initial synchronization pass. Returns
    /// [`LayersControlError::MapNotReady`] if the map is still unavailable
    /// after [`MapHandle::init`]; the host may invoke `on_init` again once
    /// the map has come up.
    pub fn on_init(&mut self) -> Result<(), LayersControlError> {
        self.map_handle.init();

        let map = self.map_handle.map().ok_or(LayersControlError::MapNotReady)?;
        self.control_layers.init(map, self.options.as_ref())?;

        self.update_layers();

        Ok(())
    }

    /// Configuration replacement trigger.
    ///
    /// Normalizes the new configuration (`None` becomes an empty one),
    /// stores it and runs a synchronization pass. Absence is not an error.
    pub fn set_config(&mut self, config: Option<LayersControlConfig<C::Layer>>) {
        self.config = config.unwrap_or_default();
        self.update_layers();
    }

    /// Runs a synchronization pass against the stored configuration.
    ///
    /// Skipped silently while the map or the widget does not exist yet; the
    /// differs are not advanced in that case, so the first pass after the
    /// widget comes up diffs against the last state actually applied to it.
    pub fn update_layers(&mut self) {
        if self.map_handle.map().is_none() || !self.control_layers.is_initialized() {
            debug!("Map or layers control not ready, skipping layers sync");
            return;
        }

        let base_changes = self.base_layers_differ.diff(&self.config.base_layers);
        self.control_layers.apply_base_layer_changes(&base_changes);

        let overlay_changes = self.overlays_differ.diff(&self.config.overlays);
        self.control_layers.apply_overlay_changes(&overlay_changes);
    }
}
