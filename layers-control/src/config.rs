//! Declarative configuration for the layers control.

use crate::layer::LayerMap;

/// The declarative description of what the layers control should display.
///
/// Two independent mappings of display name to layer handle: base layers
/// (mutually exclusive in the host widget) and overlays (freely toggleable).
/// The same handle may appear in both mappings; no deduplication is done
/// across them.
///
/// The configuration is treated as immutable. To change the displayed
/// layers, build a new instance and hand it to
/// [`LayersControlDirective::set_config`](crate::LayersControlDirective::set_config).
#[derive(Debug, Clone)]
pub struct LayersControlConfig<L> {
    /// Base layers by display name.
    pub base_layers: LayerMap<L>,
    /// Overlays by display name.
    pub overlays: LayerMap<L>,
}

impl<L> Default for LayersControlConfig<L> {
    fn default() -> Self {
        Self {
            base_layers: LayerMap::default(),
            overlays: LayerMap::default(),
        }
    }
}

impl<L> LayersControlConfig<L> {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a configuration from optional parts, substituting an empty
    /// mapping for every absent one.
    pub fn from_parts(base_layers: Option<LayerMap<L>>, overlays: Option<LayerMap<L>>) -> Self {
        Self {
            base_layers: base_layers.unwrap_or_default(),
            overlays: overlays.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn absent_parts_become_empty_mappings() {
        let config: LayersControlConfig<Arc<()>> = LayersControlConfig::from_parts(None, None);

        assert!(config.base_layers.is_empty());
        assert!(config.overlays.is_empty());
    }

    #[test]
    fn present_parts_are_kept() {
        let mut overlays = LayerMap::default();
        overlays.insert("cities".to_string(), Arc::new(()));

        let config = LayersControlConfig::from_parts(None, Some(overlays));

        assert!(config.base_layers.is_empty());
        assert_eq!(config.overlays.len(), 1);
    }
}
