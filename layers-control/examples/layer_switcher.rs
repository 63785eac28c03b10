//! Drive a layers control over an in-memory host and print what it does.
//! Run with: cargo run --example layer_switcher

use std::rc::Rc;

use layers_control::{
    LayerMap, LayersControl, LayersControlConfig, LayersControlDirective, LayersControlError,
    MapHandle,
};

type Layer = Rc<&'static str>;

struct ConsoleMap;

struct ConsoleMapHandle {
    map: Option<ConsoleMap>,
}

impl MapHandle for ConsoleMapHandle {
    type Map = ConsoleMap;

    fn init(&mut self) {
        if self.map.is_none() {
            println!("host: creating map");
            self.map = Some(ConsoleMap);
        }
    }

    fn map(&self) -> Option<&ConsoleMap> {
        self.map.as_ref()
    }
}

struct ConsoleControl;

impl LayersControl for ConsoleControl {
    type Layer = Layer;
    type Map = ConsoleMap;
    type Options = String;

    fn create(
        _map: &Self::Map,
        options: Option<&Self::Options>,
    ) -> Result<Self, LayersControlError> {
        println!("host: creating layers control (options: {options:?})");
        Ok(ConsoleControl)
    }

    fn add_base_layer(&mut self, layer: Self::Layer, name: &str) {
        println!("widget: + base layer {name:?} -> {layer}");
    }

    fn add_overlay(&mut self, layer: Self::Layer, name: &str) {
        println!("widget: + overlay {name:?} -> {layer}");
    }

    fn remove_layer(&mut self, layer: &Self::Layer) {
        println!("widget: - layer {layer}");
    }
}

fn config(base: &[(&str, &Layer)], overlays: &[(&str, &Layer)]) -> LayersControlConfig<Layer> {
    let collect = |entries: &[(&str, &Layer)]| -> LayerMap<Layer> {
        entries
            .iter()
            .map(|(name, layer)| (name.to_string(), Rc::clone(layer)))
            .collect()
    };

    LayersControlConfig::from_parts(Some(collect(base)), Some(collect(overlays)))
}

fn main() {
    env_logger::init();

    let osm: Layer = Rc::new("osm tiles");
    let satellite: Layer = Rc::new("satellite tiles");
    let satellite_hd: Layer = Rc::new("satellite hd tiles");
    let cities: Layer = Rc::new("city labels");

    let mut directive: LayersControlDirective<ConsoleMapHandle, ConsoleControl> =
        LayersControlDirective::new(ConsoleMapHandle { map: None });
    directive.set_options("collapsed".to_string());

    directive.set_config(Some(config(
        &[("OpenStreetMap", &osm), ("Satellite", &satellite)],
        &[("Cities", &cities)],
    )));

    directive.on_init().expect("failed to initialize");

    // Replace the satellite imagery and drop the overlay. Only the
    // difference reaches the widget.
    directive.set_config(Some(config(
        &[("OpenStreetMap", &osm), ("Satellite", &satellite_hd)],
        &[],
    )));
}
