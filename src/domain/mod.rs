// Domain layer: core models and ports (interfaces) the adapters plug into.

pub mod model;
pub mod ports;
