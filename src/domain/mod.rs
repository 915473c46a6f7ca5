// Domain layer: benchmark models and ports. No dependencies beyond std/serde/chrono.

pub mod model;
pub mod ports;
