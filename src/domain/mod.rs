// Domain layer: solve/session models and the host formatter port.

pub mod model;
pub mod ports;
