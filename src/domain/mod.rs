// Domain layer: match/strategy models and the finder port.

pub mod model;
pub mod ports;
