// Domain layer: the hunt's value types and the finder port.

pub mod model;
pub mod ports;
