// Domain layer: the lookup port and the plain values passed across it.

pub mod model;
pub mod ports;
