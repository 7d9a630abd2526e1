// Domain layer: the timestamp value type and the config port.

pub mod model;
pub mod ports;
