// Domain layer: value types and ports. No IO here.

pub mod model;
pub mod ports;
pub mod story;
