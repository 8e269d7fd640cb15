// Domain layer: seating models and ports. Nothing here touches the filesystem.

pub mod model;
pub mod ports;
