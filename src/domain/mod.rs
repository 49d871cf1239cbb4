// Domain layer: models and ports. The core and adapters depend on these, never the other way.

pub mod model;
pub mod ports;
