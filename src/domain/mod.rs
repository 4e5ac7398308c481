// Domain layer: core models and ports (interfaces). No I/O; external dependencies stop at serde/chrono/async-trait.

pub mod model;
pub mod ports;
