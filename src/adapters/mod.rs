// Adapters layer: concrete implementations of the domain ports (http, console).

pub mod console;
pub mod http;
