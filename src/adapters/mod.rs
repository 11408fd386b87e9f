// Adapters layer: concrete implementations for external systems (http server, client, sinks, link opening, terminal).

pub mod client;
pub mod http;
pub mod navigator;
pub mod sink;
pub mod terminal;
