//! Transport abstraction trait definition

mod user_gateway;

pub use user_gateway::UserGateway;
