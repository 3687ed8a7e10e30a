pub mod inbound_route;
pub mod not_found;

pub use inbound_route::InboundRoutes;
pub use not_found::NotFound;
