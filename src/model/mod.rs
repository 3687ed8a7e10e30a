pub mod ajax;
pub mod api;
pub mod inbound_route;
