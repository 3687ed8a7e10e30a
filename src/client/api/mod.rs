#[cfg(feature = "web")]
pub mod helper;

pub mod inbound_route;

pub use inbound_route::InboundRouteApi;

#[cfg(feature = "web")]
pub use inbound_route::HttpInboundRouteApi;
