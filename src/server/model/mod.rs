//! Domain models and operation parameters for the ajax backend.

pub mod inbound_route;
