//! Store access for the ajax backend.
//!
//! The store is an in-memory snapshot shared by every handler. Repositories
//! borrow it and expose the reads and writes each domain needs, returning
//! domain models from `server::model`.

pub mod campaign;
pub mod inbound_route;
pub mod queue;
pub mod store;
