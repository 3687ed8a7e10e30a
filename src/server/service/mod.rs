//! Business logic between the ajax controller and the store.

pub mod inbound_route;

#[cfg(test)]
mod test;
