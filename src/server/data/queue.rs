use crate::server::{data::store::Store, model::inbound_route::Queue};

pub struct QueueRepository<'a> {
    store: &'a Store,
}

impl<'a> QueueRepository<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Gets all queues ordered by name
    pub async fn get_all(&self) -> Vec<Queue> {
        let data = self.store.data().read().await;

        let mut queues = data.queues.clone();
        queues.sort_by(|a, b| a.name.cmp(&b.name));

        queues
    }

    pub async fn exists(&self, id: i32) -> bool {
        let data = self.store.data().read().await;

        data.queues.iter().any(|queue| queue.id == id)
    }
}
