use crate::server::{data::store::Store, model::inbound_route::Campaign};

pub struct CampaignRepository<'a> {
    store: &'a Store,
}

impl<'a> CampaignRepository<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Gets campaigns ordered by name, limited to one type when given
    pub async fn get_all(&self, kind: Option<&str>) -> Vec<Campaign> {
        let data = self.store.data().read().await;

        let mut campaigns: Vec<Campaign> = data
            .campaigns
            .iter()
            .filter(|campaign| kind.is_none_or(|kind| campaign.kind == kind))
            .cloned()
            .collect();
        campaigns.sort_by(|a, b| a.name.cmp(&b.name));

        campaigns
    }

    /// Whether a campaign with this id and type exists
    pub async fn exists(&self, id: i32, kind: &str) -> bool {
        let data = self.store.data().read().await;

        data.campaigns
            .iter()
            .any(|campaign| campaign.id == id && campaign.kind == kind)
    }
}
