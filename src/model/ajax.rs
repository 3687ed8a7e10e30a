//! Command addressing for the ajax controller.
//!
//! Every backend operation is reached through one path and selected by the
//! `module` and `cmd` query parameters. The client builds URLs from
//! [`AjaxCommand`] and the server dispatches on it, so both sides agree on
//! the exact pairs.

use serde::{Deserialize, Serialize};

/// Path every ajax call is issued against; module and command go in the query.
pub const AJAX_CONTROLLER_PATH: &str = "/ajax_controller";
pub const AJAX_PAGE: &str = "ajax_controller";
pub const INBOUND_CAMPAIGN_TYPE: &str = "inbound";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AjaxCommand {
    ListCampaigns,
    ListQueues,
    ListRoutes,
    AssignQueue,
    CreateEmail,
}

impl AjaxCommand {
    pub fn module(self) -> &'static str {
        match self {
            Self::ListCampaigns => "CampaignAdmin",
            Self::ListQueues => "OmniQueues",
            Self::ListRoutes | Self::AssignQueue | Self::CreateEmail => "InboundRouteOmni",
        }
    }

    pub fn cmd(self) -> &'static str {
        match self {
            Self::ListCampaigns => "listSlim",
            Self::ListQueues => "listAll",
            Self::ListRoutes => "listEmail",
            Self::AssignQueue => "assignQueue",
            Self::CreateEmail => "createEmail",
        }
    }

    pub fn from_parts(module: &str, cmd: &str) -> Option<Self> {
        [
            Self::ListCampaigns,
            Self::ListQueues,
            Self::ListRoutes,
            Self::AssignQueue,
            Self::CreateEmail,
        ]
        .into_iter()
        .find(|command| command.module() == module && command.cmd() == cmd)
    }

    /// Query string selecting this command, without the leading `?`.
    pub fn query(self) -> String {
        let mut query = format!("page={}&module={}&cmd={}", AJAX_PAGE, self.module(), self.cmd());
        if self == Self::ListCampaigns {
            query.push_str("&type=");
            query.push_str(INBOUND_CAMPAIGN_TYPE);
        }
        query
    }
}

/// Query parameters accepted by the ajax controller endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AjaxQuery {
    #[serde(default)]
    pub page: Option<String>,
    pub module: String,
    pub cmd: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}
