use serde::{Deserialize, Serialize};

/// A showcase entry of the studio's work. Read-only seed data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioPiece {
    pub id: String,
    pub title: String,
    pub style: String,
    pub size: String,
    pub description: String,
    pub image_url: String,
}
