use serde::{Deserialize, Serialize};

/// A hero. Serializes to exactly `{id, name, super_name}`; the hero's
/// powers are reachable only through explicit [`HeroPower`] queries, never
/// embedded here.
///
/// [`HeroPower`]: crate::models::HeroPower
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hero {
    pub id: i64,
    pub name: String,
    pub super_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateHeroInput {
    pub name: String,
    pub super_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateHeroInput {
    pub name: Option<String>,
    pub super_name: Option<String>,
}
