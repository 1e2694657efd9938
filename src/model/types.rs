use serde::{Deserialize, Serialize};

use super::dashboard::{ClubStat, CourseStat, PlayerStats};

// Display projection of a club row: the preformatted strings only, raw
// values dropped.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ClubCard {
    pub name: String,
    pub distance: String,
    pub deviation: String,
    pub speed: String,
    pub rating: i32,
    pub category: String,
}

impl From<&ClubStat> for ClubCard {
    fn from(club: &ClubStat) -> Self {
        Self {
            name: club.name.clone(),
            distance: club.distance.clone(),
            deviation: club.deviation.clone(),
            speed: club.speed.clone(),
            rating: club.rating,
            category: club.category.clone(),
        }
    }
}

// Snapshot kept for chart code written against the old global names. Filled
// once per successful load.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct CompatAliases {
    pub club_data: Vec<ClubCard>,
    pub player_stats: PlayerStats,
    pub course_stats: Vec<CourseStat>,
}
