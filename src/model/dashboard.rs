use ahash::RandomState;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

// Producer exports carry far more sections than the dashboard reads; serde
// drops the unknown keys. Every typed field defaults so a partial export
// still decodes.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct DashboardData {
    pub generated_at: String,
    pub player_stats: PlayerStats,
    pub club_statistics: Vec<ClubStat>,
    pub temporal_evolution: HashMap<String, TemporalSeries, RandomState>,
    pub course_statistics: Vec<CourseStat>,
    pub launch_metrics: Map<String, Value>,
    pub dispersion_analysis: Map<String, Value>,
    pub consistency_benchmarks: Map<String, Value>,
    pub metadata: DatasetMetadata,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct PlayerStats {
    pub player_name: String,
    pub handicap_actual: f64,
    pub total_rondas: i32,
    pub mejor_score: i32,
    pub peor_score: i32,
    pub promedio_score: f64,
    pub mejora_handicap: f64,
    pub campos_jugados: i32,
    pub golpes_flightscope: i32,
    pub primera_ronda: String,
    pub ultima_ronda: String,
}

// distance, deviation and speed arrive preformatted ("183.4m", "12.1m D",
// "201.5 km/h"); the raw values ride alongside for sorting and gap math.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct ClubStat {
    pub name: String,
    pub distance: String,
    pub deviation: String,
    pub speed: String,
    pub rating: i32,
    pub category: String,
    pub distance_raw: f64,
    pub speed_raw: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct TemporalSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct CourseStat {
    pub nombre: String,
    pub rondas_jugadas: i32,
    pub promedio: f64,
    pub mejor_score: i32,
    pub peor_score: i32,
    pub par: Option<i32>,
    pub vc: Option<f64>,
    pub slope: Option<i32>,
    pub primera_fecha: String,
    pub ultima_fecha: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct DatasetMetadata {
    pub version: String,
    pub sprint: i32,
    pub phase_5_enabled: bool,
    pub total_clubs: i32,
    pub total_rounds: i32,
}
