use std::collections::HashMap;
use std::sync::Arc;

use ahash::RandomState;
use reqwest::Client;
use serde_json::{Map, Value};
use tokio::sync::{RwLock, watch};
use tracing::{debug, error, info, warn};

use crate::controller::dashboard::client::{LoaderConfig, fetch_dashboard_data};
use crate::controller::dashboard::sync::patch_stat_elements;
use crate::error::DashboardError;
use crate::model::{
    ClubCard, ClubStat, CompatAliases, CourseStat, DashboardData, PlayerStats, TemporalSeries,
    format_period_labels,
};

#[derive(Default)]
struct LoaderState {
    dataset: Option<Arc<DashboardData>>,
    aliases: CompatAliases,
    document: Option<String>,
}

/// Owns the fetched dataset and everything derived from it. Clones share
/// state, so a single loader serves every request handler.
#[derive(Clone)]
pub struct DashboardLoader {
    config: LoaderConfig,
    client: Client,
    state: Arc<RwLock<LoaderState>>,
    ready_tx: Arc<watch::Sender<Option<Arc<DashboardData>>>>,
}

impl DashboardLoader {
    #[must_use]
    pub fn new(config: LoaderConfig) -> Self {
        let (ready_tx, _) = watch::channel(None);
        Self {
            config,
            client: Client::new(),
            state: Arc::new(RwLock::new(LoaderState::default())),
            ready_tx: Arc::new(ready_tx),
        }
    }

    /// Fetches the export and replaces the current dataset.
    ///
    /// # Errors
    ///
    /// Propagates the fetch or decode failure; state is left untouched on
    /// error.
    pub async fn try_load(&self) -> Result<Arc<DashboardData>, DashboardError> {
        let data = fetch_dashboard_data(&self.client, &self.config).await?;
        let dataset = Arc::new(data);
        let mut state = self.state.write().await;
        state.dataset = Some(dataset.clone());
        Ok(dataset)
    }

    /// Catching wrapper around [`Self::try_load`]: failures are logged and
    /// surfaced as `None`, never raised.
    pub async fn load(&self) -> Option<Arc<DashboardData>> {
        match self.try_load().await {
            Ok(dataset) => Some(dataset),
            Err(e) => {
                error!(error = %e, "error loading dashboard data");
                None
            }
        }
    }

    /// Runs the page-load sequence: fetch, publish the legacy aliases, patch
    /// any attached document, then signal readiness. Each successful run
    /// signals exactly once; a failed fetch signals nothing.
    pub async fn init(&self) -> Option<Arc<DashboardData>> {
        let dataset = match self.load().await {
            Some(dataset) => dataset,
            None => {
                warn!("dashboard data unavailable, accessors will serve empty defaults");
                return None;
            }
        };

        {
            let mut state = self.state.write().await;
            state.aliases = CompatAliases {
                club_data: dataset.club_statistics.iter().map(ClubCard::from).collect(),
                player_stats: dataset.player_stats.clone(),
                course_stats: dataset.course_statistics.clone(),
            };
            if let Some(doc) = state.document.take() {
                state.document = Some(patch_stat_elements(&doc, &dataset.player_stats));
            }
        }

        self.ready_tx.send_replace(Some(dataset.clone()));
        info!(
            version = %dataset.metadata.version,
            rounds = dataset.player_stats.total_rondas,
            "dashboard data ready"
        );
        if dataset.metadata.phase_5_enabled {
            info!("advanced analytics tier active");
        }
        Some(dataset)
    }

    async fn with_dataset<T: Default>(&self, f: impl FnOnce(&DashboardData) -> T) -> T {
        match &self.state.read().await.dataset {
            Some(data) => f(data),
            None => T::default(),
        }
    }

    pub async fn dataset(&self) -> Option<Arc<DashboardData>> {
        self.state.read().await.dataset.clone()
    }

    pub async fn player_stats(&self) -> PlayerStats {
        self.with_dataset(|data| data.player_stats.clone()).await
    }

    pub async fn club_statistics(&self) -> Vec<ClubStat> {
        self.with_dataset(|data| data.club_statistics.clone()).await
    }

    pub async fn temporal_evolution(&self) -> HashMap<String, TemporalSeries, RandomState> {
        self.with_dataset(|data| data.temporal_evolution.clone())
            .await
    }

    pub async fn course_statistics(&self) -> Vec<CourseStat> {
        self.with_dataset(|data| data.course_statistics.clone())
            .await
    }

    pub async fn launch_metrics(&self) -> Map<String, Value> {
        self.with_dataset(|data| data.launch_metrics.clone()).await
    }

    pub async fn dispersion_analysis(&self) -> Map<String, Value> {
        self.with_dataset(|data| data.dispersion_analysis.clone())
            .await
    }

    pub async fn consistency_benchmarks(&self) -> Map<String, Value> {
        self.with_dataset(|data| data.consistency_benchmarks.clone())
            .await
    }

    pub async fn is_advanced_tier_enabled(&self) -> bool {
        self.with_dataset(|data| data.metadata.phase_5_enabled).await
    }

    /// Club rows projected down to their display fields, in export order.
    pub async fn formatted_clubs(&self) -> Vec<ClubCard> {
        self.with_dataset(|data| data.club_statistics.iter().map(ClubCard::from).collect())
            .await
    }

    /// Chart-ready series for one club code, labels formatted for display.
    /// Unknown codes come back empty.
    pub async fn club_temporal_series(&self, club_code: &str) -> TemporalSeries {
        self.with_dataset(|data| match data.temporal_evolution.get(club_code) {
            Some(series) => {
                if series.labels.len() != series.values.len() {
                    warn!(
                        club = club_code,
                        labels = series.labels.len(),
                        values = series.values.len(),
                        "temporal series lengths differ"
                    );
                }
                TemporalSeries {
                    labels: format_period_labels(&series.labels),
                    values: series.values.clone(),
                }
            }
            None => TemporalSeries::default(),
        })
        .await
    }

    pub async fn compat_aliases(&self) -> CompatAliases {
        self.state.read().await.aliases.clone()
    }

    /// Adopts the host page markup. With a dataset already loaded the stat
    /// elements are patched immediately; otherwise patching happens when
    /// `init` completes.
    pub async fn attach_document(&self, html: String) {
        let mut state = self.state.write().await;
        state.document = Some(match &state.dataset {
            Some(data) => patch_stat_elements(&html, &data.player_stats),
            None => html,
        });
    }

    /// Re-applies the current player stats to the attached document. Without
    /// a dataset or a document this changes nothing.
    pub async fn apply_to_document(&self) {
        let mut state = self.state.write().await;
        let stats = match &state.dataset {
            Some(data) => data.player_stats.clone(),
            None => {
                debug!("no dataset loaded, skipping document patch");
                return;
            }
        };
        match state.document.take() {
            Some(doc) => state.document = Some(patch_stat_elements(&doc, &stats)),
            None => debug!("no document attached, skipping document patch"),
        }
    }

    pub async fn document_html(&self) -> Option<String> {
        self.state.read().await.document.clone()
    }

    /// Readiness channel. A receiver observes every signal sent after this
    /// call; the dataset rides along as the channel value.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<Arc<DashboardData>>> {
        self.ready_tx.subscribe()
    }
}
