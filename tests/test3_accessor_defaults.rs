use golf_dashboard::model::DashboardData;
use golf_dashboard::{DashboardLoader, LoaderConfig};

#[test]
fn test3_absent_sections_decode_to_empty_defaults() -> Result<(), serde_json::Error> {
    let data: DashboardData = serde_json::from_str("{}")?;

    assert!(data.player_stats.player_name.is_empty());
    assert_eq!(data.player_stats.total_rondas, 0);
    assert!(data.club_statistics.is_empty());
    assert!(data.temporal_evolution.is_empty());
    assert!(data.course_statistics.is_empty());
    assert!(data.launch_metrics.is_empty());
    assert!(data.dispersion_analysis.is_empty());
    assert!(data.consistency_benchmarks.is_empty());
    assert!(!data.metadata.phase_5_enabled);

    Ok(())
}

#[test]
fn test3_unknown_keys_are_ignored() -> Result<(), serde_json::Error> {
    let data: DashboardData = serde_json::from_str(
        r#"{
            "score_history": {"total_rounds": 44},
            "club_gaps": [],
            "player_stats": {"total_rondas": 44}
        }"#,
    )?;

    assert_eq!(data.player_stats.total_rondas, 44);
    assert!(data.club_statistics.is_empty());

    Ok(())
}

#[test]
fn test3_advanced_tier_needs_an_explicit_flag() -> Result<(), serde_json::Error> {
    let absent: DashboardData = serde_json::from_str("{}")?;
    assert!(!absent.metadata.phase_5_enabled);

    let empty_metadata: DashboardData = serde_json::from_str(r#"{"metadata": {}}"#)?;
    assert!(!empty_metadata.metadata.phase_5_enabled);

    let disabled: DashboardData =
        serde_json::from_str(r#"{"metadata": {"phase_5_enabled": false}}"#)?;
    assert!(!disabled.metadata.phase_5_enabled);

    let enabled: DashboardData =
        serde_json::from_str(r#"{"metadata": {"phase_5_enabled": true}}"#)?;
    assert!(enabled.metadata.phase_5_enabled);

    Ok(())
}

#[tokio::test]
async fn test3_unloaded_loader_serves_defaults() {
    let loader = DashboardLoader::new(LoaderConfig::new(
        "http://localhost:8000",
        "output/dashboard_data.json",
    ));

    assert!(loader.dataset().await.is_none());
    assert!(loader.player_stats().await.player_name.is_empty());
    assert!(loader.club_statistics().await.is_empty());
    assert!(loader.temporal_evolution().await.is_empty());
    assert!(loader.course_statistics().await.is_empty());
    assert!(loader.launch_metrics().await.is_empty());
    assert!(loader.dispersion_analysis().await.is_empty());
    assert!(loader.consistency_benchmarks().await.is_empty());
    assert!(!loader.is_advanced_tier_enabled().await);
    assert!(loader.formatted_clubs().await.is_empty());
    assert!(loader.compat_aliases().await.club_data.is_empty());
    assert!(loader.document_html().await.is_none());

    let series = loader.club_temporal_series("Dr").await;
    assert!(series.labels.is_empty());
    assert!(series.values.is_empty());
}
