mod common;

use actix_web::http::StatusCode;

use common::setup_test_context;
use golf_dashboard::DashboardError;

#[tokio::test(flavor = "multi_thread")]
async fn test2_http_failure_leaves_state_empty() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = setup_test_context(StatusCode::INTERNAL_SERVER_ERROR, "boom").await?;
    let ready_rx = ctx.loader.subscribe();

    let err = ctx
        .loader
        .try_load()
        .await
        .expect_err("a 500 answer should fail the load");
    assert!(
        matches!(err, DashboardError::Network(_)),
        "Non-success status should surface as a network error, got {err:?}"
    );

    assert!(ctx.loader.init().await.is_none());
    assert!(
        ctx.loader.dataset().await.is_none(),
        "A failed load should leave no dataset behind"
    );
    assert!(
        !ready_rx.has_changed()?,
        "No readiness signal should be sent for a failed load"
    );

    // Every accessor falls back to its empty default.
    assert_eq!(ctx.loader.player_stats().await.total_rondas, 0);
    assert!(ctx.loader.club_statistics().await.is_empty());
    assert!(ctx.loader.temporal_evolution().await.is_empty());
    assert!(ctx.loader.course_statistics().await.is_empty());
    assert!(ctx.loader.launch_metrics().await.is_empty());
    assert!(ctx.loader.dispersion_analysis().await.is_empty());
    assert!(ctx.loader.consistency_benchmarks().await.is_empty());
    assert!(!ctx.loader.is_advanced_tier_enabled().await);
    assert!(ctx.loader.formatted_clubs().await.is_empty());

    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test2_malformed_body_is_a_parse_failure() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = setup_test_context(StatusCode::OK, "these are not the stats").await?;
    let ready_rx = ctx.loader.subscribe();

    let err = ctx
        .loader
        .try_load()
        .await
        .expect_err("a non-JSON body should fail the load");
    assert!(
        matches!(err, DashboardError::Parse(_)),
        "Malformed body should surface as a parse error, got {err:?}"
    );

    assert!(ctx.loader.init().await.is_none());
    assert!(ctx.loader.dataset().await.is_none());
    assert!(!ready_rx.has_changed()?);

    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test2_unreachable_producer_is_a_network_failure()
-> Result<(), Box<dyn std::error::Error>> {
    // Port 9 is discard; nothing should be listening there.
    let loader = golf_dashboard::DashboardLoader::new(golf_dashboard::LoaderConfig::new(
        "http://127.0.0.1:9",
        common::EXPORT_PATH,
    ));

    let err = loader
        .try_load()
        .await
        .expect_err("a refused connection should fail the load");
    assert!(matches!(err, DashboardError::Network(_)));
    assert!(loader.init().await.is_none());
    assert!(loader.dataset().await.is_none());

    Ok(())
}
