//! Admin dashboard and booking integration tests

mod helpers;

use assert_matches::assert_matches;
use helpers::*;
use serde_json::json;
use wiremock::{
    matchers::{method, path},
    Mock, ResponseTemplate,
};

use InfluenceHub::{
    models::{ActivityKind, CampaignStatus},
    ApiError, InfluenceHubError,
};

async fn mount_collections(backend: &MockBackend) {
    let users = json!([
        user_json("u1", "admin", "2024-06-01T08:00:00Z"),
        named_user_json("u2", "Undated Brand", "user"),
        user_json("u3", "user", "2024-06-03T08:00:00Z"),
    ]);
    let campaigns = json!([
        campaign_json("c1", "Summer Launch", "completed", "2024-06-02T08:00:00Z"),
        campaign_json("c2", "Tech Week", "pending", "2024-06-04T08:00:00Z"),
        campaign_json("c3", "Back to School", "accepted", "2024-05-30T08:00:00Z"),
        campaign_json("c4", "Winter Sale", "rejected", "2024-06-05T08:00:00Z"),
    ]);
    let influencers = json!([
        influencer_json("i1", "Mia Fit", "Fitness", 150000),
        influencer_json("i2", "Tom Tech", "Tech", 98000),
    ]);

    for (route, body) in [
        ("/api/admin/users", users),
        ("/api/admin/campaigns", campaigns),
        ("/api/influencers", influencers),
    ] {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&backend.server)
            .await;
    }
}

#[tokio::test]
async fn test_dashboard_stats_and_feed() {
    let backend = MockBackend::new().await;
    mount_collections(&backend).await;

    let dashboard = backend
        .services()
        .admin_service
        .dashboard(ADMIN_TOKEN)
        .await
        .unwrap();

    let stats = &dashboard.stats;
    assert_eq!(stats.total_users, 3);
    assert_eq!(stats.total_campaigns, 4);
    assert_eq!(stats.pending_campaigns, 1);
    assert_eq!(stats.total_influencers, 2);
    assert_eq!(stats.success_rate, 25);

    let ids: Vec<&str> = dashboard.activities.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["c4", "c2", "u3", "c1", "u1"]);
    assert_eq!(dashboard.activities[0].kind, ActivityKind::Campaign);
    assert_eq!(dashboard.activities[0].title, "New campaign created: Winter Sale");
    assert_eq!(dashboard.activities[0].user.as_deref(), Some("Brand Co"));
    assert_eq!(dashboard.activities[2].kind, ActivityKind::User);
}

#[tokio::test]
async fn test_dashboard_fails_when_any_collection_fails() {
    let backend = MockBackend::new().await;
    backend
        .mock_any("GET", "/api/admin/users", MockResponseConfig::ok(json!([])))
        .await;
    backend
        .mock_any("GET", "/api/admin/campaigns", MockResponseConfig::error(403, "Admins only"))
        .await;
    backend
        .mock_any("GET", "/api/influencers", MockResponseConfig::ok(json!([])))
        .await;

    let err = backend
        .services()
        .admin_service
        .dashboard(TEST_TOKEN)
        .await
        .unwrap_err();

    assert_matches!(err, InfluenceHubError::Api(ApiError::Server { status: 403, .. }));
    assert_eq!(err.user_message(), "Admins only");
}

#[tokio::test]
async fn test_empty_collections_give_zero_rate() {
    let backend = MockBackend::new().await;
    for route in ["/api/admin/users", "/api/admin/campaigns", "/api/influencers"] {
        backend.mock_any("GET", route, MockResponseConfig::ok(json!([]))).await;
    }

    let services = backend.services();
    let stats = services.admin_service.stats(ADMIN_TOKEN).await.unwrap();
    assert_eq!(stats.success_rate, 0);
    assert_eq!(stats.total_campaigns, 0);

    let feed = services.admin_service.recent_activities(ADMIN_TOKEN).await.unwrap();
    assert!(feed.is_empty());
}

#[tokio::test]
async fn test_booking_only_offers_accepted_campaigns() {
    let backend = MockBackend::new().await;
    backend
        .mock_authed(
            "GET",
            "/api/campaigns/my",
            TEST_TOKEN,
            MockResponseConfig::ok(json!([
                campaign_json("c1", "Summer Launch", "pending", "2024-06-02T08:00:00Z"),
                campaign_json("c3", "Back to School", "accepted", "2024-05-30T08:00:00Z"),
            ])),
        )
        .await;
    backend
        .mock_authed(
            "GET",
            "/api/influencers/i1",
            TEST_TOKEN,
            MockResponseConfig::ok(influencer_json("i1", "Mia Fit", "Fitness", 150000)),
        )
        .await;

    let services = backend.services();
    let eligible = services.booking_service.eligible_campaigns(TEST_TOKEN).await.unwrap();
    assert_eq!(eligible.len(), 1);
    assert_eq!(eligible[0].status, CampaignStatus::Accepted);

    let influencer = services.influencer_service.get(TEST_TOKEN, "i1").await.unwrap();
    let confirmation = services
        .booking_service
        .confirm(&influencer, eligible.first())
        .unwrap();
    assert_eq!(
        confirmation.message,
        "You have successfully booked Mia Fit for the campaign \"Back to School\""
    );

    let err = services.booking_service.confirm(&influencer, None).unwrap_err();
    assert_eq!(err.user_message(), "Please select a campaign first");
}
