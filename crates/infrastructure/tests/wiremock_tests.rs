//! Integration tests for the assembled provider chain
//!
//! Both routing backends are replaced by WireMock servers so the full
//! primary -> secondary fallback runs over real HTTP.

use std::time::Duration;

use application::{ProviderError, ResolutionOutcome, RouteError};
use domain::{GeoPoint, RouteSource};
use infrastructure::{AppConfig, build_route_resolver};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, path_regex},
};

const ORS_PATH: &str = "/v2/directions/driving-car";
const OSRM_PATH: &str = r"^/route/v1/driving/.+";

fn config_for_mocks(ors: &MockServer, osrm: &MockServer) -> AppConfig {
    let mut config = AppConfig::default();
    config.routing.openrouteservice.base_url = ors.uri();
    config.routing.openrouteservice.timeout_secs = 1;
    config.routing.osrm.base_url = osrm.uri();
    config.routing.osrm.timeout_secs = 1;
    config
}

fn ors_body() -> serde_json::Value {
    serde_json::json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": {
                "segments": [{ "distance": 465_010.2, "duration": 16_420.0, "steps": [] }],
                "summary": { "distance": 465_010.2, "duration": 16_420.0 }
            },
            "geometry": {
                "type": "LineString",
                "coordinates": [[2.3499, 48.853], [4.832, 45.7578]]
            }
        }]
    })
}

fn osrm_body() -> serde_json::Value {
    serde_json::json!({
        "code": "Ok",
        "routes": [{
            "geometry": {
                "type": "LineString",
                "coordinates": [[2.3499, 48.853], [3.5, 47.0], [4.832, 45.7578]]
            },
            "legs": [{ "steps": [{ "name": "A6" }, { "name": "A7" }] }],
            "distance": 463_900.0,
            "duration": 16_100.0
        }]
    })
}

async fn mount_osrm_success(server: &MockServer, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path_regex(OSRM_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(osrm_body()))
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn primary_success_skips_secondary() {
    let ors = MockServer::start().await;
    let osrm = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ORS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(ors_body()))
        .expect(1)
        .mount(&ors)
        .await;
    mount_osrm_success(&osrm, 0).await;

    let resolver = build_route_resolver(&config_for_mocks(&ors, &osrm)).unwrap();
    let route = resolver
        .resolve(GeoPoint::paris(), GeoPoint::lyon())
        .await
        .into_result()
        .unwrap();

    assert_eq!(route.source_provider(), RouteSource::Primary);
    assert_eq!(route.provider_name(), "openrouteservice");
    assert_eq!(route.coordinates(), &[GeoPoint::paris(), GeoPoint::lyon()]);
}

#[tokio::test]
async fn server_error_falls_back_to_osrm() {
    let ors = MockServer::start().await;
    let osrm = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ORS_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .expect(1)
        .mount(&ors)
        .await;
    mount_osrm_success(&osrm, 1).await;

    let resolver = build_route_resolver(&config_for_mocks(&ors, &osrm)).unwrap();
    let route = resolver
        .resolve(GeoPoint::paris(), GeoPoint::lyon())
        .await
        .into_result()
        .unwrap();

    assert_eq!(route.source_provider(), RouteSource::Secondary);
    assert_eq!(route.provider_name(), "osrm");
    assert_eq!(route.coordinates().len(), 3);
    assert_eq!(route.raw_steps().len(), 2);
}

#[tokio::test]
async fn timeout_falls_back_to_osrm() {
    let ors = MockServer::start().await;
    let osrm = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ORS_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(ors_body())
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&ors)
        .await;
    mount_osrm_success(&osrm, 1).await;

    let resolver = build_route_resolver(&config_for_mocks(&ors, &osrm)).unwrap();
    let outcome = resolver.resolve(GeoPoint::paris(), GeoPoint::lyon()).await;

    assert_eq!(
        outcome.route().map(|r| r.source_provider()),
        Some(RouteSource::Secondary)
    );
}

#[tokio::test]
async fn malformed_primary_body_falls_back() {
    let ors = MockServer::start().await;
    let osrm = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ORS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&ors)
        .await;
    mount_osrm_success(&osrm, 1).await;

    let resolver = build_route_resolver(&config_for_mocks(&ors, &osrm)).unwrap();
    let outcome = resolver.resolve(GeoPoint::paris(), GeoPoint::lyon()).await;

    assert!(outcome.is_success());
}

#[tokio::test]
async fn both_failing_reports_each_provider() {
    let ors = MockServer::start().await;
    let osrm = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ORS_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_json(serde_json::json!({
            "error": { "code": 2099, "message": "Service unavailable" }
        })))
        .expect(1)
        .mount(&ors)
        .await;
    Mock::given(method("GET"))
        .and(path_regex(OSRM_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "code": "NoRoute",
            "message": "Impossible route between points"
        })))
        .expect(1)
        .mount(&osrm)
        .await;

    let resolver = build_route_resolver(&config_for_mocks(&ors, &osrm)).unwrap();
    let outcome = resolver.resolve(GeoPoint::paris(), GeoPoint::lyon()).await;

    let Some(RouteError::AllProvidersFailed { failures }) = outcome.error() else {
        panic!("expected AllProvidersFailed, got {outcome:?}");
    };
    assert_eq!(failures.len(), 2);
    assert_eq!(failures[0].provider, "openrouteservice");
    assert!(matches!(
        failures[0].error,
        ProviderError::ProviderHttp { status: 503, .. }
    ));
    assert_eq!(failures[1].provider, "osrm");
    assert!(matches!(failures[1].error, ProviderError::NoRouteFound { .. }));
}

#[tokio::test]
async fn unreachable_destination_is_no_route_on_both_providers() {
    let ors = MockServer::start().await;
    let osrm = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ORS_PATH))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "error": { "code": 2009, "message": "Route could not be found" }
        })))
        .expect(1)
        .mount(&ors)
        .await;
    Mock::given(method("GET"))
        .and(path_regex(OSRM_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "code": "NoRoute",
            "message": "Impossible route between points"
        })))
        .expect(1)
        .mount(&osrm)
        .await;

    let resolver = build_route_resolver(&config_for_mocks(&ors, &osrm)).unwrap();
    let outcome = resolver.resolve(GeoPoint::paris(), GeoPoint::lyon()).await;

    let Some(RouteError::AllProvidersFailed { failures }) = outcome.error() else {
        panic!("expected AllProvidersFailed, got {outcome:?}");
    };
    assert_eq!(failures.len(), 2);
    assert!(
        failures
            .iter()
            .all(|f| matches!(f.error, ProviderError::NoRouteFound { .. }))
    );
}

#[tokio::test]
async fn invalid_input_makes_no_requests() {
    let ors = MockServer::start().await;
    let osrm = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ors_body()))
        .expect(0)
        .mount(&ors)
        .await;
    mount_osrm_success(&osrm, 0).await;

    let resolver = build_route_resolver(&config_for_mocks(&ors, &osrm)).unwrap();
    let outcome = resolver
        .resolve(GeoPoint::new_unchecked(91.0, 0.0), GeoPoint::lyon())
        .await;

    assert!(matches!(
        outcome,
        ResolutionOutcome::Failure(RouteError::InvalidInput { .. })
    ));
}

#[tokio::test]
async fn point_outside_service_area_is_still_routed() {
    let ors = MockServer::start().await;
    let osrm = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ORS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(ors_body()))
        .expect(1)
        .mount(&ors)
        .await;

    let resolver = build_route_resolver(&config_for_mocks(&ors, &osrm)).unwrap();
    let far = GeoPoint::new(10.0, 10.0).unwrap();
    let outcome = resolver.resolve(far, far).await;

    assert!(outcome.is_success());
}

#[tokio::test]
async fn osrm_only_chain_tags_primary() {
    let ors = MockServer::start().await;
    let osrm = MockServer::start().await;
    mount_osrm_success(&osrm, 1).await;

    let mut config = config_for_mocks(&ors, &osrm);
    config.routing.openrouteservice.enabled = false;

    let resolver = build_route_resolver(&config).unwrap();
    let route = resolver
        .resolve(GeoPoint::paris(), GeoPoint::lyon())
        .await
        .into_result()
        .unwrap();

    assert_eq!(route.source_provider(), RouteSource::Primary);
    assert_eq!(route.provider_name(), "osrm");
}
