//! Rendering of resolution outcomes for the terminal

use application::{
    ResolutionOutcome, RouteError, ServiceAreaWarning, format_distance, format_duration,
    format_route_summary,
};
use domain::NormalizedRoute;
use serde::Serialize;

/// Message shown whenever no route could be produced
pub const NO_ROUTE_MESSAGE: &str = "no route available";

/// JSON document printed by `route --json`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RouteReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    route: Option<&'a NormalizedRoute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    distance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a RouteError>,
    warnings: &'a [ServiceAreaWarning],
}

/// Render an outcome as pretty-printed JSON
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(
    outcome: &ResolutionOutcome,
    warnings: &[ServiceAreaWarning],
) -> serde_json::Result<String> {
    let route = outcome.route();
    let report = RouteReport {
        route,
        distance: route.map(|r| format_distance(r.distance_meters())),
        duration: route.map(|r| format_duration(r.duration_seconds())),
        error: outcome.error(),
        warnings,
    };
    serde_json::to_string_pretty(&report)
}

/// Render a resolved route as human-readable text
#[must_use]
pub fn render_route(route: &NormalizedRoute) -> String {
    let mut lines = vec![
        format_route_summary(route),
        format!(
            "source:   {} ({})",
            route.source_provider(),
            route.provider_name()
        ),
        format!("points:   {}", route.coordinates().len()),
    ];
    if !route.raw_steps().is_empty() {
        lines.push(format!("steps:    {}", route.raw_steps().len()));
    }
    lines.iter().map(|line| format!("{line}\n")).collect()
}

/// Render a failed resolution as human-readable text
#[must_use]
pub fn render_failure(error: &RouteError) -> String {
    std::iter::once(NO_ROUTE_MESSAGE.to_string())
        .chain(error.messages().into_iter().map(|m| format!("  - {m}")))
        .map(|line| line + "\n")
        .collect()
}

/// Render service-area warnings, one per line
#[must_use]
pub fn render_warnings(warnings: &[ServiceAreaWarning]) -> String {
    warnings
        .iter()
        .map(|w| format!("warning: {w}\n"))
        .collect()
}

/// Render the provider chain as a numbered list
#[must_use]
pub fn render_providers(names: &[&str]) -> String {
    if names.is_empty() {
        return "no providers enabled\n".to_string();
    }
    names
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{}. {name}\n", i + 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use application::{Endpoint, ProviderError, ProviderFailure};
    use domain::{GeoPoint, RouteSource, RouteStep};

    use super::*;

    fn sample_route() -> NormalizedRoute {
        NormalizedRoute::new(
            vec![GeoPoint::paris(), GeoPoint::lyon()],
            1500.0,
            3661.0,
            RouteSource::Secondary,
            "osrm",
        )
        .unwrap()
        .with_steps(vec![RouteStep::new(serde_json::json!({"name": "A6"}))])
    }

    fn both_failed() -> RouteError {
        RouteError::AllProvidersFailed {
            failures: vec![
                ProviderFailure {
                    provider: "openrouteservice".to_string(),
                    role: RouteSource::Primary,
                    error: ProviderError::http(403, "Access denied"),
                },
                ProviderFailure {
                    provider: "osrm".to_string(),
                    role: RouteSource::Secondary,
                    error: ProviderError::transport("connection refused"),
                },
            ],
        }
    }

    #[test]
    fn route_text_contains_summary_and_source() {
        let text = render_route(&sample_route());
        assert!(text.starts_with("1.5 km · 1h 1min via osrm"));
        assert!(text.contains("points:   2"));
        assert!(text.contains("steps:    1"));
    }

    #[test]
    fn route_text_without_steps_has_three_lines() {
        let route = NormalizedRoute::new(
            vec![GeoPoint::paris()],
            950.0,
            59.0,
            RouteSource::Primary,
            "openrouteservice",
        )
        .unwrap();

        assert_eq!(
            render_route(&route),
            "950 m · 0min via openrouteservice\nsource:   primary (openrouteservice)\npoints:   1\n"
        );
    }

    #[test]
    fn failure_text_lists_each_provider() {
        let text = render_failure(&both_failed());
        assert!(text.starts_with(NO_ROUTE_MESSAGE));
        assert!(text.contains("openrouteservice"));
        assert!(text.contains("Access denied"));
        assert!(text.contains("connection refused"));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn json_for_success() {
        let outcome = ResolutionOutcome::Success(sample_route());
        let json: serde_json::Value =
            serde_json::from_str(&render_json(&outcome, &[]).unwrap()).unwrap();

        assert_eq!(json["distance"], "1.5 km");
        assert_eq!(json["duration"], "1h 1min");
        assert_eq!(json["route"]["providerName"], "osrm");
        assert!(json.get("error").is_none());
        assert_eq!(json["warnings"], serde_json::json!([]));
    }

    #[test]
    fn json_for_failure_with_warning() {
        let outcome = ResolutionOutcome::Failure(both_failed());
        let warnings = [ServiceAreaWarning {
            endpoint: Endpoint::End,
            point: GeoPoint::new(52.52, 13.405).unwrap(),
        }];
        let json: serde_json::Value =
            serde_json::from_str(&render_json(&outcome, &warnings).unwrap()).unwrap();

        assert!(json.get("route").is_none());
        assert_eq!(json["error"]["kind"], "all_providers_failed");
        assert_eq!(json["error"]["failures"][0]["error"]["status"], 403);
        assert_eq!(json["warnings"][0]["endpoint"], "end");
    }

    #[test]
    fn warnings_render_one_per_line() {
        let warnings = [
            ServiceAreaWarning {
                endpoint: Endpoint::Start,
                point: GeoPoint::new(10.0, 10.0).unwrap(),
            },
            ServiceAreaWarning {
                endpoint: Endpoint::End,
                point: GeoPoint::new(10.0, 10.0).unwrap(),
            },
        ];
        let text = render_warnings(&warnings);
        assert_eq!(text.lines().count(), 2);
        assert!(text.starts_with("warning: start point"));
    }

    #[test]
    fn providers_are_numbered() {
        assert_eq!(
            render_providers(&["openrouteservice", "osrm"]),
            "1. openrouteservice\n2. osrm\n"
        );
        assert_eq!(render_providers(&[]), "no providers enabled\n");
    }
}
