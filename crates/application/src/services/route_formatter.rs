//! Human-readable formatting of route measures
//!
//! All functions are total: negative or NaN input is treated as zero.

use domain::NormalizedRoute;

const SECONDS_PER_HOUR: u64 = 3600;
const SECONDS_PER_MINUTE: u64 = 60;

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole(value: f64) -> u64 {
    // `as` saturates at both ends and maps NaN to 0
    value.max(0.0) as u64
}

/// True when `km` lies exactly halfway between two tenths
///
/// Only quarter values (`x.25`, `x.75`) are representable ties. `{:.1}`
/// rounds those to even; the displayed distance rounds them up.
#[allow(clippy::float_cmp)]
fn is_exact_tenths_tie(km: f64) -> bool {
    let quarters = km * 4.0;
    quarters.fract() == 0.0 && quarters % 2.0 == 1.0
}

/// Format a duration given in seconds
///
/// Durations of an hour or more render as `"Hh Mmin"`, shorter ones as
/// `"Mmin"`. Minutes are truncated, never rounded.
///
/// # Examples
///
/// ```
/// use application::format_duration;
///
/// assert_eq!(format_duration(3661.0), "1h 1min");
/// assert_eq!(format_duration(59.0), "0min");
/// ```
#[must_use]
pub fn format_duration(seconds: f64) -> String {
    let total = whole(seconds.floor());
    let hours = total / SECONDS_PER_HOUR;
    let minutes = (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;

    if hours > 0 {
        format!("{hours}h {minutes}min")
    } else {
        format!("{minutes}min")
    }
}

/// Format a distance given in meters
///
/// From one kilometer upwards the result has one decimal place (`"1.5 km"`),
/// below that it is whole meters (`"950 m"`). Kilometers round the exact
/// decimal value of the quotient, so `1150.0` (stored as `1.1499...` km)
/// renders as `"1.1 km"` while the exact tie `1250.0` renders as `"1.3 km"`.
///
/// # Examples
///
/// ```
/// use application::format_distance;
///
/// assert_eq!(format_distance(950.0), "950 m");
/// assert_eq!(format_distance(1500.0), "1.5 km");
/// ```
#[must_use]
pub fn format_distance(meters: f64) -> String {
    let meters = if meters.is_nan() { 0.0 } else { meters.max(0.0) };

    if meters >= 1000.0 {
        let km = meters / 1000.0;
        if is_exact_tenths_tie(km) {
            format!("{:.1} km", km + 0.05)
        } else {
            format!("{km:.1} km")
        }
    } else {
        format!("{} m", whole(meters.round()))
    }
}

/// One-line summary of a resolved route
///
/// ```text
/// 465.2 km · 4h 38min via openrouteservice
/// ```
#[must_use]
pub fn format_route_summary(route: &NormalizedRoute) -> String {
    format!(
        "{} · {} via {}",
        format_distance(route.distance_meters()),
        format_duration(route.duration_seconds()),
        route.provider_name()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{GeoPoint, RouteSource};
    use proptest::prelude::*;

    #[test]
    fn duration_with_hours() {
        assert_eq!(format_duration(3661.0), "1h 1min");
        assert_eq!(format_duration(3600.0), "1h 0min");
        assert_eq!(format_duration(16_680.0), "4h 38min");
    }

    #[test]
    fn duration_minutes_only() {
        assert_eq!(format_duration(59.0), "0min");
        assert_eq!(format_duration(0.0), "0min");
        assert_eq!(format_duration(3599.0), "59min");
    }

    #[test]
    fn duration_truncates_minutes() {
        assert_eq!(format_duration(119.9), "1min");
        assert_eq!(format_duration(3719.5), "1h 1min");
    }

    #[test]
    fn duration_treats_invalid_input_as_zero() {
        assert_eq!(format_duration(-30.0), "0min");
        assert_eq!(format_duration(f64::NAN), "0min");
    }

    #[test]
    fn distance_meters() {
        assert_eq!(format_distance(950.0), "950 m");
        assert_eq!(format_distance(0.0), "0 m");
        assert_eq!(format_distance(12.4), "12 m");
        assert_eq!(format_distance(12.5), "13 m");
    }

    #[test]
    fn distance_kilometers() {
        assert_eq!(format_distance(1500.0), "1.5 km");
        assert_eq!(format_distance(1000.0), "1.0 km");
        assert_eq!(format_distance(1050.0), "1.1 km");
        assert_eq!(format_distance(465_234.0), "465.2 km");
    }

    #[test]
    fn distance_kilometers_round_the_stored_quotient() {
        assert_eq!(format_distance(1150.0), "1.1 km");
        assert_eq!(format_distance(1350.0), "1.4 km");
        assert_eq!(format_distance(2_449.0), "2.4 km");
    }

    #[test]
    fn distance_kilometers_exact_ties_round_up() {
        assert_eq!(format_distance(1250.0), "1.3 km");
        assert_eq!(format_distance(1750.0), "1.8 km");
        assert_eq!(format_distance(2250.0), "2.3 km");
    }

    #[test]
    fn distance_just_below_threshold_stays_in_meters() {
        assert_eq!(format_distance(999.6), "1000 m");
    }

    #[test]
    fn distance_treats_invalid_input_as_zero() {
        assert_eq!(format_distance(-5.0), "0 m");
        assert_eq!(format_distance(f64::NAN), "0 m");
    }

    #[test]
    fn route_summary() {
        let route = NormalizedRoute::new(
            vec![GeoPoint::paris(), GeoPoint::lyon()],
            465_234.0,
            16_680.0,
            RouteSource::Primary,
            "openrouteservice",
        )
        .unwrap();

        assert_eq!(
            format_route_summary(&route),
            "465.2 km · 4h 38min via openrouteservice"
        );
    }

    proptest! {
        #[test]
        fn duration_is_total(seconds in proptest::num::f64::ANY) {
            let formatted = format_duration(seconds);
            prop_assert!(formatted.ends_with("min"));
        }

        #[test]
        fn distance_is_total(meters in proptest::num::f64::ANY) {
            let formatted = format_distance(meters);
            prop_assert!(formatted.ends_with(" m") || formatted.ends_with(" km"));
        }

        #[test]
        fn minutes_component_below_sixty(seconds in 0.0f64..1.0e7) {
            let formatted = format_duration(seconds);
            let minutes: u64 = formatted
                .rsplit(' ')
                .next()
                .and_then(|m| m.strip_suffix("min"))
                .and_then(|m| m.parse().ok())
                .unwrap();
            prop_assert!(minutes < 60);
        }

        #[test]
        fn kilometers_have_one_decimal(meters in 1000.0f64..1.0e7) {
            let formatted = format_distance(meters);
            let number = formatted.strip_suffix(" km").unwrap();
            let (_, decimals) = number.split_once('.').unwrap();
            prop_assert_eq!(decimals.len(), 1);
        }
    }
}
