//! Static map image URLs.

use crate::model::LatLng;

/// Zoom used when the area is unknown.
pub const DEFAULT_ZOOM: u8 = 8;
pub const MIN_ZOOM: u8 = 4;
pub const MAX_ZOOM: u8 = 12;

const STATIC_MAP_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/staticmap";
const MAP_SIZE: &str = "600x300";

/// Zoom level that roughly frames a country of `area` km².
///
/// `clamp(round(14 - log2(area) / 2), 4, 12)`; [`DEFAULT_ZOOM`] when the area
/// is absent, zero, negative or not finite.
pub fn calculate_zoom(area: Option<f64>) -> u8 {
    match area {
        Some(a) if a.is_finite() && a > 0.0 => {
            let zoom = (14.0 - a.log2() / 2.0).round();
            zoom.clamp(f64::from(MIN_ZOOM), f64::from(MAX_ZOOM)) as u8
        }
        _ => DEFAULT_ZOOM,
    }
}

/// Static map URL centred on `center`. A missing key yields an empty `key=`.
pub fn static_map_url(center: LatLng, area: Option<f64>, api_key: Option<&str>) -> String {
    format!(
        "{}?center={},{}&zoom={}&size={}&key={}",
        STATIC_MAP_ENDPOINT,
        center.latitude,
        center.longitude,
        calculate_zoom(area),
        MAP_SIZE,
        api_key.unwrap_or_default()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_or_missing_area_uses_default_zoom() {
        assert_eq!(calculate_zoom(Some(0.0)), 8);
        assert_eq!(calculate_zoom(None), 8);
        assert_eq!(calculate_zoom(Some(-5.0)), 8);
        assert_eq!(calculate_zoom(Some(f64::NAN)), 8);
    }

    #[test]
    fn large_area_clamps_to_min_zoom() {
        assert_eq!(calculate_zoom(Some(1_000_000.0)), 4);
        assert_eq!(calculate_zoom(Some(17_098_242.0)), 4);
    }

    #[test]
    fn tiny_area_clamps_to_max_zoom() {
        // Vatican City.
        assert_eq!(calculate_zoom(Some(0.44)), 12);
    }

    #[test]
    fn mid_sized_area_rounds() {
        // log2(1024) = 10, so 14 - 5 = 9.
        assert_eq!(calculate_zoom(Some(1024.0)), 9);
    }

    #[test]
    fn url_contains_center_zoom_and_key() {
        let url = static_map_url(
            LatLng {
                latitude: 46.0,
                longitude: 2.0,
            },
            Some(551_695.0),
            Some("k123"),
        );
        assert_eq!(
            url,
            "https://maps.googleapis.com/maps/api/staticmap?center=46,2&zoom=4&size=600x300&key=k123"
        );
    }

    #[test]
    fn url_without_key_has_empty_key_param() {
        let url = static_map_url(
            LatLng {
                latitude: -8.5,
                longitude: 125.55,
            },
            Some(14_874.0),
            None,
        );
        assert!(url.ends_with("&key="), "got {url}");
        assert!(url.contains("center=-8.5,125.55"));
        assert!(url.contains("staticmap"));
    }
}
