//! Tests for carousel paging and the scroll surface.

use super::*;
use crate::model::RawCountry;

fn images(n: usize) -> Vec<CarouselImage> {
    (0..n)
        .map(|i| CarouselImage {
            uri: format!("https://example.org/{i}.png"),
            role: if i == 0 {
                ImageRole::Flag
            } else {
                ImageRole::CoatOfArms
            },
        })
        .collect()
}

fn measured(n: usize, width: f64) -> CarouselController {
    let mut carousel = CarouselController::new(images(n));
    carousel.on_layout(width);
    carousel
}

// ===== Controller =====

#[test]
fn settle_rounds_offset_to_nearest_page() {
    let mut carousel = measured(3, 300.0);

    carousel.on_scroll_settle(305.0);

    assert_eq!(carousel.current_index(), 1);
}

#[test]
fn next_at_last_page_is_noop() {
    let mut carousel = measured(3, 300.0);
    carousel.on_scroll_settle(600.0);
    assert_eq!(carousel.current_index(), 2);

    assert_eq!(carousel.next(), None);
    assert_eq!(carousel.current_index(), 2);
}

#[test]
fn single_image_has_no_controls_and_fixed_index() {
    let mut carousel = measured(1, 300.0);

    assert!(!carousel.shows_controls());
    assert!(!carousel.can_go_prev());
    assert!(!carousel.can_go_next());
    assert_eq!(carousel.next(), None);
    carousel.on_scroll_settle(900.0);
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn empty_carousel_is_inert() {
    let mut carousel = measured(0, 300.0);

    carousel.on_scroll_settle(300.0);

    assert!(!carousel.shows_controls());
    assert_eq!(carousel.current_index(), 0);
    assert_eq!(carousel.current_image(), None);
    assert_eq!(carousel.prev(), None);
    assert_eq!(carousel.next(), None);
}

#[test]
fn next_and_prev_issue_animated_commands() {
    let mut carousel = measured(3, 300.0);

    assert_eq!(
        carousel.next(),
        Some(ScrollCommand {
            offset: 300.0,
            animated: true
        })
    );
    assert_eq!(carousel.current_index(), 1);

    assert_eq!(
        carousel.prev(),
        Some(ScrollCommand {
            offset: 0.0,
            animated: true
        })
    );
    assert_eq!(carousel.current_index(), 0);
    assert_eq!(carousel.prev(), None);
}

#[test]
fn unmeasured_controller_ignores_everything() {
    let mut carousel = CarouselController::new(images(3));

    carousel.on_scroll_settle(600.0);

    assert_eq!(carousel.current_index(), 0);
    assert!(!carousel.can_go_next());
    assert_eq!(carousel.next(), None);
    assert!(carousel.shows_controls(), "controls depend on count only");
}

#[test]
fn settle_clamps_fractional_and_negative_offsets() {
    let mut carousel = measured(3, 300.0);

    carousel.on_scroll_settle(-450.0);
    assert_eq!(carousel.current_index(), 0);

    carousel.on_scroll_settle(449.0);
    assert_eq!(carousel.current_index(), 1);

    carousel.on_scroll_settle(10_000.0);
    assert_eq!(carousel.current_index(), 2);
}

#[test]
fn layout_to_zero_returns_to_unmeasured() {
    let mut carousel = measured(3, 300.0);
    carousel.next();

    carousel.on_layout(0.0);

    assert!(!carousel.is_measured());
    assert_eq!(carousel.current_index(), 0);
}

// ===== Display mode and images =====

#[test]
fn flag_and_static_map_cover_other_images_contain() {
    let flag = CarouselImage {
        uri: "https://flagcdn.com/w320/fr.png".to_string(),
        role: ImageRole::Flag,
    };
    let map = CarouselImage {
        uri: "https://maps.googleapis.com/maps/api/staticmap?center=1,2".to_string(),
        role: ImageRole::Map,
    };
    let arms = CarouselImage {
        uri: "https://mainfacts.com/coat.png".to_string(),
        role: ImageRole::CoatOfArms,
    };

    assert_eq!(display_mode(&flag), DisplayMode::Cover);
    assert_eq!(display_mode(&map), DisplayMode::Cover);
    assert_eq!(
        display_mode(&arms),
        DisplayMode::Contain {
            padding: CONTAIN_PADDING
        }
    );
}

#[test]
fn build_images_orders_flag_arms_map() {
    let raw: RawCountry = serde_json::from_value(serde_json::json!({
        "name": { "common": "France" },
        "cca3": "FRA",
        "flags": { "png": "https://flagcdn.com/w320/fr.png" },
        "coatOfArms": { "svg": "https://mainfacts.com/fr.svg" },
        "latlng": [46.0, 2.0],
        "area": 551695.0
    }))
    .unwrap();
    let country = Country::from_raw(raw).unwrap();

    let images = build_images(&country, Some("key"));

    let roles: Vec<ImageRole> = images.iter().map(|i| i.role).collect();
    assert_eq!(
        roles,
        vec![ImageRole::Flag, ImageRole::CoatOfArms, ImageRole::Map]
    );
    assert!(images[2].uri.contains("zoom=4"));
    assert!(images[2].uri.ends_with("key=key"));
}

#[test]
fn build_images_skips_map_without_area_or_coordinates() {
    let raw: RawCountry = serde_json::from_value(serde_json::json!({
        "name": { "common": "Antarctica" },
        "cca3": "ATA",
        "flags": { "png": "https://flagcdn.com/w320/aq.png" },
        "latlng": [-90.0, 0.0],
        "area": 0.0
    }))
    .unwrap();
    let country = Country::from_raw(raw).unwrap();

    let images = build_images(&country, None);

    assert_eq!(images.len(), 1);
    assert_eq!(images[0].role, ImageRole::Flag);
}

#[test]
fn carousel_height_uses_default_until_measured() {
    assert_eq!(carousel_height(0), DEFAULT_CAROUSEL_HEIGHT);
    assert_eq!(carousel_height(64), 18);
    assert_eq!(carousel_height(1), 1);
}

// ===== Scroll surface =====

#[test]
fn drag_settles_after_one_quiet_tick() {
    let mut surface = ScrollSurface::new();

    surface.scroll_by(150.0, 600.0);
    assert_eq!(surface.tick(), None, "fresh input, still dragging");
    assert_eq!(surface.tick(), Some(150.0));
    assert_eq!(surface.tick(), None, "settle reported once");
}

#[test]
fn drag_is_clamped_to_strip() {
    let mut surface = ScrollSurface::new();
    surface.scroll_by(-20.0, 600.0);
    assert_eq!(surface.offset(), 0.0);
    surface.scroll_by(10_000.0, 600.0);
    assert_eq!(surface.offset(), 600.0);
}

#[test]
fn animated_command_converges_to_target() {
    let mut surface = ScrollSurface::new();
    surface.apply(ScrollCommand {
        offset: 300.0,
        animated: true,
    });

    surface.tick();
    assert_eq!(surface.offset(), 150.0);
    assert!(surface.is_animating());

    for _ in 0..20 {
        surface.tick();
    }
    assert_eq!(surface.offset(), 300.0);
    assert!(!surface.is_animating());
}

#[test]
fn settle_then_snap_round_trip() {
    let mut carousel = measured(3, 300.0);
    let mut surface = ScrollSurface::new();

    surface.scroll_by(420.0, carousel.max_offset());
    surface.tick();
    let settled = surface.tick().expect("should settle");
    carousel.on_scroll_settle(settled);
    surface.apply(ScrollCommand {
        offset: carousel.current_offset(),
        animated: true,
    });
    for _ in 0..20 {
        surface.tick();
    }

    assert_eq!(carousel.current_index(), 1);
    assert_eq!(surface.offset(), 300.0);
}

#[test]
fn surface_is_moving_until_drag_settles() {
    let mut surface = ScrollSurface::new();
    assert!(!surface.is_moving());

    surface.scroll_by(10.0, 300.0);
    assert!(surface.is_moving());
    surface.tick();
    assert!(surface.is_moving(), "fresh drag has not settled yet");
    surface.tick();
    assert!(!surface.is_moving());
}
