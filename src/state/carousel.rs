//! Image carousel paging.
//!
//! [`CarouselController`] owns the page index of a horizontally paged image
//! strip. The page index follows the scroll surface when a drag settles and
//! drives it through [`ScrollCommand`]s for prev/next. [`ScrollSurface`] is
//! the terminal stand-in for a native scroll view: it accumulates wheel
//! scrolling, reports when it has settled, and animates commands over ticks.

use crate::model::Country;
use crate::source::static_map_url;

/// Inset, in cells, around images shown in [`DisplayMode::Contain`].
pub const CONTAIN_PADDING: u16 = 2;

/// Carousel height in rows before the first layout pass.
pub const DEFAULT_CAROUSEL_HEIGHT: u16 = 10;

/// Which picture an image is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageRole {
    Flag,
    CoatOfArms,
    Map,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselImage {
    pub uri: String,
    pub role: ImageRole,
}

/// How an image fills its page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Fill the whole page, cropping as needed.
    Cover,
    /// Fit inside the page, inset by `padding` cells.
    Contain { padding: u16 },
}

/// Request for the scroll surface to move to `offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollCommand {
    pub offset: f64,
    pub animated: bool,
}

/// Images for a country in page order: flag, coat of arms, map.
///
/// The map is only added when the country has coordinates and a positive
/// area.
pub fn build_images(country: &Country, maps_api_key: Option<&str>) -> Vec<CarouselImage> {
    let mut images = Vec::with_capacity(3);

    if let Some(uri) = &country.flag {
        images.push(CarouselImage {
            uri: uri.clone(),
            role: ImageRole::Flag,
        });
    }
    if let Some(uri) = &country.coat_of_arms {
        images.push(CarouselImage {
            uri: uri.clone(),
            role: ImageRole::CoatOfArms,
        });
    }
    if let (Some(center), Some(area)) = (country.latlng, country.area) {
        if area > 0.0 {
            images.push(CarouselImage {
                uri: static_map_url(center, Some(area), maps_api_key),
                role: ImageRole::Map,
            });
        }
    }

    images
}

/// Display mode for an image: flags and static maps cover their page,
/// everything else is contained.
pub fn display_mode(image: &CarouselImage) -> DisplayMode {
    if image.role == ImageRole::Flag || image.uri.contains("staticmap") {
        DisplayMode::Cover
    } else {
        DisplayMode::Contain {
            padding: CONTAIN_PADDING,
        }
    }
}

/// Carousel height for a measured width.
///
/// Pages are 16:9. Terminal cells are about twice as tall as they are wide,
/// so 9/16 of the width in pixels is 9/32 of the width in rows.
pub fn carousel_height(width: u16) -> u16 {
    if width == 0 {
        DEFAULT_CAROUSEL_HEIGHT
    } else {
        ((u32::from(width) * 9 + 16) / 32).max(1) as u16
    }
}

/// Paging state for one detail screen.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselController {
    images: Vec<CarouselImage>,
    current_index: usize,
    /// Zero until the first layout pass.
    page_width: f64,
}

impl CarouselController {
    pub fn new(images: Vec<CarouselImage>) -> Self {
        Self {
            images,
            current_index: 0,
            page_width: 0.0,
        }
    }

    pub fn images(&self) -> &[CarouselImage] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn page_width(&self) -> f64 {
        self.page_width
    }

    pub fn is_measured(&self) -> bool {
        self.page_width > 0.0
    }

    /// Record the measured page width. Zero, negative or non-finite widths
    /// return the controller to the unmeasured state.
    pub fn on_layout(&mut self, width: f64) {
        self.page_width = if width.is_finite() && width > 0.0 {
            width
        } else {
            0.0
        };
    }

    /// Derive the page from a settled scroll offset.
    ///
    /// Ignored while unmeasured or empty. The result is clamped, so any
    /// offset (fractional, negative, past the end) is accepted.
    pub fn on_scroll_settle(&mut self, offset_x: f64) {
        if !self.is_measured() || self.images.is_empty() || !offset_x.is_finite() {
            return;
        }
        let last = (self.images.len() - 1) as f64;
        let page = (offset_x / self.page_width).round().clamp(0.0, last);
        self.current_index = page as usize;
    }

    /// Move one page back. `None` (and no change) at the first page or while
    /// unmeasured.
    pub fn prev(&mut self) -> Option<ScrollCommand> {
        if !self.can_go_prev() {
            return None;
        }
        self.current_index -= 1;
        Some(self.command_for_current())
    }

    /// Move one page forward. `None` (and no change) at the last page or
    /// while unmeasured.
    pub fn next(&mut self) -> Option<ScrollCommand> {
        if !self.can_go_next() {
            return None;
        }
        self.current_index += 1;
        Some(self.command_for_current())
    }

    pub fn can_go_prev(&self) -> bool {
        self.is_measured() && self.current_index > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.is_measured() && self.current_index + 1 < self.images.len()
    }

    /// Prev/next controls and dots only make sense with several pages.
    pub fn shows_controls(&self) -> bool {
        self.images.len() > 1
    }

    /// Current page; 0 while unmeasured.
    pub fn current_index(&self) -> usize {
        if self.is_measured() {
            self.current_index
        } else {
            0
        }
    }

    pub fn current_image(&self) -> Option<&CarouselImage> {
        self.images.get(self.current_index())
    }

    /// Offset the surface should rest at for the current page.
    pub fn current_offset(&self) -> f64 {
        self.current_index() as f64 * self.page_width
    }

    /// Furthest offset the surface can scroll to.
    pub fn max_offset(&self) -> f64 {
        self.images.len().saturating_sub(1) as f64 * self.page_width
    }

    fn command_for_current(&self) -> ScrollCommand {
        ScrollCommand {
            offset: self.current_offset(),
            animated: true,
        }
    }
}

/// Horizontal scroll position driven by the mouse wheel and by commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollSurface {
    offset: f64,
    animation_target: Option<f64>,
    /// A drag happened and has not settled yet.
    drag_pending: bool,
    /// A drag event arrived since the last tick.
    drag_fresh: bool,
}

impl ScrollSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn is_animating(&self) -> bool {
        self.animation_target.is_some()
    }

    /// True while an animation runs or a drag waits to settle.
    pub fn is_moving(&self) -> bool {
        self.is_animating() || self.drag_pending
    }

    /// User drag by `delta`, kept within `[0, max_offset]`. Cancels any
    /// running animation.
    pub fn scroll_by(&mut self, delta: f64, max_offset: f64) {
        self.animation_target = None;
        self.offset = (self.offset + delta).clamp(0.0, max_offset.max(0.0));
        self.drag_pending = true;
        self.drag_fresh = true;
    }

    /// Follow a controller command.
    pub fn apply(&mut self, command: ScrollCommand) {
        self.drag_pending = false;
        self.drag_fresh = false;
        if command.animated {
            self.animation_target = Some(command.offset);
        } else {
            self.animation_target = None;
            self.offset = command.offset;
        }
    }

    /// Jump to `offset` without animating, e.g. after a resize.
    pub fn reset_to(&mut self, offset: f64) {
        self.apply(ScrollCommand {
            offset,
            animated: false,
        });
    }

    /// Advance one tick.
    ///
    /// Returns `Some(offset)` once, on the first tick with no new drag input
    /// after a drag: the surface has settled there. Animations move halfway
    /// to their target per tick and snap when within one cell.
    pub fn tick(&mut self) -> Option<f64> {
        if self.drag_pending {
            if self.drag_fresh {
                self.drag_fresh = false;
                return None;
            }
            self.drag_pending = false;
            return Some(self.offset);
        }

        if let Some(target) = self.animation_target {
            let distance = target - self.offset;
            if distance.abs() <= 1.0 {
                self.offset = target;
                self.animation_target = None;
            } else {
                self.offset += distance / 2.0;
            }
        }
        None
    }
}

#[cfg(test)]
#[path = "carousel_tests.rs"]
mod tests;
