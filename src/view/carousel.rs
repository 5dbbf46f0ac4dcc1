//! Image carousel widget.
//!
//! Terminals cannot show the images themselves, so each page is a framed
//! card naming the picture, its URI and how it fills the page. Cover pages
//! fill the whole card; contain pages sit inside a padded inset.

use super::constants::CAROUSEL_DOTS_HEIGHT;
use super::styles::Styles;
use crate::settings::{Label, Settings};
use crate::state::{display_mode, CarouselController, DisplayMode, ImageRole, ScrollSurface};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

const ACTIVE_DOT: &str = "●";
const INACTIVE_DOT: &str = "○";

pub fn role_label(role: ImageRole) -> Label {
    match role {
        ImageRole::Flag => Label::Flag,
        ImageRole::CoatOfArms => Label::CoatOfArms,
        ImageRole::Map => Label::Map,
    }
}

/// Page nearest to the surface offset. Follows the surface while it is
/// dragged or animating, and the controller otherwise.
pub fn visible_page(carousel: &CarouselController, surface: &ScrollSurface) -> usize {
    if !carousel.is_measured() || carousel.is_empty() {
        return carousel.current_index();
    }
    let last = (carousel.len() - 1) as f64;
    (surface.offset() / carousel.page_width())
        .round()
        .clamp(0.0, last) as usize
}

/// Carousel pages plus the indicator row underneath.
pub struct CarouselView<'a> {
    carousel: &'a CarouselController,
    surface: &'a ScrollSurface,
    settings: &'a Settings,
    styles: Styles,
    loading: bool,
}

impl<'a> CarouselView<'a> {
    pub fn new(
        carousel: &'a CarouselController,
        surface: &'a ScrollSurface,
        settings: &'a Settings,
        styles: Styles,
    ) -> Self {
        Self {
            carousel,
            surface,
            settings,
            styles,
            loading: false,
        }
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    fn render_page(&self, area: Rect, buf: &mut Buffer) {
        let page = visible_page(self.carousel, self.surface);
        let Some(image) = self.carousel.images().get(page) else {
            let message = if self.loading {
                self.settings.label(Label::Loading)
            } else {
                self.settings.label(Label::NotAvailable)
            };
            Paragraph::new(Span::styled(message, self.styles.muted()))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).border_style(self.styles.muted()))
                .render(area, buf);
            return;
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.styles.muted())
            .title(Span::styled(
                format!(" {} ", self.settings.label(role_label(image.role))),
                self.styles.header_title(),
            ));
        let inner = block.inner(area);
        block.render(area, buf);

        let (picture, mode) = match display_mode(image) {
            DisplayMode::Cover => (inner, "cover"),
            DisplayMode::Contain { padding } => (inset(inner, padding), "contain"),
        };

        let lines = vec![
            Line::from(Span::styled(image.uri.clone(), self.styles.detail_value())),
            Line::from(Span::styled(mode, self.styles.muted())),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().style(self.styles.alt()))
            .render(picture, buf);

        if self.carousel.shows_controls() && inner.height > 0 && inner.width > 2 {
            let y = inner.y + inner.height / 2;
            let prev_style = if self.carousel.can_go_prev() {
                self.styles.button()
            } else {
                self.styles.muted()
            };
            let next_style = if self.carousel.can_go_next() {
                self.styles.button()
            } else {
                self.styles.muted()
            };
            buf.set_string(inner.x, y, "‹", prev_style);
            buf.set_string(inner.right() - 1, y, "›", next_style);
        }
    }

    fn render_dots(&self, area: Rect, buf: &mut Buffer) {
        if !self.carousel.shows_controls() {
            return;
        }
        let current = self.carousel.current_index();
        let mut spans = Vec::with_capacity(self.carousel.len() * 2);
        for index in 0..self.carousel.len() {
            if index > 0 {
                spans.push(Span::raw(" "));
            }
            if index == current {
                spans.push(Span::styled(ACTIVE_DOT, self.styles.active_dot()));
            } else {
                spans.push(Span::styled(INACTIVE_DOT, self.styles.inactive_dot()));
            }
        }
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

impl Widget for CarouselView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dots_height = CAROUSEL_DOTS_HEIGHT.min(area.height);
        let pages = Rect {
            height: area.height - dots_height,
            ..area
        };
        let dots = Rect {
            y: pages.bottom(),
            height: dots_height,
            ..area
        };

        self.render_page(pages, buf);
        self.render_dots(dots, buf);
    }
}

/// Shrink `area` by `padding` columns on each side and half as many rows.
fn inset(area: Rect, padding: u16) -> Rect {
    let rows = padding / 2;
    let width = area.width.saturating_sub(padding * 2);
    let height = area.height.saturating_sub(rows * 2);
    if width == 0 || height == 0 {
        return area;
    }
    Rect {
        x: area.x + padding,
        y: area.y + rows,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CarouselImage, ScrollCommand};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn images(n: usize) -> Vec<CarouselImage> {
        let roles = [ImageRole::Flag, ImageRole::CoatOfArms, ImageRole::Map];
        (0..n)
            .map(|i| CarouselImage {
                uri: format!("https://img.example/{i}.png"),
                role: roles[i % roles.len()],
            })
            .collect()
    }

    fn measured(n: usize, width: f64) -> CarouselController {
        let mut carousel = CarouselController::new(images(n));
        carousel.on_layout(width);
        carousel
    }

    fn render(carousel: &CarouselController, surface: &ScrollSurface) -> String {
        let mut terminal = Terminal::new(TestBackend::new(40, 9)).unwrap();
        let settings = Settings::default();
        let styles = Styles::new(&settings);
        terminal
            .draw(|frame| {
                frame.render_widget(
                    CarouselView::new(carousel, surface, &settings, styles),
                    frame.area(),
                );
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..9)
            .map(|y| {
                (0..40)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn visible_page_follows_surface_offset() {
        let carousel = measured(3, 40.0);
        let mut surface = ScrollSurface::new();
        surface.scroll_by(45.0, carousel.max_offset());
        assert_eq!(visible_page(&carousel, &surface), 1);

        surface.scroll_by(100.0, carousel.max_offset());
        assert_eq!(visible_page(&carousel, &surface), 2, "clamped to last page");
    }

    #[test]
    fn visible_page_is_controller_page_when_unmeasured() {
        let carousel = CarouselController::new(images(3));
        assert_eq!(visible_page(&carousel, &ScrollSurface::new()), 0);
    }

    #[test]
    fn first_page_shows_flag_title_and_dots() {
        let carousel = measured(3, 40.0);
        let output = render(&carousel, &ScrollSurface::new());

        assert!(output.contains(" Flag "), "got:\n{output}");
        assert!(output.contains("cover"));
        assert!(output.contains("● ○ ○"));
        assert!(output.contains('›'));
    }

    #[test]
    fn coat_of_arms_page_is_contained() {
        let mut carousel = measured(3, 40.0);
        let mut surface = ScrollSurface::new();
        if let Some(command) = carousel.next() {
            surface.apply(ScrollCommand {
                animated: false,
                ..command
            });
        }
        let output = render(&carousel, &surface);

        assert!(output.contains(" Coat of arms "), "got:\n{output}");
        assert!(output.contains("contain"));
        assert!(output.contains("○ ● ○"));
    }

    #[test]
    fn single_image_has_no_controls() {
        let carousel = measured(1, 40.0);
        let output = render(&carousel, &ScrollSurface::new());

        assert!(!output.contains('●'));
        assert!(!output.contains('‹'));
        assert!(!output.contains('›'));
    }

    #[test]
    fn empty_carousel_shows_placeholder() {
        let carousel = measured(0, 40.0);
        let output = render(&carousel, &ScrollSurface::new());
        assert!(output.contains("N/A"));
    }

    #[test]
    fn inset_falls_back_when_too_small() {
        let area = Rect::new(0, 0, 3, 1);
        assert_eq!(inset(area, 2), area);
        assert_eq!(inset(Rect::new(0, 0, 20, 6), 2), Rect::new(2, 1, 16, 4));
    }
}
