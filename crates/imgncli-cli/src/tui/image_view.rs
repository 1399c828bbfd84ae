//! Half-block image rendering.
//!
//! Each terminal cell shows two vertically stacked pixels: `▀` with the
//! foreground set to the top pixel and the background to the bottom one.

use std::path::{Path, PathBuf};

use anyhow::Context;
use image::DynamicImage;
use image::imageops::FilterType;
use ratatui::layout::Alignment;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

const UPPER_HALF_BLOCK: &str = "▀";

/// Caches the rendered lines for the last (path, width, height) so redraws
/// don't decode the file again.
#[derive(Debug, Default)]
pub struct ImageCache {
    key: Option<(PathBuf, u16, u16)>,
    lines: Vec<Line<'static>>,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines for `path` fitted into `width` x `height` cells.
    pub fn lines(&mut self, path: &Path, width: u16, height: u16) -> &[Line<'static>] {
        let fresh = self
            .key
            .as_ref()
            .is_some_and(|(p, w, h)| p == path && *w == width && *h == height);
        if !fresh {
            self.lines = render_file(path, width, height);
            self.key = Some((path.to_path_buf(), width, height));
        }
        &self.lines
    }
}

fn render_file(path: &Path, width: u16, height: u16) -> Vec<Line<'static>> {
    match load_image(path) {
        Ok(img) => halfblock_lines(&img, width, height),
        Err(e) => {
            let reason = format!("{e:#}");
            tracing::warn!(path = %path.display(), %reason, "Image render failed");
            vec![Line::from(format!("Unable to render image: {reason}")).alignment(Alignment::Left)]
        }
    }
}

fn load_image(path: &Path) -> anyhow::Result<DynamicImage> {
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    image::load_from_memory(&bytes).context("unsupported image data")
}

/// Render `img` into at most `width` x `height` cells, preserving aspect
/// ratio.
pub fn halfblock_lines(img: &DynamicImage, width: u16, height: u16) -> Vec<Line<'static>> {
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let fitted = img
        .resize(u32::from(width), u32::from(height) * 2, FilterType::Triangle)
        .to_rgba8();
    let (w, h) = fitted.dimensions();

    (0..h)
        .step_by(2)
        .map(|y| {
            let spans: Vec<Span<'static>> = (0..w)
                .map(|x| {
                    let top = pixel_color(fitted.get_pixel(x, y));
                    let bottom = if y + 1 < h {
                        pixel_color(fitted.get_pixel(x, y + 1))
                    } else {
                        Color::Reset
                    };
                    Span::styled(UPPER_HALF_BLOCK, Style::default().fg(top).bg(bottom))
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn pixel_color(pixel: &image::Rgba<u8>) -> Color {
    let [r, g, b, a] = pixel.0;
    if a == 0 {
        Color::Reset
    } else {
        Color::Rgb(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn two_tone(width: u32, height: u32) -> DynamicImage {
        let img = RgbaImage::from_fn(width, height, |_, y| {
            if y < height / 2 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([0, 0, 255, 255])
            }
        });
        DynamicImage::ImageRgba8(img)
    }

    #[test]
    fn test_cell_pairs_top_and_bottom_pixels() {
        let lines = halfblock_lines(&two_tone(2, 2), 2, 1);

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans.len(), 2);
        let style = lines[0].spans[0].style;
        assert_eq!(style.fg, Some(Color::Rgb(255, 0, 0)));
        assert_eq!(style.bg, Some(Color::Rgb(0, 0, 255)));
    }

    #[test]
    fn test_fits_within_area() {
        let lines = halfblock_lines(&two_tone(64, 64), 40, 10);

        // 64x64 fitted into 40x20 pixels is 20x20, so 10 rows of 20 cells.
        assert_eq!(lines.len(), 10);
        assert!(lines.iter().all(|l| l.spans.len() == 20));
    }

    #[test]
    fn test_zero_area_renders_nothing() {
        assert!(halfblock_lines(&two_tone(4, 4), 0, 5).is_empty());
        assert!(halfblock_lines(&two_tone(4, 4), 5, 0).is_empty());
    }

    #[test]
    fn test_cache_reports_unreadable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not an image").unwrap();

        let mut cache = ImageCache::new();
        let lines = cache.lines(&path, 10, 5);

        assert_eq!(lines.len(), 1);
        assert!(lines[0].to_string().starts_with("Unable to render image:"));
    }

    #[test]
    fn test_cache_renders_png_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("square.png");
        two_tone(8, 8).save(&path).unwrap();

        let mut cache = ImageCache::new();
        assert_eq!(cache.lines(&path, 8, 4).len(), 4);
        // Same key is served from cache even after the file disappears.
        std::fs::remove_file(&path).unwrap();
        assert_eq!(cache.lines(&path, 8, 4).len(), 4);
    }
}
