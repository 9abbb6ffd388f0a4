//! Rasterization of the stroke list at the source image's resolution.
//!
//! Strokes are drawn at display-surface resolution first (the space pointer
//! coordinates live in) and the result is then resampled to the photo's pixel
//! dimensions. The work runs on a detached [`RenderSnapshot`] so it can be
//! moved to a blocking worker thread without sharing session state.

use super::render::render_strokes;
use super::stroke::Stroke;
use cairo::{Context, Format, ImageSurface};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;
use tokio::task;

/// Errors that can occur while rasterizing.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Image is {actual_width}x{actual_height}, expected {expected_width}x{expected_height}")]
    InvalidDimensions {
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },

    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Surface data unavailable: {0}")]
    Borrow(#[from] cairo::BorrowError),

    #[error("Render task failed: {0}")]
    Task(String),

    #[error("PNG error: {0}")]
    Png(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while describing the source photo.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Failed to open image: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode PNG: {0}")]
    Decode(String),

    #[error("Image has no pixels ({width}x{height})")]
    Empty { width: u32, height: u32 },
}

/// The photo being annotated. Only its pixel dimensions matter to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceImage {
    width: u32,
    height: u32,
}

impl SourceImage {
    /// Describes a photo of the given size. Both dimensions must be non-zero.
    pub fn new(width: u32, height: u32) -> Result<Self, ImageError> {
        if width == 0 || height == 0 || width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(ImageError::Empty { width, height });
        }
        Ok(Self { width, height })
    }

    /// Reads the dimensions of a PNG file.
    pub fn from_png(path: &Path) -> Result<Self, ImageError> {
        let mut file = File::open(path)?;
        let surface =
            ImageSurface::create_from_png(&mut file).map_err(|e| ImageError::Decode(e.to_string()))?;
        Self::new(surface.width() as u32, surface.height() as u32)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    pub fn is_portrait(&self) -> bool {
        self.width < self.height
    }
}

/// On-screen size of the photo while the user draws on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplaySize {
    pub width: u32,
    pub height: u32,
}

impl DisplaySize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    fn is_drawable(&self) -> bool {
        self.width > 0
            && self.height > 0
            && self.width <= i32::MAX as u32
            && self.height <= i32::MAX as u32
    }
}

/// Quality knobs for the two rasterization passes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderSettings {
    /// Filter used when resampling the display-sized surface
    pub filter: cairo::Filter,
    /// Antialiasing used while stroking outlines
    pub antialias: cairo::Antialias,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            filter: cairo::Filter::Good,
            antialias: cairo::Antialias::Default,
        }
    }
}

/// A self-contained copy of everything a render needs.
///
/// Taking the snapshot is the only step that touches the session; rendering
/// the snapshot can then happen on any thread.
#[derive(Clone, Debug)]
pub struct RenderSnapshot {
    pub strokes: Vec<Stroke>,
    pub display: DisplaySize,
    pub target: SourceImage,
    pub settings: RenderSettings,
}

impl RenderSnapshot {
    /// Draws the strokes at display resolution and resamples the result to the
    /// target image size.
    ///
    /// # Errors
    /// `InvalidState` when the display size has a zero dimension, or any Cairo
    /// failure.
    pub fn render(&self) -> Result<RasterImage, RenderError> {
        if !self.display.is_drawable() {
            return Err(RenderError::InvalidState(format!(
                "display surface size {}x{} is not drawable",
                self.display.width, self.display.height
            )));
        }

        let display = ImageSurface::create(
            Format::ARgb32,
            self.display.width as i32,
            self.display.height as i32,
        )?;
        {
            let ctx = Context::new(&display)?;
            ctx.set_antialias(self.settings.antialias);
            render_strokes(&ctx, &self.strokes)?;
        }
        display.flush();

        let mut target = ImageSurface::create(
            Format::ARgb32,
            self.target.width() as i32,
            self.target.height() as i32,
        )?;
        {
            let ctx = Context::new(&target)?;
            ctx.scale(
                self.target.width() as f64 / self.display.width as f64,
                self.target.height() as f64 / self.display.height as f64,
            );
            ctx.set_source_surface(&display, 0.0, 0.0)?;
            let source = ctx.source();
            source.set_filter(self.settings.filter);
            // Pad keeps edge pixels from fading to transparent when upscaling.
            source.set_extend(cairo::Extend::Pad);
            ctx.set_operator(cairo::Operator::Source);
            ctx.paint()?;
        }

        log::debug!(
            "Rasterized {} strokes at {}x{} into {}x{}",
            self.strokes.len(),
            self.display.width,
            self.display.height,
            self.target.width(),
            self.target.height()
        );
        RasterImage::from_surface(&mut target)
    }

    /// Renders on tokio's blocking pool, off the interactive thread.
    pub async fn render_async(self) -> Result<RasterImage, RenderError> {
        task::spawn_blocking(move || self.render())
            .await
            .map_err(|e| RenderError::Task(e.to_string()))?
    }
}

/// Owned ARGB32 pixels (premultiplied, native endian) of a finished render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    stride: usize,
    data: Vec<u8>,
}

impl RasterImage {
    fn from_surface(surface: &mut ImageSurface) -> Result<Self, RenderError> {
        surface.flush();
        let width = surface.width() as u32;
        let height = surface.height() as u32;
        let stride = surface.stride() as usize;
        let data = surface.data()?.to_vec();
        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Packed premultiplied ARGB value of one pixel, `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = y as usize * self.stride + x as usize * 4;
        let bytes = self.data.get(offset..offset + 4)?;
        Some(u32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn alpha_at(&self, x: u32, y: u32) -> Option<u8> {
        self.pixel(x, y).map(|px| (px >> 24) as u8)
    }

    /// True when every pixel is fully transparent.
    pub fn is_transparent(&self) -> bool {
        (0..self.height).all(|y| (0..self.width).all(|x| self.alpha_at(x, y) == Some(0)))
    }

    fn to_surface(&self) -> Result<ImageSurface, RenderError> {
        Ok(ImageSurface::create_for_data(
            self.data.clone(),
            Format::ARgb32,
            self.width as i32,
            self.height as i32,
            self.stride as i32,
        )?)
    }

    /// Encodes the annotation layer as PNG.
    pub fn write_png<W: Write>(&self, writer: &mut W) -> Result<(), RenderError> {
        self.to_surface()?
            .write_to_png(writer)
            .map_err(|e| RenderError::Png(e.to_string()))
    }

    /// Draws the annotation layer over the photo at `photo` and encodes the
    /// result as PNG. The photo must have the raster's dimensions.
    pub fn composite_over_png<W: Write>(&self, photo: &Path, writer: &mut W) -> Result<(), RenderError> {
        let mut file = File::open(photo)?;
        let base =
            ImageSurface::create_from_png(&mut file).map_err(|e| RenderError::Png(e.to_string()))?;
        let (actual_width, actual_height) = (base.width() as u32, base.height() as u32);
        if (actual_width, actual_height) != (self.width, self.height) {
            return Err(RenderError::InvalidDimensions {
                expected_width: self.width,
                expected_height: self.height,
                actual_width,
                actual_height,
            });
        }

        let overlay = self.to_surface()?;
        {
            let ctx = Context::new(&base)?;
            ctx.set_source_surface(&overlay, 0.0, 0.0)?;
            ctx.paint()?;
        }
        base.write_to_png(writer)
            .map_err(|e| RenderError::Png(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{StrokeStyle, color::RED};
    use crate::util::Point;

    fn snapshot(strokes: Vec<Stroke>, display: (u32, u32), target: (u32, u32)) -> RenderSnapshot {
        RenderSnapshot {
            strokes,
            display: DisplaySize::new(display.0, display.1),
            target: SourceImage::new(target.0, target.1).unwrap(),
            settings: RenderSettings::default(),
        }
    }

    #[test]
    fn source_image_reports_shape() {
        let portrait = SourceImage::new(300, 400).unwrap();
        assert!(portrait.is_portrait());
        assert!((portrait.aspect_ratio() - 0.75).abs() < 1e-9);
        assert!(!SourceImage::new(400, 300).unwrap().is_portrait());
        assert!(matches!(
            SourceImage::new(0, 10),
            Err(ImageError::Empty { width: 0, height: 10 })
        ));
    }

    #[test]
    fn empty_render_is_transparent_at_target_size() {
        let image = snapshot(Vec::new(), (80, 60), (400, 300)).render().unwrap();
        assert_eq!((image.width(), image.height()), (400, 300));
        assert!(image.is_transparent());
    }

    #[test]
    fn zero_display_size_is_invalid_state() {
        let err = snapshot(Vec::new(), (0, 60), (400, 300)).render().unwrap_err();
        assert!(matches!(err, RenderError::InvalidState(_)));
    }

    #[test]
    fn strokes_are_scaled_to_the_target() {
        // A horizontal line across the middle of a 100x100 display lands in
        // the middle of a 200x50 photo.
        let line = Stroke::FreeHand {
            points: vec![Point::new(0.0, 50.0), Point::new(100.0, 50.0)],
            style: StrokeStyle::new(RED, 10.0, 1.0),
        };
        let image = snapshot(vec![line], (100, 100), (200, 50)).render().unwrap();
        assert_eq!(image.alpha_at(100, 25), Some(255));
        assert_eq!(image.alpha_at(100, 2), Some(0));
        assert_eq!(image.alpha_at(100, 48), Some(0));
    }

    #[test]
    fn pixel_out_of_bounds_is_none() {
        let image = snapshot(Vec::new(), (4, 4), (4, 4)).render().unwrap();
        assert_eq!(image.pixel(4, 0), None);
        assert_eq!(image.pixel(0, 3), Some(0));
    }

    #[test]
    fn png_output_is_encoded() {
        let image = snapshot(Vec::new(), (8, 8), (16, 16)).render().unwrap();
        let mut bytes = Vec::new();
        image.write_png(&mut bytes).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }

    #[tokio::test]
    async fn async_render_matches_sync_render() {
        let circle = Stroke::circle(
            Point::new(20.0, 20.0),
            Point::new(30.0, 20.0),
            StrokeStyle::new(RED, 3.0, 0.8),
        );
        let snap = snapshot(vec![circle], (40, 40), (120, 120));
        let sync = snap.render().unwrap();
        let background = snap.render_async().await.unwrap();
        assert_eq!(sync, background);
    }
}
