//! Drawing session state: strokes, history, tool and style.

use crate::config::Config;
use crate::draw::{
    Color, DirtyTracker, DisplaySize, Frame, RenderSettings, SourceImage, Stroke, StrokeStyle,
};
use crate::input::tool::Tool;
use crate::util::Rect;
use log::debug;

/// The drawing engine for one annotated photo.
///
/// Holds the stroke list (undo stack) and redo stack, the active tool and
/// style, and the sizes the rasterizer needs. All mutation happens through
/// `&mut self`, so a session has a single owner and needs no locking; renders
/// work on a snapshot (see [`DrawingSession::snapshot`]).
pub struct DrawingSession {
    /// Strokes and redo history
    pub(super) frame: Frame,
    /// Tool used by the next pointer-down
    pub(super) tool: Tool,
    /// Style baked into the next stroke
    pub(super) style: StrokeStyle,
    /// On-screen size of the photo (set by the UI after layout)
    pub(super) display_size: Option<DisplaySize>,
    /// The photo being annotated
    pub(super) source_image: SourceImage,
    /// Rasterization quality
    pub(super) render_settings: RenderSettings,
    /// Whether the preview needs to be redrawn
    pub needs_redraw: bool,
    /// Tracks dirty regions between preview renders
    pub(crate) dirty_tracker: DirtyTracker,
}

impl DrawingSession {
    /// Creates a new session with empty history.
    ///
    /// The display size starts unset and must be supplied with
    /// [`set_display_size`](Self::set_display_size) before rendering.
    pub fn new(style: StrokeStyle, tool: Tool, source_image: SourceImage) -> Self {
        debug!(
            "New drawing session for {}x{} image, tool {}",
            source_image.width(),
            source_image.height(),
            tool.name()
        );
        Self {
            frame: Frame::new(),
            tool,
            style,
            display_size: None,
            source_image,
            render_settings: RenderSettings::default(),
            needs_redraw: true,
            dirty_tracker: DirtyTracker::new(),
        }
    }

    /// Creates a session using the initial style, tool and render settings from `config`.
    pub fn from_config(config: &Config, source_image: SourceImage) -> Self {
        let mut session = Self::new(
            config.drawing.initial_style(),
            config.drawing.initial_tool(),
            source_image,
        );
        session.render_settings = config.render.settings();
        session
    }

    pub fn strokes(&self) -> &[Stroke] {
        self.frame.strokes()
    }

    pub fn redo_stack(&self) -> &[Stroke] {
        self.frame.redo_stack()
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    pub fn display_size(&self) -> Option<DisplaySize> {
        self.display_size
    }

    pub fn source_image(&self) -> SourceImage {
        self.source_image
    }

    pub fn render_settings(&self) -> RenderSettings {
        self.render_settings
    }

    pub fn can_undo(&self) -> bool {
        !self.frame.strokes().is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.frame.redo_stack().is_empty()
    }

    /// Records the on-screen size of the photo.
    ///
    /// Called by the UI once the image is laid out, and again whenever the
    /// layout changes.
    pub fn set_display_size(&mut self, width: u32, height: u32) {
        self.display_size = Some(DisplaySize::new(width, height));
        self.dirty_tracker.mark_full();
        self.needs_redraw = true;
    }

    pub fn set_render_settings(&mut self, settings: RenderSettings) {
        self.render_settings = settings;
    }

    pub fn set_color(&mut self, color: Color) {
        self.style.color = color;
    }

    pub fn set_width(&mut self, width: f64) {
        self.style.width = width;
    }

    pub fn set_alpha(&mut self, alpha: f64) {
        self.style.alpha = alpha;
    }

    pub fn set_tool(&mut self, tool: Tool) {
        debug!("Tool changed: {} -> {}", self.tool.name(), tool.name());
        self.tool = tool;
    }

    /// Moves the top stroke onto the redo stack. No-op when nothing is drawn.
    pub fn undo(&mut self) {
        if let Some(stroke) = self.frame.undo() {
            debug!("Undo {:?} stroke", stroke.kind());
            self.dirty_tracker.mark_stroke(stroke);
            self.needs_redraw = true;
        }
    }

    /// Puts the most recently undone stroke back on top. No-op when the redo
    /// stack is empty.
    pub fn redo(&mut self) {
        if let Some(stroke) = self.frame.redo() {
            debug!("Redo {:?} stroke", stroke.kind());
            self.dirty_tracker.mark_stroke(stroke);
            self.needs_redraw = true;
        }
    }

    /// Removes every stroke and all redo history.
    pub fn clear(&mut self) {
        self.frame.clear();
        self.dirty_tracker.mark_full();
        self.needs_redraw = true;
    }

    /// Drains pending dirty rectangles for the current display size.
    pub fn take_dirty_regions(&mut self) -> Vec<Rect> {
        let (width, height) = self
            .display_size
            .map(|size| {
                (
                    size.width.min(i32::MAX as u32) as i32,
                    size.height.min(i32::MAX as u32) as i32,
                )
            })
            .unwrap_or((0, 0));
        self.dirty_tracker.take_regions(width, height)
    }
}
