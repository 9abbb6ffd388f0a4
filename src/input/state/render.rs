use crate::draw::{RasterImage, RenderError, RenderSnapshot};
use std::future::Future;

use super::DrawingSession;

impl DrawingSession {
    /// Copies the strokes and sizes needed for a render.
    ///
    /// # Errors
    /// `RenderError::InvalidState` if the display size has not been set yet.
    pub fn snapshot(&self) -> Result<RenderSnapshot, RenderError> {
        let display = self.display_size.ok_or_else(|| {
            RenderError::InvalidState("display surface size has not been set".to_string())
        })?;
        Ok(RenderSnapshot {
            strokes: self.frame.strokes().to_vec(),
            display,
            target: self.source_image,
            settings: self.render_settings,
        })
    }

    /// Rasterizes the strokes at the source image's resolution on the calling thread.
    ///
    /// Leaves the session untouched, so repeated calls give identical images.
    pub fn render(&self) -> Result<RasterImage, RenderError> {
        let image = self.snapshot()?.render()?;
        log::info!(
            "Rendered {} strokes at {}x{}",
            self.frame.strokes().len(),
            image.width(),
            image.height()
        );
        Ok(image)
    }

    /// Rasterizes on tokio's blocking pool.
    ///
    /// The snapshot is taken before this returns, so the session may be
    /// edited while the returned future is pending without affecting the
    /// result. Must be awaited inside a tokio runtime.
    pub fn render_async(
        &self,
    ) -> impl Future<Output = Result<RasterImage, RenderError>> + Send + use<> {
        let snapshot = self.snapshot();
        async move {
            let image = snapshot?.render_async().await?;
            log::info!("Rendered {}x{} in background", image.width(), image.height());
            Ok(image)
        }
    }
}
