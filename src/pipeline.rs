use image::RgbaImage;
use tracing::debug;

use crate::{
    canvas::{Background, Canvas},
    compose::compose,
    error::DuotileResult,
    layout::LayoutSpec,
    matting::BackgroundRemover,
    source::{self, ImageSource},
};

/// One input slot: where the image comes from and whether its background
/// should be matted out before layout.
#[derive(Clone, Debug)]
pub struct Slot {
    pub source: ImageSource,
    pub remove_background: bool,
}

/// Everything needed to produce one tile.
#[derive(Clone, Debug)]
pub struct CombineRequest {
    pub slots: [Slot; 2],
    pub background: Background,
    pub spec: LayoutSpec,
}

/// Stateless request orchestrator: load both slots, apply the optional
/// matting capability, then lay out and composite.
///
/// Capabilities are injected once at construction instead of living in
/// ambient flags; the pipeline itself holds no per-request state and can
/// be reused across requests.
pub struct Pipeline {
    remover: Option<Box<dyn BackgroundRemover>>,
}

impl Pipeline {
    /// A pipeline with no matting capability; removal requests pass
    /// through unchanged.
    pub fn new() -> Self {
        Self { remover: None }
    }

    pub fn with_background_remover(remover: Box<dyn BackgroundRemover>) -> Self {
        Self {
            remover: Some(remover),
        }
    }

    pub fn has_background_remover(&self) -> bool {
        self.remover.is_some()
    }

    #[tracing::instrument(skip(self, request), fields(size = request.spec.canvas_size))]
    pub fn run(&self, request: &CombineRequest) -> DuotileResult<Canvas> {
        let first = self.prepare(&request.slots[0])?;
        let second = self.prepare(&request.slots[1])?;
        compose(&first, &second, &request.spec, request.background)
    }

    fn prepare(&self, slot: &Slot) -> DuotileResult<RgbaImage> {
        let image = source::load_raster(&slot.source)?;
        if !slot.remove_background {
            return Ok(image);
        }
        match &self.remover {
            Some(remover) => remover.remove(&image),
            None => {
                debug!("background removal requested but no remover is installed; passing through");
                Ok(image)
            }
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
