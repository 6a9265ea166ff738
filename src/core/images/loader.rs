use std::collections::HashMap;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::ImageFormat;
use tracing::{info, warn};

use crate::core::images::colour_mode::ColourMode;
use crate::core::images::errors::ImageError;
use crate::core::images::slot::{ImageSlot, ImageSlots, SkippedSlot, SlotName};

pub const DEFAULT_FOOTPRINT: u32 = 200;

/// Reads slot images from disk and normalizes them to square RGBA footprints.
#[derive(Debug, Clone)]
pub struct ImageLoader {
    directory: PathBuf,
    footprint: u32,
    require_alpha: bool,
    file_names: HashMap<SlotName, String>,
}

impl ImageLoader {
    pub fn new(directory: impl Into<PathBuf>, footprint: u32) -> Result<Self, ImageError> {
        if footprint == 0 {
            return Err(ImageError::InvalidSize(footprint));
        }

        let file_names = SlotName::ALL
            .iter()
            .map(|&name| (name, name.default_file_name().to_string()))
            .collect();

        Ok(Self {
            directory: directory.into(),
            footprint,
            require_alpha: true,
            file_names,
        })
    }

    #[must_use]
    pub fn with_require_alpha(mut self, require_alpha: bool) -> Self {
        self.require_alpha = require_alpha;
        self
    }

    #[must_use]
    pub fn with_file_name(mut self, slot: SlotName, file_name: impl Into<String>) -> Self {
        self.file_names.insert(slot, file_name.into());
        self
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    #[must_use]
    pub fn path_for(&self, slot: SlotName) -> PathBuf {
        let file_name = self
            .file_names
            .get(&slot)
            .map_or(slot.default_file_name(), String::as_str);

        self.directory.join(file_name)
    }

    pub fn load_slot(&self, slot: SlotName) -> Result<ImageSlot, ImageError> {
        let path = self.path_for(slot);
        let bytes = std::fs::read(&path).map_err(|source| ImageError::Read {
            path: path.clone(),
            source,
        })?;

        let format = image::guess_format(&bytes).map_err(|source| ImageError::Decode {
            path: path.clone(),
            source,
        })?;

        // PNG palette images decode straight to RGB(A), so the header is the
        // only place the source mode is visible.
        let header_mode = if format == ImageFormat::Png {
            let mode = png_colour_mode(&path, &bytes)?;
            self.check_mode(&path, mode)?;
            Some(mode)
        } else {
            None
        };

        let decoded = image::load_from_memory_with_format(&bytes, format).map_err(|source| {
            ImageError::Decode {
                path: path.clone(),
                source,
            }
        })?;

        let mode = match header_mode {
            Some(mode) => mode,
            None => {
                let mode = ColourMode::from_decoded(decoded.color());
                self.check_mode(&path, mode)?;
                mode
            }
        };

        let rgba = decoded.into_rgba8();
        let resized = imageops::resize(&rgba, self.footprint, self.footprint, FilterType::Lanczos3);

        info!(
            slot = %slot,
            path = %path.display(),
            width = resized.width(),
            height = resized.height(),
            mode = %mode,
            "loaded image slot"
        );

        Ok(ImageSlot::new(slot, resized))
    }

    /// Loads every slot, logging and skipping the ones that fail.
    #[must_use]
    pub fn load_all(&self) -> ImageSlots {
        let mut loaded = Vec::with_capacity(SlotName::ALL.len());
        let mut skipped = Vec::new();

        for &slot in SlotName::ALL {
            match self.load_slot(slot) {
                Ok(image_slot) => loaded.push(image_slot),
                Err(err) => {
                    warn!(slot = %slot, error = %err, "skipping image slot");
                    skipped.push(SkippedSlot {
                        name: slot,
                        reason: err.to_string(),
                    });
                }
            }
        }

        ImageSlots::new(loaded, skipped)
    }

    fn check_mode(&self, path: &Path, mode: ColourMode) -> Result<(), ImageError> {
        if self.require_alpha && !mode.has_colour_and_alpha() {
            return Err(ImageError::UnsupportedColourMode {
                path: path.to_path_buf(),
                mode,
            });
        }

        Ok(())
    }
}

fn png_colour_mode(path: &Path, bytes: &[u8]) -> Result<ColourMode, ImageError> {
    let reader = png::Decoder::new(Cursor::new(bytes))
        .read_info()
        .map_err(|source| ImageError::Header {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(ColourMode::from_png(reader.info().color_type))
}
