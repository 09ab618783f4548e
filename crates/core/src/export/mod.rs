use std::{
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
};

use crate::{raster::Framebuffer, Result};

/// File name for an exported frame: both the phase index and the cycle
/// length are zero-padded to three digits.
pub fn frame_filename(phase_index: u32, total_phases: u32) -> String {
    format!("moon_phase_{phase_index:03}_of_{total_phases:03}.png")
}

/// Writes frames out as RGBA PNGs.
#[derive(Debug, Clone)]
pub struct FrameExporter {
    output_dir: PathBuf,
}

impl FrameExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Encodes `frame` into the output directory (created on demand) and
    /// returns the path of the written file.
    pub fn save(&self, frame: &Framebuffer, phase_index: u32, total_phases: u32) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(frame_filename(phase_index, total_phases));

        let file = File::create(&path)?;
        let mut encoder = png::Encoder::new(BufWriter::new(file), frame.width(), frame.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&frame.to_rgba_bytes())?;

        Ok(path)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use std::fs;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "crescent-export-{tag}-{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn filename_pads_both_numbers() {
        assert_eq!(frame_filename(7, 48), "moon_phase_007_of_048.png");
        assert_eq!(frame_filename(0, 48), "moon_phase_000_of_048.png");
        assert_eq!(frame_filename(123, 480), "moon_phase_123_of_480.png");
    }

    #[test]
    fn save_writes_a_png_into_the_output_dir() {
        let dir = scratch_dir("save");
        let exporter = FrameExporter::new(&dir);

        let mut frame = Framebuffer::new(16, 8);
        frame.fill(Rgb::new(17, 27, 61));
        let path = exporter
            .save(&frame, 7, 48)
            .expect("saving a frame should succeed");

        assert_eq!(path, dir.join("moon_phase_007_of_048.png"));
        let bytes = fs::read(&path).expect("exported file should exist");
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn save_is_idempotent_per_phase() {
        let dir = scratch_dir("idem");
        let exporter = FrameExporter::new(&dir);
        let frame = Framebuffer::new(4, 4);

        let first = exporter.save(&frame, 3, 48).expect("first save");
        let second = exporter.save(&frame, 3, 48).expect("second save");
        assert_eq!(first, second);

        let _ = fs::remove_dir_all(&dir);
    }
}
