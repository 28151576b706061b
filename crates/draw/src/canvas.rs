use corelib::app::WindowConfig;
use corelib::gfx::{Color, RectCommand, Renderer};
use corelib::math::{UVec2, Vec2, uvec2, vec2};
use image::RgbaImage;
use std::path::{Path, PathBuf};

/// Sample positions inside a pixel, rotated grid pattern
const MSAA_4X: [Vec2; 4] = [
    Vec2::new(0.375, 0.125),
    Vec2::new(0.875, 0.375),
    Vec2::new(0.125, 0.625),
    Vec2::new(0.625, 0.875),
];
const SINGLE_SAMPLE: [Vec2; 1] = [Vec2::new(0.5, 0.5)];

#[derive(Debug, Clone)]
struct Snapshots {
    dir: PathBuf,
    every: u64,
}

/// Software renderer drawing into an RGBA image.
///
/// Each presented frame is kept as an [`RgbaImage`] and can optionally be
/// written to disk as PNG every N frames.
pub struct Canvas {
    size: UVec2,
    msaa: bool,
    pixels: Vec<Color>,
    presented: RgbaImage,
    frames: u64,
    in_frame: bool,
    snapshots: Option<Snapshots>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        let size = uvec2(width, height);
        Self {
            size,
            msaa: false,
            pixels: vec![Color::TRANSPARENT; pixel_count(size)],
            presented: RgbaImage::new(width, height),
            frames: 0,
            in_frame: false,
            snapshots: None,
        }
    }

    /// Use 4 samples per pixel on shape edges
    pub fn with_msaa(mut self, enabled: bool) -> Self {
        self.msaa = enabled;
        self
    }

    /// Save a PNG of every `every` presented frame into `dir`
    pub fn with_snapshots<P: Into<PathBuf>>(mut self, dir: P, every: u64) -> Self {
        self.snapshots = Some(Snapshots {
            dir: dir.into(),
            every: every.max(1),
        });
        self
    }

    #[inline]
    pub fn size(&self) -> UVec2 {
        self.size
    }

    #[inline]
    pub fn is_msaa(&self) -> bool {
        self.msaa
    }

    /// Frames presented so far
    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Last presented frame
    #[inline]
    pub fn image(&self) -> &RgbaImage {
        &self.presented
    }

    /// Color of a pixel in the last presented frame
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        (x < self.size.x && y < self.size.y).then(|| self.presented.get_pixel(x, y).0)
    }

    /// Writes the last presented frame as PNG
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        self.presented
            .save_with_format(path, image::ImageFormat::Png)
            .map_err(|e| format!("Cannot save '{}': {e}", path.display()))
    }

    fn resize(&mut self, size: UVec2) {
        self.size = size;
        self.pixels = vec![Color::TRANSPARENT; pixel_count(size)];
        self.presented = RgbaImage::new(size.x, size.y);
    }

    fn ensure_frame(&self, op: &str) -> Result<(), String> {
        if self.in_frame {
            Ok(())
        } else {
            Err(format!("Canvas: '{op}' called outside of a frame"))
        }
    }

    fn samples(&self) -> &'static [Vec2] {
        if self.msaa { &MSAA_4X } else { &SINGLE_SAMPLE }
    }

    fn present(&mut self) -> Result<(), String> {
        let raw = self
            .pixels
            .iter()
            .flat_map(|c| c.to_rgba_u8())
            .collect::<Vec<u8>>();

        self.presented = RgbaImage::from_raw(self.size.x, self.size.y, raw)
            .ok_or_else(|| "Canvas: pixel buffer does not match its size".to_string())?;

        Ok(())
    }

    fn save_snapshot(&self) -> Result<(), String> {
        let Some(snap) = &self.snapshots else {
            return Ok(());
        };

        // frames are counted from 1, the first one is always saved
        let index = self.frames - 1;
        if index % snap.every != 0 {
            return Ok(());
        }

        let path = snap.dir.join(format!("frame_{index:05}.png"));
        self.save_png(&path)?;
        log::debug!("Canvas snapshot saved to '{}'", path.display());
        Ok(())
    }
}

#[inline]
fn pixel_count(size: UVec2) -> usize {
    size.x as usize * size.y as usize
}

impl Renderer for Canvas {
    fn init(&mut self, config: &WindowConfig) -> Result<(), String> {
        if config.size != self.size {
            self.resize(config.size);
        }
        self.msaa = config.msaa;

        if let Some(snap) = &self.snapshots {
            std::fs::create_dir_all(&snap.dir)
                .map_err(|e| format!("Cannot create '{}': {e}", snap.dir.display()))?;
        }

        log::debug!(
            "Canvas ready {}x{} msaa={} title='{}'",
            self.size.x,
            self.size.y,
            self.msaa,
            config.title
        );
        Ok(())
    }

    fn begin_frame(&mut self) -> Result<(), String> {
        if self.in_frame {
            return Err("Canvas: begin_frame called twice".to_string());
        }

        self.in_frame = true;
        Ok(())
    }

    fn clear(&mut self, color: Color) -> Result<(), String> {
        self.ensure_frame("clear")?;
        self.pixels.fill(color);
        Ok(())
    }

    fn draw_rect(&mut self, rect: &RectCommand) -> Result<(), String> {
        self.ensure_frame("draw_rect")?;

        let Some((min, max)) = rect.bounds().pixel_span(self.size) else {
            // fully outside of the surface
            return Ok(());
        };

        let inverse = rect.matrix().inverse();
        let samples = self.samples();
        let width = self.size.x as usize;

        for y in min.y..max.y {
            for x in min.x..max.x {
                let origin = vec2(x as f32, y as f32);
                let hits = samples
                    .iter()
                    .filter(|s| {
                        let local = inverse.transform_point2(origin + **s);
                        local.x >= 0.0
                            && local.y >= 0.0
                            && local.x < rect.size.x
                            && local.y < rect.size.y
                    })
                    .count();

                if hits == 0 {
                    continue;
                }

                let coverage = hits as f32 / samples.len() as f32;
                let src = rect.color.with_alpha(rect.color.a * coverage);
                let idx = y as usize * width + x as usize;
                self.pixels[idx] = src.blend_over(self.pixels[idx]);
            }
        }

        Ok(())
    }

    fn end_frame(&mut self) -> Result<(), String> {
        self.ensure_frame("end_frame")?;
        self.in_frame = false;

        self.present()?;
        self.frames += 1;
        self.save_snapshot()
    }

    fn shutdown(&mut self) {
        log::debug!("Canvas closed after {} frames", self.frames);
    }
}
