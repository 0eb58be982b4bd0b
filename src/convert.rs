use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use image::codecs::avif::AvifEncoder;
use image::{DynamicImage, ImageReader};
use log::{debug, info};

use crate::trim;

/// Codec knobs. Effort is on a 0 (fast) to 9 (slow) scale for both codecs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeSettings {
    pub avif_quality: u8,
    pub avif_effort: u8,
    pub webp_quality: u8,
    pub webp_effort: u8,
    pub webp_lossless: bool,
    pub trim_threshold: u8,
}

impl Default for EncodeSettings {
    fn default() -> Self {
        Self {
            avif_quality: 55,
            avif_effort: 4,
            webp_quality: 90,
            webp_effort: 4,
            webp_lossless: true,
            trim_threshold: trim::DEFAULT_THRESHOLD,
        }
    }
}

impl EncodeSettings {
    /// ravif speed runs 1..=10 with 10 fastest.
    fn avif_speed(&self) -> u8 {
        9u8.saturating_sub(self.avif_effort).clamp(1, 10)
    }

    /// libwebp method runs 0..=6 with 6 slowest.
    fn webp_method(&self) -> i32 {
        i32::from(self.webp_effort.min(6))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub avif: PathBuf,
    pub webp: PathBuf,
}

/// Siblings of `input` with its extension swapped for `.avif` and `.webp`.
pub fn output_paths(input: &Path) -> Conversion {
    Conversion {
        avif: input.with_extension("avif"),
        webp: input.with_extension("webp"),
    }
}

pub fn convert_one(input: &Path, settings: &EncodeSettings) -> Result<Conversion> {
    let start = Instant::now();
    let img = ImageReader::open(input)
        .with_context(|| format!("opening {input:?}"))?
        .with_guessed_format()
        .with_context(|| format!("reading {input:?}"))?
        .decode()
        .with_context(|| format!("decoding {input:?}"))?;
    debug!("decoded {input:?}: {}x{}", img.width(), img.height());

    let src = DynamicImage::ImageRgba8(trim::trim(&img, settings.trim_threshold).to_rgba8());
    let out = output_paths(input);

    write_avif(&out.avif, &src, settings)?;
    write_webp(&out.webp, &src, settings)?;

    info!("converted {input:?} in {:?}", start.elapsed());
    Ok(out)
}

fn write_avif(path: &Path, img: &DynamicImage, settings: &EncodeSettings) -> Result<()> {
    let mut out = tempfile_fast::Sponge::new_for(path)
        .with_context(|| format!("preparing {path:?}"))?;
    let enc =
        AvifEncoder::new_with_speed_quality(&mut out, settings.avif_speed(), settings.avif_quality);
    img.write_with_encoder(enc)
        .with_context(|| format!("encoding {path:?}"))?;
    out.commit().with_context(|| format!("writing {path:?}"))?;
    debug!("saved {path:?}");
    Ok(())
}

fn write_webp(path: &Path, img: &DynamicImage, settings: &EncodeSettings) -> Result<()> {
    let mut config = webp::WebPConfig::new().map_err(|()| anyhow!("initialising webp config"))?;
    config.lossless = i32::from(settings.webp_lossless);
    config.quality = f32::from(settings.webp_quality);
    config.method = settings.webp_method();

    let encoder = webp::Encoder::from_image(img)
        .map_err(|e| anyhow!("unsupported image for webp {path:?}: {e}"))?;
    let encoded = encoder
        .encode_advanced(&config)
        .map_err(|e| anyhow!("encoding {path:?}: {e:?}"))?;

    let mut out = tempfile_fast::Sponge::new_for(path)
        .with_context(|| format!("preparing {path:?}"))?;
    out.write_all(&encoded)
        .with_context(|| format!("writing {path:?}"))?;
    out.commit().with_context(|| format!("writing {path:?}"))?;
    debug!("saved {path:?}: {} bytes", encoded.len());
    Ok(())
}
