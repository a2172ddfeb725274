//! QR encoding of a payload into a grayscale raster, a PNG file or a terminal string.
//!
//! Symbol construction is delegated to the `qrcode` crate. This module only picks the error
//! correction level and draws the modules.

use std::{
    fs::{self, File},
    io::{BufWriter, Seek, Write},
    path::Path,
};

use image::{GrayImage, ImageFormat, Luma};
use qrcode::{Color, EcLevel, QrCode};
use tracing::{debug, info};

use crate::error::{BibleQRError, BibleQRResult};

/// Width of the blank margin around the symbol, in modules.
pub const QUIET_ZONE: u32 = 4;

/// Largest raster `render` will allocate, in pixels (64 MiB of grayscale).
pub const MAX_PIXELS: u64 = 1 << 26;

// Error correction level
//------------------------------------------------------------------------------

/// Error correction level. Higher levels survive more damage at the cost of a larger symbol.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, clap::ValueEnum)]
pub enum ECLevel {
    L,
    M,
    Q,
    #[default]
    H,
}

impl From<ECLevel> for EcLevel {
    fn from(ecl: ECLevel) -> Self {
        match ecl {
            ECLevel::L => EcLevel::L,
            ECLevel::M => EcLevel::M,
            ECLevel::Q => EcLevel::Q,
            ECLevel::H => EcLevel::H,
        }
    }
}

// Encode
//------------------------------------------------------------------------------

fn encode(payload: &str, ecl: ECLevel) -> BibleQRResult<QrCode> {
    debug!("Encoding {} bytes at ec level {ecl:?}...", payload.len());
    let code = QrCode::with_error_correction_level(payload.as_bytes(), ecl.into())?;
    debug!("Encoded as {:?}, {} modules wide", code.version(), code.width());
    Ok(code)
}

/// Renders `payload` as a QR code, `scale` pixels per module, inside a white quiet zone.
pub fn render(payload: &str, scale: u32, ecl: ECLevel) -> BibleQRResult<GrayImage> {
    if scale == 0 {
        return Err(BibleQRError::InvalidScale(scale));
    }
    let code = encode(payload, ecl)?;

    let w = code.width() as u32;
    let qz_sz = QUIET_ZONE.checked_mul(scale).ok_or(BibleQRError::InvalidScale(scale))?;
    let total_sz = w
        .checked_mul(scale)
        .and_then(|qr_sz| qr_sz.checked_add(qz_sz.checked_mul(2)?))
        .filter(|&sz| u64::from(sz) * u64::from(sz) <= MAX_PIXELS)
        .ok_or(BibleQRError::InvalidScale(scale))?;

    let mut canvas = GrayImage::from_pixel(total_sz, total_sz, Luma([255]));
    for (i, clr) in code.to_colors().into_iter().enumerate() {
        if clr != Color::Dark {
            continue;
        }
        let r = i as u32 / w;
        let c = i as u32 % w;
        for dy in 0..scale {
            for dx in 0..scale {
                canvas.put_pixel(qz_sz + c * scale + dx, qz_sz + r * scale + dy, Luma([0]));
            }
        }
    }

    Ok(canvas)
}

/// Encodes `payload` and writes it as a PNG to `path`.
///
/// The PNG is written to a temporary file next to `path` and renamed over it once complete, so a
/// failure at any step leaves an existing file at `path` untouched. Targets that exist but are not
/// regular files (devices, pipes) are written in place.
///
/// # Errors
///
/// [`BibleQRError::Encoding`] if the payload does not fit in a QR code,
/// [`BibleQRError::InvalidScale`] for a zero or oversized scale, and [`BibleQRError::Io`] or
/// [`BibleQRError::Image`] if the file cannot be written.
pub fn encode_to_png<P: AsRef<Path>>(
    payload: &str,
    path: P,
    scale: u32,
    ecl: ECLevel,
) -> BibleQRResult<()> {
    let path = path.as_ref();
    let img = render(payload, scale, ecl)?;

    debug!("Writing {}x{} PNG...", img.width(), img.height());
    match fs::metadata(path) {
        Ok(meta) if !meta.is_file() => {
            write_png(&img, File::create(path)?)?;
        }
        _ => {
            let dir = match path.parent() {
                Some(p) if !p.as_os_str().is_empty() => p,
                _ => Path::new("."),
            };
            let tmp = write_png(&img, tempfile::NamedTempFile::new_in(dir)?)?;
            // Temp files are created 0600
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                tmp.as_file().set_permissions(fs::Permissions::from_mode(0o644))?;
            }
            tmp.as_file().sync_all()?;
            tmp.persist(path).map_err(|e| e.error)?;
        }
    }

    info!("Saved QR code to {}", path.display());
    Ok(())
}

/// Writes `img` as a PNG into `sink` and flushes it, returning the sink.
pub(crate) fn write_png<W: Write + Seek>(img: &GrayImage, sink: W) -> BibleQRResult<W> {
    let mut writer = BufWriter::new(sink);
    img.write_to(&mut writer, ImageFormat::Png).map_err(|e| match e {
        image::ImageError::IoError(e) => BibleQRError::Io(e),
        e => BibleQRError::Image(e),
    })?;
    writer.into_inner().map_err(|e| BibleQRError::Io(e.into_error()))
}

/// Draws `payload` as a QR code with block characters, two per module so the symbol stays square.
pub fn to_str(payload: &str, ecl: ECLevel) -> BibleQRResult<String> {
    let code = encode(payload, ecl)?;
    let w = code.width();
    let qz = QUIET_ZONE as usize;
    let total_sz = qz + w + qz;

    let mut canvas = String::with_capacity(total_sz * (total_sz * 2 + 1));
    for i in 0..total_sz {
        for j in 0..total_sz {
            let inside = (qz..qz + w).contains(&i) && (qz..qz + w).contains(&j);
            let dark = inside && code[(j - qz, i - qz)] == Color::Dark;
            // Inverted: light modules are the blocks, for dark terminal backgrounds
            canvas.push_str(if dark { "  " } else { "██" });
        }
        canvas.push('\n');
    }

    Ok(canvas)
}
