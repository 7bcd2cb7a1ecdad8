//! HEIF/HEIC decoding.
//!
//! With the `heif` feature, files go through libheif (via `libheif-rs`):
//! read the whole file, open a context from memory, take the primary image
//! handle and decode it in whatever colour space and chroma the container
//! carries. The result is turned into an `image::DynamicImage`:
//!
//! | libheif layout | Conversion |
//! |---|---|
//! | interleaved RGB / RGBA | rows copied, stride removed |
//! | planar YCbCr 4:2:0 / 4:2:2 / 4:4:4 | [`YuvPlanes::to_rgb`] (BT.601, full range) |
//! | monochrome | luma plane copied as `Luma8` |
//!
//! The feature is on by default. Without it every HEIF file is a decode error.

use super::backend::BackendError;
use image::DynamicImage;
use std::path::Path;

#[cfg(feature = "heif")]
pub fn decode_heif(path: &Path) -> Result<DynamicImage, BackendError> {
    use libheif_rs::{Chroma, ColorSpace, HeifContext, LibHeif, RgbChroma};

    let decode_err = |message: String| BackendError::Decode {
        path: path.to_path_buf(),
        message,
    };

    let data = std::fs::read(path)?;
    let lib_heif = LibHeif::new();
    let ctx = HeifContext::read_from_bytes(&data)
        .map_err(|e| decode_err(format!("error reading HEIF data: {e}")))?;
    let handle = ctx
        .primary_image_handle()
        .map_err(|e| decode_err(format!("error getting primary HEIF image: {e}")))?;
    let heif_image = lib_heif
        .decode(&handle, ColorSpace::Undefined, None)
        .map_err(|e| decode_err(format!("error decoding HEIF image: {e}")))?;

    let planes = heif_image.planes();
    let (width, height) = (heif_image.width(), heif_image.height());

    match heif_image.color_space() {
        Some(ColorSpace::Rgb(chroma @ (RgbChroma::Rgb | RgbChroma::Rgba))) => {
            let plane = planes
                .interleaved
                .ok_or_else(|| decode_err("missing interleaved plane".into()))?;
            let channels = if chroma == RgbChroma::Rgba { 4 } else { 3 };
            let pixels = strip_stride(plane.data, plane.stride, width, height, channels);
            let img = if channels == 4 {
                image::RgbaImage::from_raw(width, height, pixels).map(DynamicImage::ImageRgba8)
            } else {
                image::RgbImage::from_raw(width, height, pixels).map(DynamicImage::ImageRgb8)
            };
            img.ok_or_else(|| decode_err("interleaved plane too small".into()))
        }
        Some(ColorSpace::YCbCr(chroma)) => {
            let (Some(y), Some(cb), Some(cr)) = (planes.y, planes.cb, planes.cr) else {
                return Err(decode_err("missing YCbCr planes".into()));
            };
            let (ss_x, ss_y) = match chroma {
                Chroma::C420 => (true, true),
                Chroma::C422 => (true, false),
                Chroma::C444 => (false, false),
            };
            let rgb = YuvPlanes {
                y: y.data,
                cb: cb.data,
                cr: cr.data,
                y_stride: y.stride,
                uv_stride: cb.stride,
                width,
                height,
                bits: y.bits_per_pixel as u32,
                wide_storage: y.storage_bits_per_pixel > 8,
                ss_x,
                ss_y,
            }
            .to_rgb();
            image::RgbImage::from_raw(width, height, rgb)
                .map(DynamicImage::ImageRgb8)
                .ok_or_else(|| decode_err("YCbCr conversion size mismatch".into()))
        }
        Some(ColorSpace::Monochrome) => {
            let y = planes
                .y
                .ok_or_else(|| decode_err("missing luma plane".into()))?;
            let luma = strip_stride(y.data, y.stride, width, height, 1);
            image::GrayImage::from_raw(width, height, luma)
                .map(DynamicImage::ImageLuma8)
                .ok_or_else(|| decode_err("luma plane too small".into()))
        }
        other => Err(decode_err(format!("unsupported HEIF layout {other:?}"))),
    }
}

#[cfg(not(feature = "heif"))]
pub fn decode_heif(path: &Path) -> Result<DynamicImage, BackendError> {
    Err(BackendError::Decode {
        path: path.to_path_buf(),
        message: "HEIF support not compiled in (built without the default `heif` feature)".into(),
    })
}

/// Copy `height` rows of `width * channels` bytes out of a padded buffer.
#[cfg_attr(not(feature = "heif"), allow(dead_code))]
fn strip_stride(data: &[u8], stride: usize, width: u32, height: u32, channels: usize) -> Vec<u8> {
    let row_len = width as usize * channels;
    let mut out = Vec::with_capacity(row_len * height as usize);
    for row in data.chunks(stride.max(1)).take(height as usize) {
        out.extend_from_slice(&row[..row_len.min(row.len())]);
    }
    out
}

/// Planar YCbCr samples as decoded by libheif.
#[cfg_attr(not(feature = "heif"), allow(dead_code))]
struct YuvPlanes<'a> {
    y: &'a [u8],
    cb: &'a [u8],
    cr: &'a [u8],
    y_stride: usize,
    uv_stride: usize,
    width: u32,
    height: u32,
    /// Significant bits per sample (8, 10, 12).
    bits: u32,
    /// Samples stored as native-endian u16 rather than u8.
    wide_storage: bool,
    /// Chroma subsampling: horizontal, vertical (e.g. 4:2:0 = true, true)
    ss_x: bool,
    ss_y: bool,
}

#[cfg_attr(not(feature = "heif"), allow(dead_code))]
impl YuvPlanes<'_> {
    /// Convert to interleaved RGB8 using BT.601 coefficients.
    fn to_rgb(&self) -> Vec<u8> {
        let bits = self.bits.clamp(1, 16);
        let max_val = ((1u32 << bits) - 1) as f32;
        let center = (1u32 << (bits - 1)) as f32;
        let scale = 255.0 / max_val;

        let mut rgb = vec![0u8; (self.width * self.height * 3) as usize];

        for row in 0..self.height {
            for col in 0..self.width {
                let y_val = self.sample(self.y, self.y_stride, col, row);
                let c_col = if self.ss_x { col / 2 } else { col };
                let c_row = if self.ss_y { row / 2 } else { row };
                let cb = self.sample(self.cb, self.uv_stride, c_col, c_row) - center;
                let cr = self.sample(self.cr, self.uv_stride, c_col, c_row) - center;

                let r = ((y_val + 1.402 * cr) * scale).clamp(0.0, 255.0);
                let g = ((y_val - 0.344136 * cb - 0.714136 * cr) * scale).clamp(0.0, 255.0);
                let b = ((y_val + 1.772 * cb) * scale).clamp(0.0, 255.0);

                let idx = ((row * self.width + col) * 3) as usize;
                rgb[idx] = r.round() as u8;
                rgb[idx + 1] = g.round() as u8;
                rgb[idx + 2] = b.round() as u8;
            }
        }

        rgb
    }

    /// Read one sample; out-of-range reads yield 0.
    fn sample(&self, plane: &[u8], stride: usize, x: u32, y: u32) -> f32 {
        let row = y as usize * stride;
        if self.wide_storage {
            let at = row + x as usize * 2;
            plane
                .get(at..at + 2)
                .map(|b| u16::from_ne_bytes([b[0], b[1]]) as f32)
                .unwrap_or(0.0)
        } else {
            plane.get(row + x as usize).copied().unwrap_or(0) as f32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planes<'a>(y: &'a [u8], cb: &'a [u8], cr: &'a [u8], w: u32, h: u32) -> YuvPlanes<'a> {
        YuvPlanes {
            y,
            cb,
            cr,
            y_stride: w as usize,
            uv_stride: w.div_ceil(2) as usize,
            width: w,
            height: h,
            bits: 8,
            wide_storage: false,
            ss_x: true,
            ss_y: true,
        }
    }

    #[test]
    fn neutral_chroma_gives_grey() {
        let y = [0u8, 128, 255, 64];
        let rgb = planes(&y, &[128], &[128], 2, 2).to_rgb();

        assert_eq!(rgb, vec![0, 0, 0, 128, 128, 128, 255, 255, 255, 64, 64, 64]);
    }

    #[test]
    fn strong_red_chroma() {
        let rgb = planes(&[76, 76], &[85], &[255], 2, 1).to_rgb();
        // BT.601: Y=76 Cb=85 Cr=255 is close to pure red
        assert!(rgb[0] > 240, "{rgb:?}");
        assert!(rgb[1] < 10, "{rgb:?}");
        assert!(rgb[2] < 10, "{rgb:?}");
    }

    #[test]
    fn ten_bit_samples_are_scaled() {
        let to_bytes = |v: &[u16]| v.iter().flat_map(|s| s.to_ne_bytes()).collect::<Vec<u8>>();
        let y = to_bytes(&[1023]);
        let c = to_bytes(&[512]);
        let yuv = YuvPlanes {
            y: &y,
            cb: &c,
            cr: &c,
            y_stride: 2,
            uv_stride: 2,
            width: 1,
            height: 1,
            bits: 10,
            wide_storage: true,
            ss_x: false,
            ss_y: false,
        };

        assert_eq!(yuv.to_rgb(), vec![255, 255, 255]);
    }

    #[test]
    fn strip_stride_drops_padding() {
        let padded = [1, 2, 3, 0, 4, 5, 6, 0];
        assert_eq!(strip_stride(&padded, 4, 1, 2, 3), vec![1, 2, 3, 4, 5, 6]);
    }

    #[cfg(feature = "heif")]
    #[test]
    fn decodes_heic_through_libheif() {
        let tmp = tempfile::TempDir::new().unwrap();
        let src = tmp.path().join("IMG_0001.HEIC");
        crate::test_helpers::write_heic(&src, 320, 240, [200, 60, 40]);

        let img = decode_heif(&src).unwrap();

        assert_eq!((img.width(), img.height()), (320, 240));
        let px = img.to_rgb8().get_pixel(160, 120).0;
        for (got, want) in px.iter().zip([200u8, 60, 40]) {
            assert!(got.abs_diff(want) <= 16, "{px:?}");
        }
    }

    #[cfg(feature = "heif")]
    #[test]
    fn garbage_heic_is_decode_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let src = tmp.path().join("broken.heic");
        std::fs::write(&src, b"not a heif container").unwrap();

        assert!(matches!(decode_heif(&src), Err(BackendError::Decode { .. })));
    }

    #[cfg(not(feature = "heif"))]
    #[test]
    fn heif_without_feature_is_decode_error() {
        let err = decode_heif(Path::new("/photos/IMG_0001.HEIC")).unwrap_err();
        assert!(matches!(err, BackendError::Decode { .. }));
        assert!(err.to_string().contains("HEIF support not compiled in"));
    }
}
