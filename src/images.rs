//! Image loading with scale-aware decoding.

use std::path::Path;

use image::DynamicImage;

use crate::error::ResourceError;

/// Decoded bitmap paired with the pixel scale of the file it came from.
///
/// The scale marker embedded in the resolved file name (`@2x`, `@3x`) carries
/// through to the decoded value, so one logical asset always maps to one
/// correctly-scaled in-memory bitmap regardless of which variant resolved.
#[derive(Debug, Clone)]
pub struct ScaledImage {
    /// Decoded pixel data.
    pub bitmap: DynamicImage,
    /// Pixel scale the file was authored at; 1 for unsuffixed names.
    pub scale: u32,
}

impl ScaledImage {
    /// Logical (point) width after dividing out the pixel scale.
    pub fn point_width(&self) -> u32 {
        self.bitmap.width() / self.scale.max(1)
    }

    /// Logical (point) height after dividing out the pixel scale.
    pub fn point_height(&self) -> u32 {
        self.bitmap.height() / self.scale.max(1)
    }
}

/// Recover the pixel scale embedded in a file name.
///
/// `Train@2x~iphone.png` yields 2; names without a scale marker yield 1.
pub fn scale_from_file_name(name: &str) -> u32 {
    let stem = name.split('.').next().unwrap_or(name);
    for (position, _) in stem.match_indices('@') {
        let rest = &stem[position + 1..];
        let digits = rest
            .char_indices()
            .take_while(|(_, c)| c.is_ascii_digit())
            .count();
        if digits > 0 && rest[digits..].starts_with('x') {
            if let Ok(scale) = rest[..digits].parse() {
                return scale;
            }
        }
    }
    1
}

/// Decode a resolved image file, attaching the scale from its name.
///
/// Decode failures are packaging defects, reported as
/// [`ResourceError::Malformed`] rather than absence.
pub(crate) fn decode_image(path: &Path) -> Result<ScaledImage, ResourceError> {
    let bitmap = image::open(path).map_err(|source| ResourceError::Malformed {
        path: path.to_path_buf(),
        source: Box::new(source),
    })?;

    let scale = path
        .file_name()
        .and_then(|name| name.to_str())
        .map_or(1, scale_from_file_name);

    Ok(ScaledImage { bitmap, scale })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn reads_scale_markers_out_of_file_names() {
        assert_eq!(scale_from_file_name("Train.png"), 1);
        assert_eq!(scale_from_file_name("Train@2x.png"), 2);
        assert_eq!(scale_from_file_name("Train@3x~ipad.png"), 3);
        assert_eq!(scale_from_file_name("Train-568@2x~iphone.png"), 2);
        assert_eq!(scale_from_file_name("user@example.png"), 1);
        assert_eq!(scale_from_file_name("x@x.png"), 1);
    }

    #[test]
    fn decoded_images_report_point_dimensions() {
        let temp = tempdir().expect("failed to create temp dir");
        let path = temp.path().join("icon@2x.png");
        image::RgbaImage::new(8, 4)
            .save(&path)
            .expect("failed to save test image");

        let scaled = decode_image(&path).expect("image should decode");
        assert_eq!(scaled.scale, 2);
        assert_eq!(scaled.bitmap.width(), 8);
        assert_eq!(scaled.point_width(), 4);
        assert_eq!(scaled.point_height(), 2);
    }

    #[test]
    fn undecodable_files_are_malformed() {
        let temp = tempdir().expect("failed to create temp dir");
        let path = temp.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").expect("failed to write file");

        let err = decode_image(&path).expect_err("bogus bytes should fail to decode");
        assert!(matches!(err, ResourceError::Malformed { .. }));
    }
}
