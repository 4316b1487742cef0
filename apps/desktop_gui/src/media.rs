//! Image decoding for the card avatar.

/// Largest edge kept after decoding; cards draw the avatar far smaller.
const AVATAR_MAX_EDGE: u32 = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewImage {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

impl PreviewImage {
    pub fn to_color_image(&self) -> egui::ColorImage {
        egui::ColorImage::from_rgba_unmultiplied([self.width, self.height], &self.rgba)
    }
}

pub fn decode_avatar_image(bytes: &[u8]) -> Result<PreviewImage, String> {
    let dynamic = image::load_from_memory(bytes).map_err(|err| err.to_string())?;
    let resized = dynamic
        .thumbnail(AVATAR_MAX_EDGE, AVATAR_MAX_EDGE)
        .to_rgba8();
    let width = resized.width() as usize;
    let height = resized.height() as usize;
    Ok(PreviewImage {
        width,
        height,
        rgba: resized.into_raw(),
    })
}

#[cfg(test)]
#[path = "tests/media_tests.rs"]
mod tests;
