//! Image artifacts. The pipeline writes PNG charts; we decode enough to know
//! the bytes are sound and keep the original encoding for display.

use std::io::Cursor;

use base64::{engine::general_purpose::STANDARD, Engine};

use super::error::ArtifactError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageArtifact {
    pub width: u32,
    pub height: u32,
    bytes: Vec<u8>,
}

impl ImageArtifact {
    /// Decode header and first frame; anything malformed is a decode error.
    pub fn from_png(label: &str, bytes: Vec<u8>) -> Result<Self, ArtifactError> {
        let decode_error = |reason: String| ArtifactError::Decode {
            path: label.to_string(),
            reason,
        };

        let (width, height) = {
            let decoder = png::Decoder::new(Cursor::new(bytes.as_slice()));
            let mut reader = decoder
                .read_info()
                .map_err(|err| decode_error(err.to_string()))?;
            let mut frame = vec![0; reader.output_buffer_size()];
            let info = reader
                .next_frame(&mut frame)
                .map_err(|err| decode_error(err.to_string()))?;
            (info.width, info.height)
        };

        Ok(Self {
            width,
            height,
            bytes,
        })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Inline `src` for an `<img>` element.
    pub fn data_url(&self) -> String {
        format!("data:image/png;base64,{}", STANDARD.encode(&self.bytes))
    }
}

#[cfg(test)]
pub(crate) fn encode_test_png(width: u32, height: u32) -> Vec<u8> {
    let mut buffer = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buffer, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let pixels = vec![200u8; (width * height * 4) as usize];
        encoder
            .write_header()
            .expect("png header")
            .write_image_data(&pixels)
            .expect("png data");
    }
    buffer
}
