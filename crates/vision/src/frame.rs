//! Video frame types and processing

use crate::VisionError;

/// Decoded RGB video frame
#[derive(Debug, Clone)]
pub struct VideoFrame {
    /// RGB pixel data (width * height * 3)
    pub data: Vec<u8>,
    /// Frame width
    pub width: u32,
    /// Frame height
    pub height: u32,
    /// Capture timestamp (nanoseconds)
    pub timestamp_ns: u64,
    /// Frame sequence number
    pub sequence: u32,
}

impl VideoFrame {
    /// Create a new video frame from raw RGB data
    pub fn new(data: Vec<u8>, width: u32, height: u32, timestamp_ns: u64, sequence: u32) -> Self {
        Self {
            data,
            width,
            height,
            timestamp_ns,
            sequence,
        }
    }

    /// Get pixel at (x, y)
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y * self.width + x) * 3) as usize;
        Some([self.data[idx], self.data[idx + 1], self.data[idx + 2]])
    }

    /// Convert to grayscale (most landmark locators expect a luma plane)
    pub fn to_grayscale(&self) -> Vec<u8> {
        let mut gray = Vec::with_capacity((self.width * self.height) as usize);
        for pixel in self.data.chunks(3) {
            // Luminance formula: 0.299*R + 0.587*G + 0.114*B
            let y = (pixel[0] as f32 * 0.299
                   + pixel[1] as f32 * 0.587
                   + pixel[2] as f32 * 0.114) as u8;
            gray.push(y);
        }
        gray
    }
}

/// Decode an MJPEG frame to RGB
pub fn decode_mjpeg(
    mjpeg_data: &[u8],
    timestamp_ns: u64,
    sequence: u32,
) -> Result<VideoFrame, VisionError> {
    use image::ImageFormat;

    let img = image::load_from_memory_with_format(mjpeg_data, ImageFormat::Jpeg)
        .map_err(|e| VisionError::Decode(e.to_string()))?;
    let rgb = img.to_rgb8();

    Ok(VideoFrame {
        width: rgb.width(),
        height: rgb.height(),
        data: rgb.into_raw(),
        timestamp_ns,
        sequence,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_frame(r: u8, g: u8, b: u8) -> VideoFrame {
        let data: Vec<u8> = [r, g, b].repeat(4 * 4);
        VideoFrame::new(data, 4, 4, 0, 0)
    }

    #[test]
    fn test_pixel_access_and_bounds() {
        let frame = solid_frame(10, 20, 30);
        assert_eq!(frame.get_pixel(0, 0), Some([10, 20, 30]));
        assert_eq!(frame.get_pixel(3, 3), Some([10, 20, 30]));
        assert_eq!(frame.get_pixel(4, 0), None);
        assert_eq!(frame.get_pixel(0, 4), None);
    }

    #[test]
    fn test_grayscale_luminance() {
        let frame = solid_frame(255, 255, 255);
        let gray = frame.to_grayscale();
        assert_eq!(gray.len(), 16);
        // 0.299 + 0.587 + 0.114 = 1.0, truncation may lose one step
        assert!(gray[0] >= 254);
    }

    #[test]
    fn test_mjpeg_roundtrip() {
        use image::codecs::jpeg::JpegEncoder;

        let src = image::RgbImage::from_pixel(8, 8, image::Rgb([200, 100, 50]));
        let mut jpeg = Vec::new();
        JpegEncoder::new(&mut jpeg)
            .encode_image(&src)
            .expect("encode test jpeg");

        let frame = decode_mjpeg(&jpeg, 42, 7).expect("decode mjpeg");
        assert_eq!(frame.width, 8);
        assert_eq!(frame.height, 8);
        assert_eq!(frame.timestamp_ns, 42);
        assert_eq!(frame.sequence, 7);
        assert_eq!(frame.data.len(), 8 * 8 * 3);
    }

    #[test]
    fn test_decode_garbage_fails() {
        assert!(decode_mjpeg(&[0u8; 16], 0, 0).is_err());
    }
}
