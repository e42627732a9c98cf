use super::QrCodeService;
use crate::error::Error;
use base64::{prelude::BASE64_STANDARD, Engine};
use image::{ImageFormat, Luma};
use qrcode::QrCode;
use std::io::Cursor;

const DATA_URI_PREFIX: &str = "data:image/png;base64,";
const MIN_DIMENSION: u32 = 200;

#[derive(Default)]
pub struct PngQrCodeService;

impl PngQrCodeService {
    pub fn new() -> Self {
        Self
    }
}

impl QrCodeService for PngQrCodeService {
    fn encode(&self, data: &str) -> Result<String, Error> {
        let code = QrCode::new(data.as_bytes())?;
        let image = code
            .render::<Luma<u8>>()
            .min_dimensions(MIN_DIMENSION, MIN_DIMENSION)
            .build();

        let mut png = Vec::new();
        image.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
        tracing::trace!(size = png.len(), "encoded QR code");

        Ok(format!("{DATA_URI_PREFIX}{}", BASE64_STANDARD.encode(png)))
    }
}
