use crate::error::Error;

#[cfg_attr(test, mockall::automock)]
pub trait QrCodeService: Send + Sync {
    ///
    /// Encode data as QR code image
    ///
    /// ### Returns
    /// Image as `data:` URI that can be used directly as `<img>` source
    ///
    fn encode(&self, data: &str) -> Result<String, Error>;
}
