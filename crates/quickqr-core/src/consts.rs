/// QR generation service queried for every non-empty target text.
pub const DEFAULT_ENDPOINT: &str = "https://quickchart.io/qr";

/// Requested image dimensions (the service returns a square image).
pub const DEFAULT_IMAGE_SIZE: u32 = 480;

/// Filename offered when saving a generated code.
pub const DEFAULT_SAVE_NAME: &str = "qrcode.png";

/// Gray level of the placeholder square.
pub const PLACEHOLDER_GRAY: u8 = 0xe0;

/// Per-request timeout for the QR service.
pub const HTTP_TIMEOUT_SECS: u64 = 30;
