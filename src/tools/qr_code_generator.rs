//! QR code generator descriptor

use std::sync::Arc;

use async_trait::async_trait;

use super::{Component, ComponentLoader, Control, Icon, LoadResult, ToolDescriptor};

pub const PATH: &str = "/qrcode-generator";

pub const DEFAULT_TEXT: &str = "https://it-tools.tech";
pub const DEFAULT_FOREGROUND: &str = "#000000ff";
pub const DEFAULT_BACKGROUND: &str = "#ffffffff";

/// Error correction levels, lowest redundancy first
pub const ERROR_CORRECTION_LEVELS: [&str; 4] = ["low", "medium", "quartile", "high"];

pub struct QrCodeGeneratorLoader;

#[async_trait]
impl ComponentLoader for QrCodeGeneratorLoader {
    async fn load(&self) -> LoadResult {
        Ok(Component::new("QR Code generator")
            .with(Control::textarea("Text", DEFAULT_TEXT))
            .with(Control::color("Foreground color", DEFAULT_FOREGROUND))
            .with(Control::color("Background color", DEFAULT_BACKGROUND))
            .with(Control::select("Error resistance", ERROR_CORRECTION_LEVELS, "medium"))
            .with(Control::button("Download qr-code")))
    }
}

pub fn tool() -> ToolDescriptor {
    ToolDescriptor::new(
        "QR Code generator",
        PATH,
        "Generate and download QR-code for an url or just a text and customize the background and foreground colors.",
        Icon::QRCODE,
        Arc::new(QrCodeGeneratorLoader),
    )
    .with_keywords([
        "qr",
        "code",
        "generator",
        "square",
        "color",
        "link",
        "low",
        "medium",
        "quartile",
        "high",
        "transparent",
    ])
}
