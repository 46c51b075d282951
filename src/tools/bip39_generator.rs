//! BIP39 passphrase generator descriptor
//!
//! Mnemonic derivation lives outside the registry; this loader only lays out
//! the UI with a freshly drawn entropy value.

use std::sync::Arc;

use async_trait::async_trait;
use rand::Rng;

use super::{Component, ComponentLoader, Control, Icon, LoadResult, ToolDescriptor};

pub const PATH: &str = "/bip39-generator";

/// Wordlist languages offered by the language selector
pub const LANGUAGES: [&str; 10] = [
    "English",
    "Chinese simplified",
    "Chinese traditional",
    "Czech",
    "French",
    "Italian",
    "Japanese",
    "Korean",
    "Portuguese",
    "Spanish",
];

/// Entropy bytes drawn for a 12-word mnemonic
const ENTROPY_BYTES: usize = 16;

/// Random entropy as lowercase hex
pub fn random_entropy() -> String {
    let mut bytes = [0u8; ENTROPY_BYTES];
    rand::rng().fill(&mut bytes);
    hex::encode(bytes)
}

pub struct Bip39GeneratorLoader;

#[async_trait]
impl ComponentLoader for Bip39GeneratorLoader {
    async fn load(&self) -> LoadResult {
        Ok(Component::new("BIP39 passphrase generator")
            .with(Control::select("Language", LANGUAGES, "English"))
            .with(Control::text("Entropy (seed)", random_entropy()))
            .with(Control::output("Passphrase (mnemonic)", ""))
            .with(Control::button("Refresh entropy"))
            .with(Control::button("Copy passphrase")))
    }
}

pub fn tool() -> ToolDescriptor {
    ToolDescriptor::new(
        "BIP39 passphrase generator",
        PATH,
        "Generate BIP39 passphrase from existing or random mnemonic, or get the mnemonic from the passphrase.",
        Icon::ALIGN_JUSTIFIED,
        Arc::new(Bip39GeneratorLoader),
    )
    .with_keywords(["BIP39", "passphrase", "generator", "mnemonic", "entropy"])
}
