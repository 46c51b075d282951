//! Built-in tools and their navigation categories
//!
//! Every built-in descriptor is enumerated here; registries are assembled
//! from these lists, never from module side effects.

use super::{Icon, ToolCategory, ToolDescriptor, bip39_generator, qr_code_generator, random_port_generator};

/// All built-in descriptors, in category order.
pub fn builtin_tools() -> Vec<ToolDescriptor> {
    builtin_categories().into_iter().flat_map(|c| c.components).collect()
}

/// Built-in categories, in navigation order.
pub fn builtin_categories() -> Vec<ToolCategory> {
    vec![
        ToolCategory::new("Crypto", Icon::LOCK, vec![bip39_generator::tool()]),
        ToolCategory::new("Images", Icon::PHOTO, vec![qr_code_generator::tool()]),
        ToolCategory::new("Development", Icon::CODE, vec![random_port_generator::tool()]),
    ]
}
