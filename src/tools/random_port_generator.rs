//! Random port generator descriptor

use std::ops::RangeInclusive;
use std::sync::Arc;

use async_trait::async_trait;
use rand::Rng;

use super::{Component, ComponentLoader, Control, Icon, LoadResult, ToolDescriptor};

pub const PATH: &str = "/random-port-generator";

/// Ports above the well-known range (0-1023)
pub const PORT_RANGE: RangeInclusive<u16> = 1024..=65535;

pub fn random_port() -> u16 {
    rand::rng().random_range(PORT_RANGE)
}

pub struct RandomPortGeneratorLoader;

#[async_trait]
impl ComponentLoader for RandomPortGeneratorLoader {
    async fn load(&self) -> LoadResult {
        Ok(Component::new("Random port generator")
            .with(Control::output("Port", random_port().to_string()))
            .with(Control::button("Copy"))
            .with(Control::button("Refresh")))
    }
}

pub fn tool() -> ToolDescriptor {
    ToolDescriptor::new(
        "Random port generator",
        PATH,
        "Generate random port numbers outside of the range of \"known\" ports (0-1023).",
        Icon::SERVER,
        Arc::new(RandomPortGeneratorLoader),
    )
    .with_keywords(["system", "port", "lan", "generator", "random", "development", "computer"])
}
