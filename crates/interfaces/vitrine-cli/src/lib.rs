pub mod commands;

use clap::ValueEnum;
use vitrine_core::Platform;

#[derive(ValueEnum, Clone, Debug, Copy)]
pub enum CliPlatform {
    Youtube,
    Facebook,
    Instagram,
}

impl From<CliPlatform> for Platform {
    fn from(p: CliPlatform) -> Self {
        match p {
            CliPlatform::Youtube => Platform::Youtube,
            CliPlatform::Facebook => Platform::Facebook,
            CliPlatform::Instagram => Platform::Instagram,
        }
    }
}
