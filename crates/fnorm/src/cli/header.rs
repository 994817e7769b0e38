use anyhow::Result;
use clap::Args;
use fnorm_name::normalize_name;
use fnorm_pack::content_disposition;

use crate::config::Config;

#[derive(Args, Clone, Debug)]
pub struct HeaderArg {
    #[arg(help = "Name to normalize and render")]
    pub name: String,
}

impl HeaderArg {
    pub fn run(self, config: &Config) -> Result<()> {
        let name = normalize_name(&self.name, &config.name);
        println!("Content-Disposition: {}", content_disposition(&name));
        Ok(())
    }
}
