use anyhow::Result;
use clap::Args;
use fnorm_name::normalize_batch;
use serde::Serialize;

use crate::config::Config;

#[derive(Args, Clone, Debug)]
pub struct CheckArg {
    #[arg(required = true, help = "Names to normalize as one batch")]
    pub names: Vec<String>,

    #[arg(long, help = "Print JSON instead of text")]
    pub json: bool,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Mapping<'a> {
    pub original: &'a str,
    pub normalized: String,
    pub changed: bool,
}

impl CheckArg {
    pub fn run(self, config: &Config) -> Result<()> {
        let mappings = mappings(&self.names, config);
        if self.json {
            println!("{}", serde_json::to_string_pretty(&mappings)?);
        } else {
            for m in &mappings {
                let marker = if m.changed { "->" } else { "==" };
                println!("{} {marker} {}", m.original, m.normalized);
            }
        }
        Ok(())
    }
}

pub fn mappings<'a>(names: &'a [String], config: &Config) -> Vec<Mapping<'a>> {
    normalize_batch(names, &config.name)
        .into_iter()
        .zip(names)
        .map(|(normalized, original)| Mapping {
            changed: normalized != *original,
            original,
            normalized,
        })
        .collect()
}
