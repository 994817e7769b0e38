use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::cli::check::CheckArg;
use crate::cli::header::HeaderArg;
use crate::cli::pack::PackArg;

#[derive(Debug, Parser)]
#[command(name = "fnorm", version = env!("CARGO_PKG_VERSION"), about, long_about = None, propagate_version = true)]
pub struct App {
    #[arg(long, global = true, help = "Config file (default: ./fnorm.toml if present)")]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, action = ArgAction::Count, help = "Raise log verbosity")]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(alias = "p", name = "pack", about = "Normalize files and write a single file or a zip archive")]
    Pack(PackArg),
    #[command(alias = "c", name = "check", about = "Show how a batch of names would be normalized")]
    Check(CheckArg),
    #[command(name = "header", about = "Print the Content-Disposition header for a name")]
    Header(HeaderArg),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        App::command().debug_assert();
    }

    #[test]
    fn parses_pack_flags() {
        let app = App::try_parse_from([
            "fnorm", "-vv", "pack", "a.txt", "b.txt", "--force-archive", "-o", "out",
        ])
        .unwrap();
        assert_eq!(app.verbose, 2);
        let Commands::Pack(arg) = app.cmd else {
            panic!("expected pack");
        };
        assert_eq!(arg.files.len(), 2);
        assert!(arg.force_archive);
        assert_eq!(arg.out_dir, PathBuf::from("out"));
    }

    #[test]
    fn pack_requires_files() {
        assert!(App::try_parse_from(["fnorm", "pack"]).is_err());
    }
}
