use std::fmt::Write as _;
use std::path::PathBuf;

use clap::Parser;

use crate::app::Catalog;
use crate::fs_op::{available, Resolver};

/// Terminal launcher for installed command-line games.
#[derive(Parser, Debug, Default)]
#[command(name = "gamehub", version, about)]
pub struct Cli {
    /// Settings file to use instead of the per-user config.toml.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write logs here instead of the per-user cache directory.
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Print every category with its installed games and exit.
    #[arg(long)]
    pub list: bool,
}

/// Plain-text report used by `--list`.
pub fn listing<R: Resolver + ?Sized>(catalog: &Catalog, resolver: &R) -> String {
    let mut out = String::new();
    for c in catalog.categories() {
        let games = available(&c.games, resolver);
        let _ = writeln!(
            out,
            "{}) {} ({} of {} installed)",
            c.key,
            c.name,
            games.len(),
            c.games.len()
        );
        if games.is_empty() {
            let _ = writeln!(out, "   (none)");
        }
        for g in games {
            let _ = writeln!(out, "   {g}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{GameCategory, Theme};
    use std::path::PathBuf;

    struct Only(&'static str);

    impl Resolver for Only {
        fn resolve(&self, name: &str) -> Option<PathBuf> {
            (name == self.0).then(|| PathBuf::from(name))
        }
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from(["gamehub", "--list", "--config", "c.toml"]).unwrap();
        assert!(cli.list);
        assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
        assert_eq!(cli.log_file, None);
    }

    #[test]
    fn listing_reports_installed_and_missing() {
        let cat = Catalog::new(vec![
            GameCategory::new("1", "Story", &["rogue", "nethack"], Theme::Story),
            GameCategory::new("2", "Action", &["nsnake"], Theme::Action),
        ])
        .unwrap();
        let text = listing(&cat, &Only("rogue"));
        assert_eq!(
            text,
            "1) Story (1 of 2 installed)\n   rogue\n2) Action (0 of 1 installed)\n   (none)\n"
        );
    }
}
