use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "gallery",
    about = "Photo Gallery: browse an in-memory list of photos from a text menu",
    version,
)]
pub struct Cli {
    /// Log gallery operations to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Load gallery settings from a TOML file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Wrap from the last photo to the first (and back) when browsing
    #[arg(long)]
    pub wrap: bool,

    /// How "Display Gallery" prints the list
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Print result lines without colour (always off when stdout is not a terminal)
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_no_arguments() {
        let cli = Cli::try_parse_from(["gallery"]).unwrap();
        assert!(!cli.verbose);
        assert!(!cli.wrap);
        assert!(!cli.no_color);
        assert!(cli.config.is_none());
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["gallery", "-v"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn parse_json_format() {
        let cli = Cli::try_parse_from(["gallery", "--format", "json"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn parse_config_and_wrap() {
        let cli = Cli::try_parse_from(["gallery", "--config", "gallery.toml", "--wrap"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("gallery.toml")));
        assert!(cli.wrap);
    }

    #[test]
    fn reject_unknown_format() {
        assert!(Cli::try_parse_from(["gallery", "--format", "yaml"]).is_err());
    }
}
