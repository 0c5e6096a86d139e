//! CLI argument parsing.
use clap::Parser;

/// Reads a release context from stdin, trims the messages of
/// non-conventional commits to their first line, and writes it to stdout.
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value_t = false)]
    /// Enable debug logging on stderr.
    pub debug: bool,

    #[arg(long, default_value_t = false)]
    /// Write compact JSON instead of 2-space indented output.
    pub compact: bool,
}

impl Args {
    /// Output layout selected by the arguments.
    pub fn output_format(&self) -> OutputFormat {
        if self.compact {
            OutputFormat::Compact
        } else {
            OutputFormat::Pretty
        }
    }
}

/// Layout of the JSON written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Indented with 2 spaces.
    #[default]
    Pretty,
    /// No insignificant whitespace.
    Compact,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_pretty_output() {
        let args = Args::try_parse_from(["cliff-context"]).unwrap();
        assert!(!args.debug);
        assert_eq!(args.output_format(), OutputFormat::Pretty);
    }

    #[test]
    fn parses_flags() {
        let args =
            Args::try_parse_from(["cliff-context", "--debug", "--compact"])
                .unwrap();
        assert!(args.debug);
        assert_eq!(args.output_format(), OutputFormat::Compact);
    }

    #[test]
    fn rejects_positional_arguments() {
        assert!(Args::try_parse_from(["cliff-context", "input.json"]).is_err());
    }
}
