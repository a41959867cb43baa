//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use qtype_core::{PosTag, RuleTable};

use crate::output::OutputFormat;

pub mod classify;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify the question types of each line in text files
    Classify(classify::ClassifyArgs),

    /// Validate sentence and POS model files
    Validate(validate::ValidateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List the default classification rules
    Rules,

    /// List available output formats
    Formats,

    /// List the POS tagset
    Tags,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Classify(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render());
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Text printed by `qtype list`
    pub fn render(&self) -> String {
        let mut out = String::new();
        match self {
            ListCommands::Rules => {
                out.push_str("Default rules (first match wins):\n");
                for rule in RuleTable::default().rules() {
                    out.push_str(&format!("  {:<5} -> {}\n", rule.tag().code(), rule.label()));
                }
                out.push_str("Sentences matching no rule contribute nothing; ");
                out.push_str("a line with no labels is Affirmative.\n");
            }
            ListCommands::Formats => {
                out.push_str("Available output formats:\n");
                for format in OutputFormat::ALL {
                    out.push_str(&format!("  {:<9} {}\n", format.as_str(), format.description()));
                }
            }
            ListCommands::Tags => {
                out.push_str("POS tagset:\n");
                for tag in PosTag::ALL {
                    out.push_str(&format!("  {:<5} {}\n", tag.code(), tag.description()));
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Commands,
    }

    #[test]
    fn test_parse_classify() {
        let cli = TestCli::try_parse_from([
            "qtype", "classify", "-i", "a.txt", "-i", "b.txt", "-f", "json", "-t", "2", "-vv",
        ])
        .unwrap();

        match cli.command {
            Commands::Classify(args) => {
                assert_eq!(args.input, vec!["a.txt", "b.txt"]);
                assert_eq!(args.format, Some(OutputFormat::Json));
                assert_eq!(args.threads, Some(2));
                assert_eq!(args.verbose, 2);
                assert!(!args.quiet);
            }
            other => panic!("Expected Classify, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_requires_input() {
        assert!(TestCli::try_parse_from(["qtype", "classify"]).is_err());
    }

    #[test]
    fn test_validate_requires_a_model() {
        assert!(TestCli::try_parse_from(["qtype", "validate"]).is_err());
        assert!(TestCli::try_parse_from(["qtype", "validate", "--pos-model", "p.toml"]).is_ok());
    }

    #[test]
    fn test_parse_list() {
        let cli = TestCli::try_parse_from(["qtype", "list", "tags"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::List {
                subcommand: ListCommands::Tags
            }
        ));
    }

    #[test]
    fn test_list_rules() {
        let rules = ListCommands::Rules.render();
        assert!(rules.contains("WP    -> What"));
        assert!(rules.contains("WRB   -> When/Where"));
    }

    #[test]
    fn test_list_formats() {
        let formats = ListCommands::Formats.render();
        for name in ["text", "json", "markdown"] {
            assert!(formats.contains(name));
        }
    }

    #[test]
    fn test_list_tags() {
        let tags = ListCommands::Tags.render();
        assert_eq!(tags.lines().count(), PosTag::ALL.len() + 1);
        assert!(tags.contains("WP$"));
    }
}
