//! Subcommands.

use aigw_core::PlatformType;
use clap::Subcommand;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "AIGW_PORT", default_value_t = aigw_axum::bootstrap::DEFAULT_PORT)]
        port: u16,
        /// Restrict CORS to these origins (repeatable); all origins when omitted
        #[arg(long = "allowed-origin")]
        allowed_origins: Vec<String>,
    },

    /// List registered platforms
    List {
        /// Platforms per page
        #[arg(long, default_value_t = 10)]
        page_size: i64,
        /// Continue from a token printed by a previous listing
        #[arg(long)]
        page_token: Option<String>,
        /// Follow page tokens until every platform is listed
        #[arg(long)]
        all: bool,
    },

    /// Register a platform
    Add {
        /// Response format: OLLAMA, DEEPSEEK or UNSPECIFIED
        #[arg(long = "type", value_parser = parse_platform_type, default_value = "UNSPECIFIED")]
        platform_type: PlatformType,
        /// Endpoint URL the prompt is posted to
        #[arg(long)]
        url: String,
        /// Bearer credential
        #[arg(long, env = "AIGW_ACCESS_KEY", hide_env_values = true)]
        access_key: String,
        /// Display name
        #[arg(long)]
        name: String,
        /// Model identifier sent with every request
        #[arg(long)]
        model: String,
        /// Free-form description
        #[arg(long, default_value = "")]
        description: String,
    },

    /// Delete a platform
    Remove {
        /// Platform ID or resource name (ai-platforms/ID)
        reference: String,
    },

    /// Ask a platform a question
    Ask {
        /// Platform ID or resource name (ai-platforms/ID)
        reference: String,
        /// Prompt text; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        prompt: Vec<String>,
    },
}

fn parse_platform_type(value: &str) -> Result<PlatformType, String> {
    PlatformType::parse(value).ok_or_else(|| {
        format!("unknown platform type '{value}' (expected OLLAMA, DEEPSEEK or UNSPECIFIED)")
    })
}

#[cfg(test)]
mod tests {
    use crate::parser::Cli;
    use clap::Parser;

    use super::*;

    #[test]
    fn test_add_parses_type_case_insensitively() {
        let cli = Cli::parse_from([
            "aigw", "add", "--type", "ollama", "--url", "http://h", "--access-key", "k",
            "--name", "local", "--model", "llama3",
        ]);
        match cli.command {
            Some(Commands::Add { platform_type, description, .. }) => {
                assert_eq!(platform_type, PlatformType::Ollama);
                assert_eq!(description, "");
            }
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn test_add_rejects_unknown_type() {
        let result = Cli::try_parse_from([
            "aigw", "add", "--type", "openai", "--url", "http://h", "--access-key", "k",
            "--name", "n", "--model", "m",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_ask_joins_prompt_words() {
        let cli = Cli::parse_from(["aigw", "ask", "ai-platforms/3", "what", "is", "6*7?"]);
        match cli.command {
            Some(Commands::Ask { reference, prompt }) => {
                assert_eq!(reference, "ai-platforms/3");
                assert_eq!(prompt.join(" "), "what is 6*7?");
            }
            _ => panic!("expected ask"),
        }
    }
}
