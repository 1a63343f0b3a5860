use clap::{Subcommand, ValueEnum};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API (POST /api/result)
    Serve {
        /// Port to listen on
        #[arg(long, default_value = "3000")]
        port: u16,

        /// Bind to 0.0.0.0 instead of 127.0.0.1, exposing the server on all network interfaces
        #[arg(long)]
        public: bool,
    },

    /// Submit the company details form and show the result
    Query {
        company_name: String,

        company_address: String,

        /// Any additional information about the company, industry, size, etc.
        #[arg(short, long)]
        extra_info: Option<String>,

        /// Which reviews to ask for: both, good or bad
        #[arg(short, long)]
        review_type: Option<String>,

        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show the result stored in the session file
    Result {
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Clear the stored result and start over with an empty form
    Reset,

    /// Show the built-in demonstration result
    Sample {
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}
