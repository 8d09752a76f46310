//! Lookup command CLI definitions

use clap::Subcommand;

/// Output format for property lookups
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum LookupCommand {
    /// Resolve a localized string by key (patch, expansion, then base)
    String {
        /// String key (e.g. strModEnhancedDamage)
        key: String,
    },

    /// Resolve a localized string by absolute index
    Index {
        /// 0-9999 base, 10000-19999 patch, 20000-29999 expansion
        index: i32,
    },

    /// Describe one property as it would appear on an item
    Property {
        /// Property code (e.g. dmg%, res-all, skill)
        code: String,

        /// Parameter: a number or a skill name such as skTeleport
        #[arg(short, long, default_value = "")]
        param: String,

        /// Lower bound
        #[arg(long, allow_hyphen_values = true)]
        min: Option<i32>,

        /// Upper bound
        #[arg(long, allow_hyphen_values = true)]
        max: Option<i32>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },
}
