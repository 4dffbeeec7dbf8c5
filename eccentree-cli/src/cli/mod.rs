//! Command-line interface orchestration for eccentree.
//!
//! Two commands: `trees` enumerates every tree on a fixed vertex count and
//! `family` enumerates the caterpillar attachment family. Both print the
//! signature groups and, on request, a ranked member listing.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, ExploreArgs, FamilyCommand, RankedSelection,
    SpectralArg, TreesCommand, render_summary, run_cli,
};
