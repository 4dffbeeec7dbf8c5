//! Command definitions, execution and rendering for the eccentree CLI.

use std::io::{self, Write};

use clap::{Args, Parser, Subcommand, ValueEnum};
use eccentree_core::{
    AnnotatedGraph, ExecutionStrategy, Exploration, ExplorerBuilder, ExplorerError, FamilySpec,
    SpectralMethod,
};
use thiserror::Error;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "eccentree",
    about = "Group small trees by eccentricity signature and rank them by spectral radius."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Enumerate every unlabeled tree on a fixed number of vertices.
    Trees(TreesCommand),
    /// Enumerate the caterpillar attachment family.
    Family(FamilyCommand),
}

/// Options accepted by the `trees` command.
#[derive(Debug, Args, Clone)]
pub struct TreesCommand {
    /// Number of vertices per tree.
    #[arg(long = "vertices", value_parser = clap::value_parser!(usize))]
    pub vertices: usize,

    /// Shared exploration options.
    #[command(flatten)]
    pub options: ExploreArgs,
}

/// Options accepted by the `family` command.
#[derive(Debug, Args, Clone)]
pub struct FamilyCommand {
    /// Shared exploration options.
    #[command(flatten)]
    pub options: ExploreArgs,
}

/// Filtering, selection and execution options shared by every command.
#[derive(Debug, Args, Clone, Default)]
pub struct ExploreArgs {
    /// Smallest admissible radius (minimum eccentricity).
    #[arg(long = "min-eccentricity", requires = "max_eccentricity")]
    pub min_eccentricity: Option<usize>,

    /// Largest admissible diameter (maximum eccentricity).
    #[arg(long = "max-eccentricity", requires = "min_eccentricity")]
    pub max_eccentricity: Option<usize>,

    /// 1-based group whose members are ranked and printed.
    #[arg(long)]
    pub group: Option<usize>,

    /// Spectral radius algorithm.
    #[arg(long, value_enum, default_value_t = SpectralArg::Power)]
    pub spectral: SpectralArg,

    /// Compute invariants on the calling thread only.
    #[arg(long)]
    pub sequential: bool,
}

/// Spectral radius algorithms selectable from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SpectralArg {
    /// Power iteration with a dense fallback.
    #[default]
    Power,
    /// Full Jacobi eigendecomposition.
    Dense,
}

impl From<SpectralArg> for SpectralMethod {
    fn from(value: SpectralArg) -> Self {
        match value {
            SpectralArg::Power => Self::PowerIteration,
            SpectralArg::Dense => Self::Dense,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Core configuration or exploration failed.
    #[error(transparent)]
    Core(#[from] ExplorerError),
}

/// Which members of the exploration are printed in ranked order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankedSelection {
    /// Only the group listing is printed.
    None,
    /// Members of the 1-based group.
    Group(usize),
    /// Every filtered graph ranked together.
    All,
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Human-readable description of what was enumerated.
    pub mode: String,
    /// Groups, omissions and counts produced by the core.
    pub exploration: Exploration,
    /// Members to print after the group listing.
    pub selection: RankedSelection,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the configuration is rejected or the
/// exploration fails.
///
/// # Examples
/// ```
/// # use eccentree_cli::cli::{Cli, Command, ExploreArgs, TreesCommand, run_cli};
/// let cli = Cli {
///     command: Command::Trees(TreesCommand {
///         vertices: 5,
///         options: ExploreArgs::default(),
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.exploration.groups().len(), 3);
/// # Ok::<(), eccentree_cli::cli::CliError>(())
/// ```
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Trees(command) => run_trees(command),
        Command::Family(command) => run_family(command),
    }
}

pub(super) fn run_trees(command: TreesCommand) -> Result<ExecutionSummary, CliError> {
    let TreesCommand { vertices, options } = command;
    let builder = configure(ExplorerBuilder::new().with_vertex_count(vertices), &options);
    let exploration = builder.build()?.run()?;
    let selection = options
        .group
        .map_or(RankedSelection::None, RankedSelection::Group);
    Ok(ExecutionSummary {
        mode: format!("trees on {vertices} vertices"),
        exploration,
        selection,
    })
}

pub(super) fn run_family(command: FamilyCommand) -> Result<ExecutionSummary, CliError> {
    let FamilyCommand { options } = command;
    let family = FamilySpec::caterpillar();
    let mode = format!(
        "caterpillar family ({} configurations, {} vertices)",
        family.configuration_count(),
        family.vertex_count()
    );
    let builder = configure(ExplorerBuilder::new().with_family(family), &options);
    let exploration = builder.build()?.run()?;
    let selection = options
        .group
        .map_or(RankedSelection::All, RankedSelection::Group);
    Ok(ExecutionSummary {
        mode,
        exploration,
        selection,
    })
}

fn configure(builder: ExplorerBuilder, options: &ExploreArgs) -> ExplorerBuilder {
    let builder = match (options.min_eccentricity, options.max_eccentricity) {
        (Some(min_radius), Some(max_diameter)) => {
            builder.with_eccentricity_bounds(min_radius, max_diameter)
        }
        _ => builder,
    };
    let strategy = if options.sequential {
        ExecutionStrategy::Sequential
    } else {
        ExecutionStrategy::Auto
    };
    builder
        .with_spectral_method(options.spectral.into())
        .with_execution_strategy(strategy)
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    let exploration = &summary.exploration;
    writeln!(writer, "mode: {}", summary.mode)?;
    writeln!(writer, "candidates: {}", exploration.candidate_count())?;
    writeln!(writer, "filtered: {}", exploration.filtered_count())?;
    writeln!(writer, "groups: {}", exploration.groups().len())?;
    for group in exploration.groups() {
        writeln!(
            writer,
            "group {}\t{}\t{} graph(s)",
            group.sequence(),
            group.signature(),
            group.len()
        )?;
    }
    for omission in exploration.omissions() {
        writeln!(
            writer,
            "omitted #{}: {}",
            omission.index(),
            omission.error()
        )?;
    }

    match summary.selection {
        RankedSelection::None => Ok(()),
        RankedSelection::All => {
            writeln!(writer, "ranked: all")?;
            render_ranked(&exploration.ranked_all(), &mut writer)
        }
        RankedSelection::Group(sequence) => match exploration.ranked_group(sequence) {
            Some(members) => {
                writeln!(writer, "ranked: group {sequence}")?;
                render_ranked(&members, &mut writer)
            }
            None => writeln!(
                writer,
                "no group {sequence} (groups available: {})",
                exploration.groups().len()
            ),
        },
    }
}

fn render_ranked(members: &[&AnnotatedGraph], mut writer: impl Write) -> io::Result<()> {
    for (position, member) in members.iter().enumerate() {
        writeln!(
            writer,
            "{}\t#{}\trho={:.5}\t{}",
            position + 1,
            member.index(),
            member.spectral_radius(),
            member.signature()
        )?;
        if let Some(configuration) = member.configuration() {
            writeln!(writer, "\tconfiguration: {configuration}")?;
        }
        writeln!(writer, "\tedges: {}", format_edges(member.graph().edges()))?;
    }
    Ok(())
}

pub(super) fn format_edges(edges: &[(usize, usize)]) -> String {
    edges
        .iter()
        .map(|(left, right)| format!("{left}-{right}"))
        .collect::<Vec<_>>()
        .join(" ")
}
