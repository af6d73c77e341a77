//! Command-line interface for generating synthetic networks and analysing
//! imported edge lists.

mod commands;
mod render;

pub use commands::{
    AnalyzeCommand, Cli, CliError, CommunityArgs, Command, ErdosRenyiArgs, GenerateCommand,
    GrowthArgs, GrowthRule, ModelCommand, SmallWorldArgs, run_cli,
};
pub use render::{
    AnalyzeSummary, ExecutionSummary, GenerateSummary, GraphStats, GrowthReport, NodeReport,
    render_summary,
};
