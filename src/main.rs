use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use cmake_bump::cli::{run_bump_workflow, BumpWorkflowArgs};
use cmake_bump::config;
use cmake_bump::domain::BumpKind;
use cmake_bump::logging;
use cmake_bump::outputs::ActionOutputs;
use cmake_bump::ui;
use cmake_bump::BumpError;

#[derive(clap::Parser)]
#[command(
    name = "cmake-bump",
    version,
    about = "Bump the semantic version in a CMake project file from commit message key phrases"
)]
struct Args {
    #[arg(help = "Commit message to scan for bump key phrases")]
    commit_message: Option<String>,

    #[arg(help = "Commit SHA of the triggering push")]
    commit_sha: Option<String>,

    #[arg(short, long, help = "Version file to rewrite [default: CMakeLists.txt]")]
    file: Option<PathBuf>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(
        long,
        env = "PR_DESCRIPTION",
        help = "Pull request description, classified instead of a merge commit message"
    )]
    description: Option<String>,

    #[arg(long, help = "Apply this bump (major, minor or patch) regardless of the text")]
    bump: Option<BumpKind>,

    #[arg(
        short,
        long,
        env = "GITHUB_OUTPUT",
        help = "File to append old_tag/new_tag/bumped outputs to"
    )]
    output: Option<PathBuf>,

    #[arg(long, help = "Preview the new version without modifying the file")]
    dry_run: bool,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    if let Err(err) = run(args) {
        ui::display_error(&format!("{:#}", err));
        std::process::exit(exit_code(&err));
    }
}

fn run(args: Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref()).context("Error loading config")?;

    ui::display_commit(args.commit_message.as_deref(), args.commit_sha.as_deref());

    let workflow_args = BumpWorkflowArgs {
        commit_message: args.commit_message,
        commit_sha: args.commit_sha,
        description: args.description,
        file: args.file,
        forced_bump: args.bump,
        dry_run: args.dry_run,
    };

    let outcome = run_bump_workflow(&workflow_args, &config)?;
    ui::display_version_change(&outcome);

    let outputs = ActionOutputs::from_outcome(&outcome, &config.output.tag_prefix);
    print!("{}", outputs.render());

    if let Some(path) = &args.output {
        outputs
            .append_to(path)
            .with_context(|| format!("Failed to write outputs to {}", path.display()))?;
    }

    Ok(())
}

fn exit_code(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<BumpError>())
        .map(BumpError::exit_code)
        .unwrap_or(1)
}
