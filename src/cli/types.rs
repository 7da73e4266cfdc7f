use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "ghar")]
#[command(about = "Remove local branches that are gone from the remote", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Delete without asking for confirmation
    #[arg(long)]
    pub force: bool,

    /// Delete with `git branch -D` (ignores unmerged commits) instead of `-d`
    #[arg(short = 'D', long)]
    pub merged: bool,
}
