//! Workspace automation tasks.
//!
//! Run with `cargo run -p xtask -- <task>`.

use std::fs;
use std::io::Error;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "xtask", about = "Workspace automation tasks")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages into target/dist/man
    Man,
    /// Generate shell completions into target/dist/completions
    Completions,
    /// Generate both man pages and completions
    Dist,
}

fn main() -> Result<(), Error> {
    let xtask = Xtask::parse();
    match xtask.task {
        Task::Man => generate_man()?,
        Task::Completions => generate_completions()?,
        Task::Dist => {
            generate_man()?;
            generate_completions()?;
        }
    }
    Ok(())
}

fn dist_dir(kind: &str) -> Result<PathBuf, Error> {
    let dir = Path::new("target").join("dist").join(kind);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

fn generate_man() -> Result<(), Error> {
    let dir = dist_dir("man")?;
    let cmd = revlex::command();
    clap_mangen::generate_to(cmd, &dir)?;
    println!("man pages written to {}", dir.display());
    Ok(())
}

fn generate_completions() -> Result<(), Error> {
    let dir = dist_dir("completions")?;
    let mut cmd = revlex::command();
    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell] {
        clap_complete::generate_to(shell, &mut cmd, "revlex", &dir)?;
    }
    println!("completions written to {}", dir.display());
    Ok(())
}
