/*
 * Copyright 2023 sukawasatoru
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use gradle_deps_diff::prelude::*;
use gradle_deps_diff::{
    diff_dependencies_string, diff_flat_dependencies_string, flatten_dependencies_string,
};
use std::io::prelude::*;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Flatten and diff the output of `gradle dependencies`
#[derive(Debug, Parser)]
#[command(about, version)]
struct Opt {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the resolved `group:artifact:version` of every library in a report
    Flat {
        /// Output of `gradle dependencies`, or `-` for stdin
        report: PathBuf,
    },

    /// Print the differences between two reports
    Diff {
        /// Compare resolved library versions instead of dependency trees
        #[arg(long)]
        flat: bool,

        /// Report before the change, or `-` for stdin
        old: PathBuf,

        /// Report after the change, or `-` for stdin
        new: PathBuf,
    },

    /// Generate shell completion
    Completion {
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Fallible<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let opt = Opt::parse();
    debug!(?opt);

    let output = match opt.cmd {
        Command::Flat { report } => flatten_dependencies_string(&read_report(&report)?),
        Command::Diff { flat, old, new } => {
            ensure!(
                !(is_stdin(&old) && is_stdin(&new)),
                "only one report can be read from stdin",
            );

            let old_report = read_report(&old)?;
            let new_report = read_report(&new)?;
            if flat {
                diff_flat_dependencies_string(&old_report, &new_report)
            } else {
                diff_dependencies_string(&old_report, &new_report).with_context(|| {
                    format!(
                        "failed to parse dependencies. old: {}, new: {}",
                        old.display(),
                        new.display(),
                    )
                })?
            }
        }
        Command::Completion { shell } => {
            clap_complete::generate(
                shell,
                &mut Opt::command(),
                env!("CARGO_BIN_NAME"),
                &mut std::io::stdout(),
            );
            return Ok(());
        }
    };

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .context("failed to write output")?;
    if !output.is_empty() && !output.ends_with('\n') {
        stdout.write_all(b"\n").context("failed to write output")?;
    }

    Ok(())
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn read_report(path: &Path) -> Fallible<String> {
    if is_stdin(path) {
        let mut report = String::new();
        std::io::stdin()
            .read_to_string(&mut report)
            .context("failed to read stdin")?;
        return Ok(report);
    }

    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
