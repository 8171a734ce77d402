// Copyright 2025 Brickctl Team.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use brickctl::cli::{commands::Commands, CliArgs};
use brickctl::domain::config::BrickConf;
use brickctl::shared::BrickError;
use clap::Parser;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let args = CliArgs::parse();

    if let Err(err) = run(args).await {
        report(&err);
        std::process::exit(exit_code(&err));
    }
}

async fn run(args: CliArgs) -> anyhow::Result<()> {
    let conf = BrickConf::load()?;

    match args.command {
        Commands::Get(cmd) => cmd.execute(&conf).await,
        Commands::Create(cmd) => cmd.execute(&conf).await,
        Commands::Delete(cmd) => cmd.execute(&conf).await,
        Commands::Apply(cmd) => cmd.execute(&conf).await,
        Commands::Describe(cmd) => cmd.execute(&conf).await,
        Commands::Logs(cmd) => cmd.execute(&conf).await,
        Commands::Edit(cmd) => cmd.execute(&conf).await,
        Commands::Rollout(cmd) => cmd.execute(&conf).await,
        Commands::Scale(cmd) => cmd.execute(&conf).await,
        Commands::Taint(cmd) => cmd.execute(&conf).await,
        Commands::Top(cmd) => cmd.execute(&conf).await,
        Commands::Annotate(cmd) => cmd.execute(&conf).await,
        Commands::Cordon(cmd) => cmd.execute(&conf).await,
        Commands::Uncordon(cmd) => cmd.execute(&conf).await,
        Commands::Drain(cmd) => cmd.execute(&conf).await,
        Commands::Label(cmd) => cmd.execute(&conf).await,
        Commands::Exec(cmd) => cmd.execute(&conf).await,
        Commands::Expose(cmd) => cmd.execute(&conf).await,
        Commands::Services(cmd) => cmd.execute(&conf).await,
        Commands::ServiceAccount(cmd) => cmd.execute(&conf).await,
        Commands::StatefulSets(cmd) => cmd.execute(&conf).await,
    }
}

/// External-tool failures relay the tool's stderr; everything else prints the
/// error chain.
fn report(err: &anyhow::Error) {
    match err.downcast_ref::<BrickError>() {
        Some(BrickError::CommandFailed { stderr, .. }) if !stderr.trim().is_empty() => {
            eprintln!("Error: {}", stderr.trim());
        }
        // Local usage errors carry their full message already
        Some(err @ BrickError::UnsupportedResource(_)) | Some(err @ BrickError::InvalidInput(_)) => {
            eprintln!("{}", err);
        }
        _ => eprintln!("Error: {:#}", err),
    }
}

fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<BrickError>()
        .map(BrickError::exit_code)
        .unwrap_or(1)
}
