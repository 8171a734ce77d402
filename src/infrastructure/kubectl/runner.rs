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

use crate::infrastructure::kubectl::invocation::Invocation;
use crate::shared::error::{BrickError, Result};
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Captured output of a successful invocation.
#[derive(Debug)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

#[async_trait::async_trait]
pub trait KubectlRunner: Send + Sync {
    /// Run to completion with captured output. Non-zero exit becomes
    /// `BrickError::CommandFailed` carrying the tool's exit code and stderr.
    async fn run(&self, invocation: &Invocation) -> Result<CommandOutput>;

    /// Run with inherited stdio for interactive operations (editor, exec).
    async fn run_interactive(&self, invocation: &Invocation) -> Result<()>;
}

/// Runs the real external tool.
pub struct Kubectl {
    binary: String,
}

impl Kubectl {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

#[async_trait::async_trait]
impl KubectlRunner for Kubectl {
    async fn run(&self, invocation: &Invocation) -> Result<CommandOutput> {
        let command_line = invocation.command_line(&self.binary);
        debug!("running: {}", command_line);

        let output = Command::new(&self.binary)
            .args(invocation.args())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|source| BrickError::Spawn {
                command: command_line.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if !output.status.success() {
            // A signal death has no code; treat it as a plain failure.
            let code = output.status.code().unwrap_or(1);
            debug!("command failed: code={} stderr_len={}", code, stderr.len());
            return Err(BrickError::CommandFailed {
                command: command_line,
                code,
                stderr,
            });
        }

        debug!(
            "command finished: stdout_len={} stderr_len={}",
            stdout.len(),
            stderr.len()
        );
        Ok(CommandOutput { stdout, stderr })
    }

    async fn run_interactive(&self, invocation: &Invocation) -> Result<()> {
        let command_line = invocation.command_line(&self.binary);
        debug!("running interactive: {}", command_line);

        let status = Command::new(&self.binary)
            .args(invocation.args())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| BrickError::Spawn {
                command: command_line.clone(),
                source,
            })?;

        if !status.success() {
            let code = status.code().unwrap_or(1);
            return Err(BrickError::CommandFailed {
                command: command_line,
                code,
                stderr: String::new(),
            });
        }

        Ok(())
    }
}
