//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Invocation of the external fixture tool
//!
//! The [`FixtureTool`] trait separates the generator loop from process
//! spawning so runs can be exercised without a real executable.

use crate::error::{FixtureError, FixtureResult};
use std::process::Command;

/// How an invocation ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvocationOutcome {
    Success,
    /// Non-zero exit, or `None` when terminated by a signal
    Exited(Option<i32>),
    LaunchFailed(String),
}

/// Result of one tool invocation together with its captured output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub outcome: InvocationOutcome,
    /// Standard output followed by standard error
    pub output: String,
}

impl Invocation {
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            outcome: InvocationOutcome::Success,
            output: output.into(),
        }
    }

    /// Convert into the captured output, or an error describing the failure
    pub fn into_result(self, program: &str) -> FixtureResult<String> {
        match self.outcome {
            InvocationOutcome::Success => Ok(self.output),
            InvocationOutcome::Exited(code) => Err(FixtureError::ToolFailed {
                status: match code {
                    Some(code) => format!("exit code {}", code),
                    None => "termination by signal".to_string(),
                },
                output: self.output,
            }),
            InvocationOutcome::LaunchFailed(reason) => Err(FixtureError::Launch {
                program: program.to_string(),
                reason,
            }),
        }
    }
}

/// Something that can materialize a fixture from an argument list
pub trait FixtureTool {
    /// Program name used in log lines
    fn program(&self) -> &str;

    /// Run the tool to completion; failures are reported, never raised
    fn invoke(&self, args: &[String]) -> Invocation;
}

/// Fixture tool backed by a real executable
#[derive(Debug, Clone)]
pub struct ExternalTool {
    program: String,
}

impl ExternalTool {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl FixtureTool for ExternalTool {
    fn program(&self) -> &str {
        &self.program
    }

    fn invoke(&self, args: &[String]) -> Invocation {
        let output = match Command::new(&self.program).args(args).output() {
            Ok(output) => output,
            Err(e) => {
                return Invocation {
                    outcome: InvocationOutcome::LaunchFailed(e.to_string()),
                    output: String::new(),
                }
            }
        };

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        let outcome = if output.status.success() {
            InvocationOutcome::Success
        } else {
            InvocationOutcome::Exited(output.status.code())
        };

        Invocation {
            outcome,
            output: combined,
        }
    }
}

/// Fixture tool that only logs the command it would have run
#[derive(Debug, Clone)]
pub struct DryRunTool {
    program: String,
}

impl DryRunTool {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl FixtureTool for DryRunTool {
    fn program(&self) -> &str {
        &self.program
    }

    fn invoke(&self, args: &[String]) -> Invocation {
        tracing::info!("Dry run: {} {}", self.program, args.join(" "));
        Invocation::success("")
    }
}
