//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Fixture generation loop
//!
//! Each iteration samples a record, creates its directory, builds the tool
//! arguments and invokes the tool. A failing iteration is logged and counted;
//! the loop always moves on to the next one.

use crate::arguments::build_arguments;
use crate::error::{FixtureError, FixtureResult};
use crate::generators::RecordGenerator;
use crate::models::ProjectRecord;
use crate::runner::FixtureTool;
use std::path::Path;
use tracing::{debug, error, info, warn};

/// Outcome counters for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub requested: usize,
    pub succeeded: usize,
    pub failed: usize,
}

/// Drives record generation and fixture creation
pub struct FixtureGenerator<T: FixtureTool> {
    records: RecordGenerator,
    tool: T,
}

impl<T: FixtureTool> FixtureGenerator<T> {
    pub fn new(records: RecordGenerator, tool: T) -> Self {
        Self { records, tool }
    }

    /// Generate `count` records under `base_dir` and materialize each one
    pub fn run(&mut self, count: usize, base_dir: &Path) -> RunSummary {
        let mut summary = RunSummary {
            requested: count,
            ..RunSummary::default()
        };

        if count == 0 {
            warn!("Nothing to generate: count is 0");
        }

        for project in 1..=count {
            match self.run_iteration(project, base_dir) {
                Ok(()) => summary.succeeded += 1,
                Err(_) => summary.failed += 1,
            }
        }

        info!(
            requested = summary.requested,
            succeeded = summary.succeeded,
            failed = summary.failed,
            "Fixture generation finished"
        );
        summary
    }

    fn run_iteration(&mut self, project: usize, base_dir: &Path) -> FixtureResult<()> {
        let title = self.records.generate_title();
        let result = self
            .records
            .generate_record_titled(title.clone(), base_dir)
            .and_then(|record| self.materialize(project, &record));

        match result {
            Ok(()) => {
                info!("Project {} ({:?}) created successfully", project, title);
                Ok(())
            }
            Err(e) => {
                error!(
                    project,
                    title = %title,
                    error = %e,
                    output = e.output().unwrap_or_default(),
                    "Project {} ({:?}) failed",
                    project,
                    title
                );
                Err(e)
            }
        }
    }

    fn materialize(&self, project: usize, record: &ProjectRecord) -> FixtureResult<()> {
        std::fs::create_dir_all(&record.directory).map_err(|source| {
            FixtureError::CreateDirectory {
                path: record.directory.clone(),
                source,
            }
        })?;

        if let Ok(json) = serde_json::to_string(record) {
            debug!("Project {}: record {}", project, json);
        }

        let args = build_arguments(record);
        info!(
            "Project {}: Executing: {} {}",
            project,
            self.tool.program(),
            args.join(" ")
        );

        let output = self.tool.invoke(&args).into_result(self.tool.program())?;
        if !output.is_empty() {
            debug!("Project {}: tool output: {}", project, output.trim_end());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::runner::{Invocation, InvocationOutcome};
    use mockall::*;
    use std::sync::{Arc, Mutex};

    mock! {
        Tool {}

        impl FixtureTool for Tool {
            fn program(&self) -> &str;
            fn invoke(&self, args: &[String]) -> Invocation;
        }
    }

    fn records(seed: u64) -> RecordGenerator {
        RecordGenerator::new(GeneratorConfig {
            seed: Some(seed),
            ..GeneratorConfig::default()
        })
        .unwrap()
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    /// Run with an info-level subscriber and return everything it printed
    fn run_with_logs<T: FixtureTool>(
        generator: &mut FixtureGenerator<T>,
        count: usize,
        base_dir: &Path,
    ) -> (RunSummary, String) {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let summary =
            tracing::subscriber::with_default(subscriber, || generator.run(count, base_dir));
        (summary, logs.text())
    }

    fn program_name(tool: &mut MockTool) {
        tool.expect_program().return_const("episko_cli".to_string());
    }

    #[test]
    fn test_zero_count_never_invokes() {
        let base = tempfile::tempdir().unwrap();
        let mut tool = MockTool::new();
        program_name(&mut tool);
        tool.expect_invoke().times(0);

        let mut generator = FixtureGenerator::new(records(1), tool);
        let summary = generator.run(0, base.path());

        assert_eq!(summary, RunSummary::default());
        assert_eq!(std::fs::read_dir(base.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_each_iteration_creates_directory_and_invokes() {
        let base = tempfile::tempdir().unwrap();
        let mut tool = MockTool::new();
        program_name(&mut tool);
        tool.expect_invoke()
            .times(4)
            .withf(|args: &[String]| args.len() >= 6 && args[0] == "create" && args[1] == "-n")
            .returning(|_| Invocation::success("ok"));

        let mut generator = FixtureGenerator::new(records(7), tool);
        let summary = generator.run(4, base.path());

        assert_eq!(
            summary,
            RunSummary {
                requested: 4,
                succeeded: 4,
                failed: 0
            }
        );
        for entry in std::fs::read_dir(base.path()).unwrap() {
            let entry = entry.unwrap();
            assert!(entry.file_type().unwrap().is_dir());
            assert!(!entry.file_name().to_string_lossy().contains(' '));
        }
    }

    #[test]
    fn test_tool_failures_do_not_stop_the_run() {
        let base = tempfile::tempdir().unwrap();
        let mut tool = MockTool::new();
        program_name(&mut tool);
        let mut sequence = Sequence::new();
        tool.expect_invoke()
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_| Invocation {
                outcome: InvocationOutcome::Exited(Some(1)),
                output: "boom".to_string(),
            });
        tool.expect_invoke()
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_| Invocation {
                outcome: InvocationOutcome::LaunchFailed("not found".to_string()),
                output: String::new(),
            });
        tool.expect_invoke()
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_| Invocation::success(""));

        let mut generator = FixtureGenerator::new(records(3), tool);
        let summary = generator.run(3, base.path());

        assert_eq!(summary.requested, 3);
        assert_eq!(summary.succeeded, 1);
        assert_eq!(summary.failed, 2);
    }

    #[test]
    fn test_uncreatable_base_skips_invocation_but_continues() {
        let blocker = tempfile::NamedTempFile::new().unwrap();
        let mut tool = MockTool::new();
        program_name(&mut tool);
        tool.expect_invoke().times(0);

        let mut generator = FixtureGenerator::new(records(5), tool);
        let summary = generator.run(3, blocker.path());

        assert_eq!(
            summary,
            RunSummary {
                requested: 3,
                succeeded: 0,
                failed: 3
            }
        );
    }

    #[test]
    fn test_directory_argument_matches_created_directory() {
        let base = tempfile::tempdir().unwrap();
        let base_path = base.path().to_path_buf();
        let mut tool = MockTool::new();
        program_name(&mut tool);
        tool.expect_invoke()
            .times(2)
            .withf(move |args: &[String]| {
                let directory = Path::new(&args[3]);
                args[2] == "-d" && directory.starts_with(&base_path) && directory.is_dir()
            })
            .returning(|_| Invocation::success(""));

        let mut generator = FixtureGenerator::new(records(21), tool);
        let summary = generator.run(2, base.path());
        assert_eq!(summary.succeeded, 2);
    }

    #[test]
    fn test_command_line_logged_at_info() {
        let base = tempfile::tempdir().unwrap();
        let mut tool = MockTool::new();
        program_name(&mut tool);
        tool.expect_invoke()
            .times(2)
            .returning(|_| Invocation::success(""));

        let mut generator = FixtureGenerator::new(records(13), tool);
        let (summary, logs) = run_with_logs(&mut generator, 2, base.path());

        assert_eq!(summary.succeeded, 2);
        assert!(logs.contains("Project 1: Executing: episko_cli create -n -d "));
        assert!(logs.contains("Project 2: Executing: episko_cli create -n -d "));
    }

    #[test]
    fn test_failure_line_names_project_and_title() {
        let blocker = tempfile::NamedTempFile::new().unwrap();
        let mut tool = MockTool::new();
        program_name(&mut tool);
        tool.expect_invoke().times(0);

        let mut expected = records(17);
        let title = expected.generate_title();

        let mut generator = FixtureGenerator::new(records(17), tool);
        let (summary, logs) = run_with_logs(&mut generator, 1, blocker.path());

        assert_eq!(summary.failed, 1);
        let line = logs
            .lines()
            .find(|line| line.contains("Project 1 (") && line.contains("failed"))
            .unwrap();
        assert!(line.contains(&format!("title={}", title)));
        assert!(line.contains("Failed to create directory"));
    }
}
