//! Scripted command runner.

use std::collections::{HashMap, VecDeque};
use std::io;
use std::sync::Mutex;

use crate::collector::traits::{CollectError, CommandRunner};

/// Canned result of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockResponse {
    /// Successful run with this standard output.
    Output(String),
    /// Program missing from `PATH`.
    NotFound,
    /// Non-zero exit with this stderr line.
    Exit(i32, String),
    /// Failure while reading the pipe.
    Io(String),
}

impl MockResponse {
    pub fn output(text: impl Into<String>) -> Self {
        MockResponse::Output(text.into())
    }

    fn into_result(self, program: &str) -> Result<String, CollectError> {
        match self {
            MockResponse::Output(text) => Ok(text),
            MockResponse::NotFound => Err(CollectError::NotFound(program.to_string())),
            MockResponse::Exit(code, stderr) => Err(CollectError::Exit {
                program: program.to_string(),
                code: Some(code),
                stderr,
            }),
            MockResponse::Io(msg) => Err(CollectError::Io {
                program: program.to_string(),
                source: io::Error::other(msg),
            }),
        }
    }
}

#[derive(Debug, Default)]
struct Script {
    queued: HashMap<String, VecDeque<MockResponse>>,
    fallback: HashMap<String, MockResponse>,
    calls: Vec<(String, Vec<String>)>,
}

/// Runner that replays queued responses per program and records every call.
///
/// Queued responses are consumed in order; once a program's queue is empty
/// its fallback is returned. Programs with neither behave as missing.
#[derive(Debug, Default)]
pub struct MockRunner {
    script: Mutex<Script>,
}

impl MockRunner {
    /// Creates a runner with nothing scripted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues one response for `program`.
    pub fn push(&self, program: &str, response: MockResponse) -> &Self {
        self.lock()
            .queued
            .entry(program.to_string())
            .or_default()
            .push_back(response);
        self
    }

    /// Queues `count` copies of `response` for `program`.
    pub fn push_n(&self, program: &str, count: usize, response: MockResponse) -> &Self {
        for _ in 0..count {
            self.push(program, response.clone());
        }
        self
    }

    /// Sets the response returned once the queue for `program` is drained.
    pub fn fallback(&self, program: &str, response: MockResponse) -> &Self {
        self.lock().fallback.insert(program.to_string(), response);
        self
    }

    /// Returns all recorded invocations in call order.
    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.lock().calls.clone()
    }

    /// Returns the argument lists passed to `program`.
    pub fn calls_to(&self, program: &str) -> Vec<Vec<String>> {
        self.lock()
            .calls
            .iter()
            .filter(|(p, _)| p == program)
            .map(|(_, args)| args.clone())
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Script> {
        self.script.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<String, CollectError> {
        let mut script = self.lock();
        script.calls.push((program.to_string(), args.to_vec()));

        let queued = script
            .queued
            .get_mut(program)
            .and_then(|queue| queue.pop_front());
        let response = queued
            .or_else(|| script.fallback.get(program).cloned())
            .unwrap_or(MockResponse::NotFound);
        response.into_result(program)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_then_fallback() {
        let runner = MockRunner::new();
        runner
            .push("sadf", MockResponse::output("first"))
            .fallback("sadf", MockResponse::output("rest"));

        assert_eq!(runner.run("sadf", &[]).unwrap(), "first");
        assert_eq!(runner.run("sadf", &[]).unwrap(), "rest");
        assert_eq!(runner.run("sadf", &[]).unwrap(), "rest");
        assert_eq!(runner.calls_to("sadf").len(), 3);
    }

    #[test]
    fn test_unscripted_program_is_missing() {
        let runner = MockRunner::new();
        let err = runner.run("journalctl", &["-o".to_string()]).unwrap_err();
        assert!(matches!(err, CollectError::NotFound(_)));
        assert_eq!(
            runner.calls(),
            vec![("journalctl".to_string(), vec!["-o".to_string()])]
        );
    }

    #[test]
    fn test_exit_response_maps_to_exit_error() {
        let runner = MockRunner::new();
        runner.push("sadf", MockResponse::Exit(1, "Invalid system activity file".into()));
        let err = runner.run("sadf", &[]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "sadf exited with status 1: Invalid system activity file"
        );
    }
}
