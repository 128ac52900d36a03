//! Test doubles shared by the unit tests

use crate::prompt::LinePrompter;
use crate::runtime::command::{Captured, CommandRunner, CommandSpec, CommandStatus};
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{self, Cursor};

type StreamHook = Box<dyn Fn(&CommandSpec)>;

/// Runner that never spawns anything and records what it was asked to run
pub(crate) struct FakeRunner {
    /// Program -> probe output; `None` means the probe exits non-zero
    probes: HashMap<String, Option<String>>,
    stream_status: CommandStatus,
    stream_hook: Option<StreamHook>,
    pub captured: RefCell<Vec<CommandSpec>>,
    pub streamed: RefCell<Vec<CommandSpec>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self {
            probes: HashMap::new(),
            stream_status: CommandStatus {
                success: true,
                code: Some(0),
            },
            stream_hook: None,
            captured: RefCell::new(Vec::new()),
            streamed: RefCell::new(Vec::new()),
        }
    }

    /// Both probes of the Maven toolchain succeed
    pub fn with_tools() -> Self {
        Self::new()
            .probe_ok("java", "openjdk version \"21.0.2\"\nOpenJDK Runtime Environment")
            .probe_ok("mvn", "Apache Maven 3.9.6\nMaven home: /opt/maven")
    }

    pub fn probe_ok(mut self, program: &str, output: &str) -> Self {
        self.probes
            .insert(program.to_string(), Some(output.to_string()));
        self
    }

    pub fn probe_failed(mut self, program: &str) -> Self {
        self.probes.insert(program.to_string(), None);
        self
    }

    pub fn stream_exit(mut self, code: i32) -> Self {
        self.stream_status = CommandStatus {
            success: code == 0,
            code: Some(code),
        };
        self
    }

    /// Called with each streamed command before it is recorded
    pub fn on_stream(mut self, hook: impl Fn(&CommandSpec) + 'static) -> Self {
        self.stream_hook = Some(Box::new(hook));
        self
    }

    /// First argument of every streamed command, e.g. `archetype:generate`
    pub fn streamed_goals(&self) -> Vec<String> {
        self.streamed
            .borrow()
            .iter()
            .map(|spec| spec.args.first().cloned().unwrap_or_default())
            .collect()
    }
}

impl CommandRunner for FakeRunner {
    fn capture(&self, spec: &CommandSpec) -> io::Result<Captured> {
        self.captured.borrow_mut().push(spec.clone());
        match self.probes.get(&spec.program) {
            Some(Some(output)) => Ok(Captured {
                success: true,
                output: output.clone(),
            }),
            Some(None) => Ok(Captured {
                success: false,
                output: String::new(),
            }),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", spec.program),
            )),
        }
    }

    fn stream(&self, spec: &CommandSpec) -> io::Result<CommandStatus> {
        if let Some(hook) = &self.stream_hook {
            hook(spec);
        }
        self.streamed.borrow_mut().push(spec.clone());
        Ok(self.stream_status)
    }
}

/// Prompter answering from `input`, collecting what it prints
pub(crate) fn scripted_prompter(input: &str) -> LinePrompter<Cursor<Vec<u8>>, Vec<u8>> {
    LinePrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}
