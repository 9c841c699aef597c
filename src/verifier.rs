//! Verification of an external matching program against [find_first]
//!
//! The program reads the text and the pattern from two stdin lines and
//! prints four lines: a label and a result for each of its two search
//! algorithms. A result is a decimal byte offset or `No match.`.
//!
//! [find_first]: crate::matching::find_first

use std::ffi::OsString;
use std::fmt;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;

use thiserror::Error;
use tracing::{debug, info};

use crate::fixture::{FixtureError, TestCase};
use crate::matching::{MatchOutcome, NO_MATCH};

/// Abstraction for invoking the program under test.
pub trait MatcherRunner {
    /// Run the program once for `case`.
    ///
    /// Returns the captured standard output.
    fn run(&self, case: &TestCase) -> io::Result<Vec<u8>>;
}

/// Runs the program as a child process, one process per test case.
#[derive(Debug, Clone)]
pub struct ProcessMatcherRunner {
    program: PathBuf,
    args: Vec<OsString>,
}

impl ProcessMatcherRunner {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl MatcherRunner for ProcessMatcherRunner {
    fn run(&self, case: &TestCase) -> io::Result<Vec<u8>> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()?;

        let (Some(mut stdin), Some(mut stdout)) = (child.stdin.take(), child.stdout.take()) else {
            let _ = child.kill();
            let _ = child.wait();
            return Err(io::Error::new(io::ErrorKind::Other, "child pipes not captured"));
        };

        let mut input = Vec::with_capacity(case.text.len() + case.pattern.len() + 2);
        input.extend_from_slice(&case.text);
        input.push(b'\n');
        input.extend_from_slice(&case.pattern);
        input.push(b'\n');

        // Feed stdin while stdout is drained, so neither pipe can fill up.
        // Dropping stdin at the end of the thread closes the pipe.
        let writer = thread::spawn(move || stdin.write_all(&input));

        let mut captured = Vec::new();
        let read = stdout.read_to_end(&mut captured);
        if read.is_err() {
            let _ = child.kill();
        }
        let written = writer
            .join()
            .unwrap_or_else(|_| Err(io::Error::new(io::ErrorKind::Other, "stdin writer panicked")));
        let written = match written {
            // A program that exits without reading closes its end early;
            // its output is still what we judge.
            Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
            other => other,
        };

        if let Err(err) = read.map(drop).and(written) {
            let _ = child.kill();
            let _ = child.wait();
            return Err(err);
        }
        child.wait()?;
        Ok(captured)
    }
}

/// The two result lines of the program output
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct ReportedResults {
    /// Output line 1, the brute-force result
    pub brute_force: Option<String>,
    /// Output line 3, the KMP result
    pub kmp: Option<String>,
}

impl ReportedResults {
    pub fn from_output(stdout: &[u8]) -> Self {
        let text = String::from_utf8_lossy(stdout);
        let lines: Vec<&str> = text.lines().collect();
        let line = |idx: usize| lines.get(idx).map(|l| l.to_string());
        Self {
            brute_force: line(1),
            kmp: line(3),
        }
    }

    fn lines(&self) -> [Option<&str>; 2] {
        [self.brute_force.as_deref(), self.kmp.as_deref()]
    }
}

impl fmt::Display for ReportedResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |l: Option<&str>| match l {
            Some(l) => format!("{:?}", l),
            None => "<missing>".to_string(),
        };
        let [bf, kmp] = self.lines();
        write!(f, "({}, {})", show(bf), show(kmp))
    }
}

/// A test case whose reported results disagree with the oracle
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Mismatch {
    pub case: TestCase,
    pub actual: ReportedResults,
    pub expected: MatchOutcome,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Text: {}", String::from_utf8_lossy(&self.case.text))?;
        writeln!(f, "Pattern: {}", String::from_utf8_lossy(&self.case.pattern))?;
        writeln!(f, "Result: {}", self.actual)?;
        write!(f, "Expect: {}", self.expected)
    }
}

/// Judge the reported results of one test case.
///
/// When a match is expected, both lines must be integers equal to the
/// expected offset. Otherwise both lines must read exactly `No match.`.
pub fn check(case: &TestCase, reported: ReportedResults) -> Result<MatchOutcome, Box<Mismatch>> {
    let expected = MatchOutcome::of(&case.text, &case.pattern);
    let ok = reported.lines().iter().all(|line| match (expected, line) {
        (MatchOutcome::Found(pos), Some(line)) => line.trim().parse::<usize>() == Ok(pos),
        (MatchOutcome::NoMatch, Some(line)) => *line == NO_MATCH,
        (_, None) => false,
    });
    if ok {
        Ok(expected)
    } else {
        Err(Box::new(Mismatch {
            case: case.clone(),
            actual: reported,
            expected,
        }))
    }
}

#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("verification failed\n{0}")]
    Mismatch(Box<Mismatch>),
    #[error(transparent)]
    Fixture(#[from] FixtureError),
    #[error("failed to run matching program: {0}")]
    Runner(#[source] io::Error),
}

/// Result of a fully passing run
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct VerificationSummary {
    pub cases: usize,
}

/// Runs every fixture case through a [MatcherRunner], stopping at the
/// first failure.
pub struct Verifier<R> {
    runner: R,
}

impl<R: MatcherRunner> Verifier<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    pub fn run<I>(&self, cases: I) -> Result<VerificationSummary, VerifyError>
    where
        I: IntoIterator<Item = Result<TestCase, FixtureError>>,
    {
        let mut summary = VerificationSummary { cases: 0 };
        for case in cases {
            let case = case?;
            let stdout = self.runner.run(&case).map_err(VerifyError::Runner)?;
            let reported = ReportedResults::from_output(&stdout);
            let outcome = check(&case, reported).map_err(VerifyError::Mismatch)?;
            summary.cases += 1;
            debug!(case = summary.cases, %outcome, "case passed");
        }
        info!(cases = summary.cases, "all cases passed");
        Ok(summary)
    }
}
