use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::NamedTempFile;

const VERIFY: &str = env!("CARGO_BIN_EXE_verify-matching");
const GENERATE: &str = env!("CARGO_BIN_EXE_generate-maze");
const SOLVE: &str = env!("CARGO_BIN_EXE_solve-maze");

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn generate(args: &[&str]) -> Output {
    Command::new(GENERATE).args(args).output().unwrap()
}

#[test]
fn generate_with_seed_is_reproducible() {
    let first = generate(&["--seed", "42"]);
    let second = generate(&["--seed", "42"]);

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    let text = stdout(&first);
    let header: Vec<usize> = text
        .lines()
        .next()
        .unwrap()
        .split_whitespace()
        .map(|n| n.parse().unwrap())
        .collect();
    assert_eq!(text.lines().count(), 2 + header[0]);
}

#[test]
fn generate_with_fixed_size() {
    let output = generate(&["--seed", "1", "--height", "12", "--width", "20"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("12 20\n"));
}

#[test]
fn generate_rejects_lone_dimension() {
    let output = generate(&["--height", "12"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn solve_reads_generated_maze_from_stdin() {
    let maze = generate(&["--seed", "3"]).stdout;

    let mut child = Command::new(SOLVE)
        .arg("-")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(&maze).unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let last = stdout(&output).lines().last().unwrap().to_string();
    assert!(
        last.starts_with("Found a path of") || last == "There is no path from entry to exit.",
        "unexpected summary {last:?}"
    );
}

#[cfg(unix)]
mod verify {
    use super::*;

    fn fixture_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    /// Run the verifier against a shell program answering `answer` twice
    fn verify(fixture: &NamedTempFile, answer: &str) -> Output {
        let script = format!(
            "read text; read pattern; printf 'Brute-force:\\n%s\\nKMP:\\n%s\\n' '{answer}' '{answer}'"
        );
        Command::new(VERIFY)
            .arg("--fixture")
            .arg(fixture.path())
            .args(["--program", "sh", "--", "-c", script.as_str()])
            .output()
            .unwrap()
    }

    #[test]
    fn passing_run_exits_zero() {
        let fixture = fixture_file("abcabc\nbca\nxbcaz\nbca\n");
        let output = verify(&fixture, "1");

        assert_eq!(output.status.code(), Some(0));
        assert_eq!(stdout(&output), "All tests passed.\n");
    }

    #[test]
    fn mismatch_prints_report_and_exits_one() {
        let fixture = fixture_file("hello\nxyz\nabcabc\nbca\n");
        let output = verify(&fixture, "3");

        assert_eq!(output.status.code(), Some(1));
        assert_eq!(
            stdout(&output),
            "Text: hello\nPattern: xyz\nResult: (\"3\", \"3\")\nExpect: No match.\n"
        );
    }

    #[test]
    fn missing_fixture_exits_one() {
        let output = Command::new(VERIFY)
            .args(["--fixture", "/nonexistent/cases.txt", "--program", "sh"])
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(1));
        assert!(output.stdout.is_empty());
    }
}
