use std::path::PathBuf;
use std::process::{Command, Output};

/// Three players; Ann gives Bo one stroke.
pub const THREE_BALL: &str = r#"
name = "Test three-ball"
course = "standard"
players = ["Ann", "Bo", "Cy"]
voor = [[0, 1, 0], [0, 0, 0], [0, 0, 0]]
"#;

/// `THREE_BALL` with the given `[[scores]]` lines appended.
pub fn round_with_scores(lines: &[(u8, &[i32])]) -> String {
    let mut content = THREE_BALL.to_string();
    for (hole, gross) in lines {
        let gross: Vec<String> = gross.iter().map(i32::to_string).collect();
        content.push_str(&format!(
            "\n[[scores]]\nhole = {hole}\ngross = [{}]\n",
            gross.join(", ")
        ));
    }
    content
}

/// A scratch directory unique to this test, with no `fairway.toml` in it.
pub fn scratch_dir(test: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("fairway-{test}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Run the `fairway` binary in `dir` with a clean environment.
pub fn run_fairway(dir: &PathBuf, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fairway"))
        .args(args)
        .current_dir(dir)
        .env_remove("FAIRWAY_CONFIG")
        .env_remove("FAIRWAY_SYSTEM")
        .env_remove("FAIRWAY_PRETTY")
        .env("RUST_LOG", "warn")
        .output()
        .unwrap()
}
