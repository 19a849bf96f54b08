use std::path::PathBuf;

/// Environment variable read when no path argument is given.
pub const DATA_PATH_ENV: &str = "TRIPCHECK_DATA_CSV";

/// The trip log path: first positional argument, else the environment value.
pub fn data_path<I>(args: I, env_value: Option<String>) -> Option<PathBuf>
where
    I: IntoIterator<Item = String>,
{
    args.into_iter()
        .next()
        .or(env_value)
        .filter(|path| !path.trim().is_empty())
        .map(PathBuf::from)
}

#[test]
fn argument_wins_over_env() {
    let path = data_path(vec!["a.csv".to_string()], Some("b.csv".to_string()));
    assert_eq!(path, Some(PathBuf::from("a.csv")));
}

#[test]
fn env_used_without_argument() {
    let path = data_path(Vec::new(), Some("b.csv".to_string()));
    assert_eq!(path, Some(PathBuf::from("b.csv")));
}

#[test]
fn blank_path_is_missing() {
    assert_eq!(data_path(Vec::new(), Some("  ".to_string())), None);
    assert_eq!(data_path(Vec::new(), None), None);
}
