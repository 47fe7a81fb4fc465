use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "clean-venvs")]
#[command(about = "Find and remove Python virtual environment folders")]
#[command(version)]
pub struct Args {
    /// Path to search for virtual environments (default: current directory)
    #[arg(short, long, default_value = ".", num_args = 0..=1, default_missing_value = ".")]
    pub path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_defaults_to_current_directory() {
        let args = Args::try_parse_from(["clean-venvs"]).unwrap();
        assert_eq!(args.path, PathBuf::from("."));
    }

    #[test]
    fn test_short_and_long_path_flags() {
        let short = Args::try_parse_from(["clean-venvs", "-p", "/srv/projects"]).unwrap();
        let long = Args::try_parse_from(["clean-venvs", "--path", "/srv/projects"]).unwrap();
        assert_eq!(short.path, PathBuf::from("/srv/projects"));
        assert_eq!(long.path, short.path);
    }

    #[test]
    fn test_bare_path_flag_falls_back_to_default() {
        let args = Args::try_parse_from(["clean-venvs", "--path"]).unwrap();
        assert_eq!(args.path, PathBuf::from("."));
    }

    #[test]
    fn test_unknown_flags_are_rejected() {
        assert!(Args::try_parse_from(["clean-venvs", "--force"]).is_err());
    }
}
