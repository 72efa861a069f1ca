use std::env;
use std::io::{self, Write};
use std::process;

use mat4gen::constants::DEFAULT_CASE_COUNT;
use mat4gen::{emit_fixtures, CaseKind, ValueSource};

const USAGE: &str = "usage: generate [count] [--seed N] [--vec4]

Emit reference fixtures for 4x4 matrix multiplication tests.

  count      number of test cases to generate (default 8, negative clamps to 0)
  --seed N   seed the generator; the run becomes fully reproducible
  --vec4     emit matrix-by-vector fixtures instead of matrix-by-matrix";

struct Options {
    count: i64,
    seed: Option<u64>,
    kind: CaseKind,
}

fn parse_seed(text: &str) -> Result<u64, String> {
    text.parse::<i64>()
        .map(|seed| seed as u64)
        .map_err(|_| format!("invalid seed: {}", text))
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut count = DEFAULT_CASE_COUNT;
    let mut seed = None;
    let mut kind = CaseKind::MatMat;
    let mut count_seen = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--seed" => {
                let value = iter.next().ok_or("--seed requires a value")?;
                seed = Some(parse_seed(value)?);
            }
            "--vec4" => kind = CaseKind::MatVec,
            other if other.starts_with("--seed=") => {
                seed = Some(parse_seed(&other["--seed=".len()..])?);
            }
            other if other.starts_with("--") => {
                return Err(format!("unexpected argument: {}", other));
            }
            other => {
                if count_seen {
                    return Err(format!("unexpected argument: {}", other));
                }
                count = other
                    .parse::<i64>()
                    .map_err(|_| format!("invalid count: {}", other))?;
                count_seen = true;
            }
        }
    }

    Ok(Options { count, seed, kind })
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.iter().any(|arg| arg == "-h" || arg == "--help") {
        println!("{}", USAGE);
        return;
    }

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("error: {}", message);
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    };

    let mut source = match options.seed {
        Some(seed) => ValueSource::from_seed(seed),
        None => ValueSource::from_entropy(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = emit_fixtures(&mut source, options.kind, options.count, &mut out) {
        eprintln!("error: failed to write output: {}", err);
        process::exit(1);
    }
    if let Err(err) = out.flush() {
        eprintln!("error: failed to write output: {}", err);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let options = parse_args(&args(&[])).unwrap();
        assert_eq!(options.count, DEFAULT_CASE_COUNT);
        assert_eq!(options.seed, None);
        assert_eq!(options.kind, CaseKind::MatMat);
    }

    #[test]
    fn test_count_and_seed() {
        let options = parse_args(&args(&["12", "--seed", "42"])).unwrap();
        assert_eq!(options.count, 12);
        assert_eq!(options.seed, Some(42));
    }

    #[test]
    fn test_seed_equals_form() {
        let options = parse_args(&args(&["--seed=7"])).unwrap();
        assert_eq!(options.seed, Some(7));
    }

    #[test]
    fn test_negative_count_parses() {
        // Clamping happens at emission, not parsing
        let options = parse_args(&args(&["-3"])).unwrap();
        assert_eq!(options.count, -3);
    }

    #[test]
    fn test_negative_seed_parses() {
        let options = parse_args(&args(&["--seed", "-1"])).unwrap();
        assert_eq!(options.seed, Some(u64::MAX));
    }

    #[test]
    fn test_vec4_flag() {
        let options = parse_args(&args(&["--vec4", "3"])).unwrap();
        assert_eq!(options.kind, CaseKind::MatVec);
        assert_eq!(options.count, 3);
    }

    #[test]
    fn test_invalid_count_rejected() {
        assert!(parse_args(&args(&["eight"])).is_err());
    }

    #[test]
    fn test_invalid_seed_rejected() {
        assert!(parse_args(&args(&["--seed", "abc"])).is_err());
        assert!(parse_args(&args(&["--seed"])).is_err());
    }

    #[test]
    fn test_extra_positional_rejected() {
        assert!(parse_args(&args(&["1", "2"])).is_err());
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(parse_args(&args(&["--frobnicate"])).is_err());
    }
}
