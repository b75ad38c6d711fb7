use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use create_buffer::{Mode, DEFAULT_OUT_PATH};

#[derive(Debug, Parser)]
#[command(version, about = "libiotc buffer creator")]
struct Args {
    /// file name that is going to be converted
    #[arg(long = "file_name", value_name = "PATH")]
    file_name: PathBuf,

    /// output path
    #[arg(long = "out_path", value_name = "DIR", default_value = DEFAULT_OUT_PATH)]
    out_path: PathBuf,

    /// array name that is going to be used as an output
    #[arg(long = "array_name", value_name = "IDENTIFIER")]
    array_name: String,

    /// disable printing to the console and enables writing to files
    #[arg(long = "no-pretend")]
    no_pretend: bool,
}

impl Args {
    fn mode(&self) -> Mode {
        if self.no_pretend {
            Mode::Write
        } else {
            Mode::Pretend
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("create_buffer=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mode = args.mode();
    debug!(?args, ?mode, "starting");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    create_buffer::run(&args.file_name, &args.array_name, &args.out_path, mode, &mut out)
        .with_context(|| {
            format!(
                "Failed to create buffer {} from {}",
                args.array_name,
                args.file_name.display()
            )
        })?;
    out.flush().context("Failed to flush stdout")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use assert_matches::assert_matches;
    use clap::Parser;

    use super::Args;
    use create_buffer::{Mode, DEFAULT_OUT_PATH};

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["create-buffer", "--file_name", "in.pem", "--array_name", "foo"]);

        assert_matches!(args, Ok(args) => {
            assert_eq!(args.file_name, Path::new("in.pem"));
            assert_eq!(args.array_name, "foo");
            assert_eq!(args.out_path, Path::new(DEFAULT_OUT_PATH));
            assert!(!args.no_pretend);
            assert_eq!(args.mode(), Mode::Pretend);
        });
    }

    #[test]
    fn test_no_pretend_and_out_path() {
        let args = Args::try_parse_from([
            "create-buffer",
            "--file_name",
            "res/trusted_RootCA_certs/roots.pem",
            "--array_name",
            "iotc_RootCA_list",
            "--out_path",
            "src/libiotc/tls/certs",
            "--no-pretend",
        ]);

        assert_matches!(args, Ok(args) => {
            assert_eq!(args.out_path, Path::new("src/libiotc/tls/certs"));
            assert!(args.no_pretend);
            assert_eq!(args.mode(), Mode::Write);
        });
    }

    #[test]
    fn test_required_arguments() {
        assert!(Args::try_parse_from(["create-buffer", "--array_name", "foo"]).is_err());
        assert!(Args::try_parse_from(["create-buffer", "--file_name", "in.pem"]).is_err());
    }
}
