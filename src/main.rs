// SPDX-License-Identifier: MPL-2.0
use iced_lightbox::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced_lightbox - browse the image galleries of an HTML page

USAGE:
  iced_lightbox [OPTIONS] <PAGE>

ARGS:
  <PAGE>              HTML file path or http(s)/file URL

OPTIONS:
  -h, --help          Print this help
  -v, --verbose       Log state changes (overrides RUST_LOG)
  --lang <id>         Interface language, e.g. en-US or fr
  --config-dir <dir>  Directory holding settings.toml
  --no-preload        Do not fetch neighbouring images ahead of time
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let filter = if args.contains(["-v", "--verbose"]) {
        EnvFilter::new("iced_lightbox=debug,warn")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let lang = optional_value(&mut args, "--lang");
    let config_dir = optional_value(&mut args, "--config-dir");
    let no_preload = args.contains("--no-preload");

    let remaining = args.finish();
    let mut free = remaining.into_iter().filter_map(|s| s.into_string().ok());
    let page = free.next();
    for extra in free {
        tracing::warn!(argument = %extra, "ignoring extra argument");
    }

    paths::init_cli_overrides(config_dir);

    app::run(Flags {
        lang,
        page,
        no_preload,
    })
}

fn optional_value(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    args.opt_value_from_str(key).unwrap_or_else(|err| {
        tracing::warn!(option = key, %err, "ignoring malformed option");
        None
    })
}
