// SPDX-License-Identifier: MPL-2.0
use messg::app::{self, Flags};
use messg::config::paths;

const HELP: &str = "\
messg - notification flow demo

USAGE:
    messg [OPTIONS]

OPTIONS:
    --position <NAME>    Anchor for new messages (top, top-left, top-right,
                         bottom, bottom-left, bottom-right)
    --max <N>            Maximum visible messages per position (0 = unlimited)
    --delay <MS>         Global auto-hide delay in milliseconds (0 = never)
    --speed <MS>         Show/hide animation duration in milliseconds
    --no-flow            Overlay messages instead of stacking them
    --config-dir <PATH>  Directory holding settings.toml
    -h, --help           Print this help

ENVIRONMENT:
    MESSG_CONFIG_DIR     Config directory when --config-dir is not given
    MESSG_LOG            Log filter directives (default: info)
";

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        position: args.opt_value_from_str("--position")?,
        max: args.opt_value_from_str("--max")?,
        delay: args.opt_value_from_str("--delay")?,
        speed: args.opt_value_from_str("--speed")?,
        no_flow: args.contains("--no-flow"),
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}

fn main() -> iced::Result {
    messg::logging::init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let unused = args.finish();
    if !unused.is_empty() {
        tracing::warn!(?unused, "ignoring unrecognized arguments");
    }

    paths::init_cli_override(flags.config_dir.clone());
    app::run(flags)
}
