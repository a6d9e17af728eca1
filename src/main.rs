use anyhow::Result;
use pico_args::Arguments;
use promptline::*;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug)]
struct Args {
    config: Option<PathBuf>,
    error: i32,
    pwd: Option<PathBuf>,
    shell: Option<String>,
    width: Option<usize>,
    print_config: bool,
    help: bool,
}

impl Args {
    fn from_env() -> Result<Self> {
        let mut args = Arguments::from_env();

        Ok(Self {
            config: args
                .opt_value_from_str::<_, PathBuf>("--config")
                .unwrap_or(None),
            error: args.opt_value_from_str("--error").unwrap_or(None).unwrap_or(0),
            pwd: args.opt_value_from_str::<_, PathBuf>("--pwd").unwrap_or(None),
            shell: args.opt_value_from_str("--shell").unwrap_or(None),
            width: args.opt_value_from_str("--width").unwrap_or(None),
            print_config: args.contains("--print-config"),
            help: args.contains("--help"),
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::from_env()?;

    if args.help {
        print_help();
        return Ok(());
    }

    if args.print_config {
        println!("{}", default_settings_json());
        return Ok(());
    }

    let settings = config::load_settings(args.config).await?;

    let environment = ShellEnvironment {
        pwd: args.pwd,
        exit_code: args.error,
        shell: args.shell,
    };

    let width = args.width.unwrap_or_else(terminal_width);
    let writer = AnsiWriter::detect(width);
    let mut engine = Engine::new(&settings, &environment, writer);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for fragment in engine.render() {
        out.write_all(fragment.as_bytes())?;
    }
    out.flush()?;

    Ok(())
}

fn print_help() {
    println!("promptline - themed shell prompt renderer");
    println!();
    println!("USAGE:");
    println!("    promptline [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --config <FILE>        Settings file path");
    println!("    --error <CODE>         Exit code of the last command [default: 0]");
    println!("    --pwd <DIR>            Working directory override");
    println!("    --shell <NAME>         Invoking shell name");
    println!("    --width <COLS>         Terminal width override (otherwise COLUMNS)");
    println!("    --print-config         Print the built-in settings as JSON");
    println!("    --help                 Show this help message");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    PROMPTLINE_CONFIG      Settings file path");
    println!("    PROMPTLINE_DEBUG       Enable debug logging");
}
