use fileman::error::ShellError;
use fileman::flags::Flags;
use fileman::shell::Shell;
use std::env;
use std::process::ExitCode;

fn run() -> Result<(), ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("fileman {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    fileman::logging::init(flags.is_set("debug"))?;

    let mut shell = Shell::new(flags)?;
    shell.run()
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(ShellError::UsernameNotProvided) => {
            eprintln!("Username not provided");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("An error occurred: {}", e);
            ExitCode::FAILURE
        }
    }
}
