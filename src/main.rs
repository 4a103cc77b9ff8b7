use std::process::ExitCode;

fn main() -> ExitCode {
    textquest::cli::run()
}
