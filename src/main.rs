use std::process::ExitCode;

fn main() -> ExitCode {
    match opencode_kit::run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(2)
        }
    }
}
