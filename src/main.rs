use docker_log_bridge::app;
use std::process::ExitCode;

fn main() -> ExitCode {
    app::main()
}
