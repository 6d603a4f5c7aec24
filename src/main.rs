use std::io::{Read, Write};
use std::process::ExitCode;

use dotenv::dotenv;

use swap_issues::config::Config;
use swap_issues::services::issue_service::IssueService;
use swap_issues::SdkError;

fn run() -> Result<String, SdkError> {
    let config = Config::from_env()?;

    let input = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let issues = IssueService::new(config.strict_format).inspect_json(&input)?;
    if config.pretty {
        Ok(issues.to_string())
    } else {
        issues.to_json()
    }
}

fn report_error(e: &SdkError, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "{}", e)
}

fn main() -> ExitCode {
    dotenv().ok();
    env_logger::init();

    match run() {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            // stderr write failures leave nothing else to report to
            let _ = report_error(&e, &mut std::io::stderr().lock());
            ExitCode::FAILURE
        }
    }
}
