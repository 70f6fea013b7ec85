use anyhow::Result;

use crate::cli::args::KeysCommand;
use crate::cli::exit_status::ExitStatus;
use crate::cli::report;

pub fn keys(cmd: KeysCommand) -> Result<ExitStatus> {
    let (mut session, _config) = super::build_session(&cmd.common)?;

    let snapshot = session.analyze_project();
    report::print_key_index(&snapshot);

    Ok(ExitStatus::Success)
}
