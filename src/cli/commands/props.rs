use anyhow::Result;

use crate::cli::args::PropsCommand;
use crate::cli::exit_status::ExitStatus;
use crate::core::serialize::serialize_props;

pub fn props(cmd: PropsCommand) -> Result<ExitStatus> {
    let (mut session, _config) = super::build_session(&cmd.common)?;

    match session.generate_props(&cmd.file, &cmd.interface) {
        Ok(bundle) => {
            let json = serialize_props(&bundle);
            println!("{}", serde_json::to_string_pretty(&json)?);
            Ok(ExitStatus::Success)
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            Ok(ExitStatus::Failure)
        }
    }
}
