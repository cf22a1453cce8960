use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::debug;

use crate::cli::args::{Cli, Commands};
use crate::errors::AssetResult;
use crate::{icon, logo, serve};

pub fn execute_command(cli: &Cli) -> AssetResult<()> {
    match &cli.command {
        Some(Commands::Icon) => icon::convert(),
        Some(Commands::Logo) => logo::convert(),
        Some(Commands::Serve) => serve::run(),
        Some(Commands::Completion { shell }) => {
            _completion(*shell);
            Ok(())
        }
        None => {
            Cli::command().print_help().ok();
            Ok(())
        }
    }
}

fn _completion(shell: clap_complete::Shell) {
    debug!("generating completions for {:?}", shell);
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
