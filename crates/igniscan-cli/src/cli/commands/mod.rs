pub mod corpus;
pub mod inspect;
pub mod profiles;

use super::args::{Cli, Command};

pub async fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Inspect(args) => inspect::run(&cli.config, args).await,
        Command::Profiles => profiles::run(),
        Command::Corpus => corpus::run(&cli.config),
    }
}
