//! CLI commands

mod changelog;
mod completions;
mod init;
mod profiles;
mod publish;
mod release;

pub use changelog::ChangelogCommand;
pub use completions::CompletionsCommand;
pub use init::InitCommand;
pub use profiles::ProfilesCommand;
pub use publish::PublishCommand;
pub use release::ReleaseCommand;
