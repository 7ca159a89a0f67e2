use crate::format::OutputFormat;
use firehose::api::RemoteApi;
use firehose::auth::{AuthContext, TokenStore};
use firehose::config::Config;
use firehose::error::{FirehoseError, Result};
use std::cell::RefCell;
use std::io::{self, Write};

pub type SharedAuth = RefCell<AuthContext<Box<dyn TokenStore>>>;

pub struct AppContext<'a> {
    pub config: &'a Config,
    pub auth: &'a SharedAuth,
    pub format: OutputFormat,
}

impl AppContext<'_> {
    /// Backend client carrying the stored token
    pub fn api(&self) -> Result<RemoteApi> {
        let auth = self.auth.borrow();
        if !auth.is_logged_in() {
            return Err(FirehoseError::Auth(
                "not logged in; run `firehose login` first".to_string(),
            ));
        }
        Ok(RemoteApi::new(auth.http_client(self.config)?))
    }
}

pub mod add;
pub mod auth;
pub mod delete;
pub mod detail;
pub mod list;
pub mod mark;
pub mod misc;
pub mod tags;

pub trait FirehoseCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()>;
}

/// Enum-based dispatch for commands (avoids Box<dyn FirehoseCommand>)
pub enum CommandEnum {
    Login(auth::LoginCommand),
    Logout(auth::LogoutCommand),
    List(list::ListCommand),
    Tags(tags::TagsCommand),
    Add(add::AddCommand),
    Mark(mark::MarkCommand),
    Delete(delete::DeleteCommand),
    Show(detail::ShowCommand),
    Edit(detail::EditCommand),
    Open(misc::OpenCommand),
    Shell(misc::ShellCommand),
}

impl CommandEnum {
    pub fn execute(&self, ctx: &AppContext) -> Result<()> {
        match self {
            Self::Login(cmd) => cmd.execute(ctx),
            Self::Logout(cmd) => cmd.execute(ctx),
            Self::List(cmd) => cmd.execute(ctx),
            Self::Tags(cmd) => cmd.execute(ctx),
            Self::Add(cmd) => cmd.execute(ctx),
            Self::Mark(cmd) => cmd.execute(ctx),
            Self::Delete(cmd) => cmd.execute(ctx),
            Self::Show(cmd) => cmd.execute(ctx),
            Self::Edit(cmd) => cmd.execute(ctx),
            Self::Open(cmd) => cmd.execute(ctx),
            Self::Shell(cmd) => cmd.execute(ctx),
        }
    }
}

/// Ask a yes/no question on the terminal; anything but y/yes is no
pub fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N]: ", prompt);
    io::stdout().flush()?;

    let mut response = String::new();
    io::stdin().read_line(&mut response)?;
    let response = response.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}
