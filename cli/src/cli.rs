use crate::commands::add::AddCommand;
use crate::commands::auth::{LoginCommand, LogoutCommand};
use crate::commands::delete::DeleteCommand;
use crate::commands::detail::{EditCommand, ShowCommand};
use crate::commands::list::ListCommand;
use crate::commands::mark::MarkCommand;
use crate::commands::misc::{OpenCommand, ShellCommand};
use crate::commands::tags::TagsCommand;
use crate::commands::{AppContext, CommandEnum};
use crate::interactive::Screen;
use firehose::error::Result;
use firehose::list::ListSource;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Terminal client for the Firehose reading list",
    long_about = None
)]
pub struct Cli {
    /// Optional custom configuration file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable color output
    #[arg(long)]
    pub nc: bool,

    /// Show debug information
    #[arg(short = 'g', long = "debug")]
    pub debug: bool,

    /// Output format: colored (default), plain or json
    #[arg(short = 'f', long)]
    pub format: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in and remember the access token
    Login {
        /// Account email; prompted for when omitted
        #[arg(short, long)]
        email: Option<String>,
    },

    /// Forget the stored access token
    Logout,

    /// List unread links
    Unread,

    /// List read links
    Read {
        /// Only links whose title contains TEXT
        #[arg(short, long)]
        search: Option<String>,

        /// Page number, starting at 1
        #[arg(short, long)]
        page: Option<u32>,
    },

    /// List all tags
    Tags,

    /// List the links carrying a tag
    Tagged {
        tag: String,
    },

    /// Add a link to the unread list
    Add {
        url: String,
    },

    /// Mark a link read
    MarkRead {
        id: String,
    },

    /// Mark a link unread
    MarkUnread {
        id: String,
    },

    /// Delete a link
    Delete {
        id: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Show one link
    Show {
        id: String,
    },

    /// Change fields of a link
    Edit {
        id: String,

        #[arg(long)]
        url: Option<String>,

        #[arg(long)]
        title: Option<String>,

        /// Replaces all tags; repeat or separate with commas
        #[arg(short, long, value_delimiter = ',')]
        tags: Option<Vec<String>>,

        /// Where the link was found
        #[arg(long)]
        source: Option<String>,

        #[arg(short, long)]
        comment: Option<String>,
    },

    /// Open a link in the browser
    Open {
        id: String,
    },

    /// Start interactive shell
    Shell {
        /// Starting screen: unread, read or tags
        #[arg(default_value = "unread")]
        screen: String,

        /// With `tagged`: the tag to show
        tag: Option<String>,
    },
}

fn parse_screen(screen: &str, tag: Option<String>) -> Result<Screen> {
    match (screen, tag) {
        ("unread", _) => Ok(Screen::Unread),
        ("read", _) => Ok(Screen::Read),
        ("tags", _) => Ok(Screen::Tags),
        ("tagged", Some(tag)) => Ok(Screen::Tagged(tag)),
        (other, _) => Err(firehose::FirehoseError::InvalidInput(format!(
            "unknown screen '{}' (expected unread, read, tags or tagged <tag>)",
            other
        ))),
    }
}

impl Commands {
    pub fn into_command(self) -> Result<CommandEnum> {
        Ok(match self {
            Commands::Login { email } => CommandEnum::Login(LoginCommand { email }),
            Commands::Logout => CommandEnum::Logout(LogoutCommand),
            Commands::Unread => CommandEnum::List(ListCommand::new(ListSource::Unread)),
            Commands::Read { search, page } => CommandEnum::List(ListCommand {
                source: ListSource::Read,
                search,
                page,
            }),
            Commands::Tags => CommandEnum::Tags(TagsCommand),
            Commands::Tagged { tag } => {
                CommandEnum::List(ListCommand::new(ListSource::Tagged(tag)))
            }
            Commands::Add { url } => CommandEnum::Add(AddCommand { url }),
            Commands::MarkRead { id } => CommandEnum::Mark(MarkCommand { id, read: true }),
            Commands::MarkUnread { id } => CommandEnum::Mark(MarkCommand { id, read: false }),
            Commands::Delete { id, force } => CommandEnum::Delete(DeleteCommand { id, force }),
            Commands::Show { id } => CommandEnum::Show(ShowCommand { id }),
            Commands::Edit {
                id,
                url,
                title,
                tags,
                source,
                comment,
            } => CommandEnum::Edit(EditCommand {
                id,
                url,
                title,
                tags,
                source,
                comment,
            }),
            Commands::Open { id } => CommandEnum::Open(OpenCommand { id }),
            Commands::Shell { screen, tag } => CommandEnum::Shell(ShellCommand {
                screen: parse_screen(&screen, tag)?,
            }),
        })
    }
}

/// Run the requested command; no subcommand shows the unread list
pub fn handle_args(command: Option<Commands>, ctx: &AppContext) -> Result<()> {
    let command = command.unwrap_or(Commands::Unread).into_command()?;
    command.execute(ctx)
}
