use crate::commands::{confirm, AppContext};
use crate::format::OutputFormat;
use crate::spinner::with_spinner;
use firehose::api::{BookmarkApi, TagApi};
use firehose::browser;
use firehose::error::{FirehoseError, Result};
use firehose::list::{ActionOutcome, BookmarkListController, ListSource, LoadingIndicator};
use firehose::models::bookmark::Bookmark;
use firehose::tag_list::TagListController;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// What the shell is showing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    Unread,
    Read,
    Tags,
    Tagged(String),
}

impl Screen {
    fn source(&self) -> Option<ListSource> {
        match self {
            Screen::Unread => Some(ListSource::Unread),
            Screen::Read => Some(ListSource::Read),
            Screen::Tagged(name) => Some(ListSource::Tagged(name.clone())),
            Screen::Tags => None,
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::Unread => write!(f, "unread"),
            Screen::Read => write!(f, "read"),
            Screen::Tags => write!(f, "tags"),
            Screen::Tagged(name) => write!(f, "#{}", name),
        }
    }
}

type ConfirmDelete = Box<dyn Fn(&Bookmark) -> bool>;

/// Screens visited in this session, each keeping its controller alive
pub struct Shell<A> {
    api: A,
    screen: Screen,
    lists: HashMap<ListSource, BookmarkListController<A>>,
    tags: Option<TagListController<A>>,
    format: OutputFormat,
    confirm_delete: ConfirmDelete,
}

impl<A: BookmarkApi + TagApi + Clone> Shell<A> {
    pub fn new(api: A, format: OutputFormat) -> Self {
        Self {
            api,
            screen: Screen::Unread,
            lists: HashMap::new(),
            tags: None,
            format,
            confirm_delete: Box::new(|b| {
                confirm(&format!("Delete \"{}\"?", b.display_title())).unwrap_or(false)
            }),
        }
    }

    pub fn with_confirm(mut self, confirm_delete: impl Fn(&Bookmark) -> bool + 'static) -> Self {
        self.confirm_delete = Box::new(confirm_delete);
        self
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn list(&self, source: &ListSource) -> Option<&BookmarkListController<A>> {
        self.lists.get(source)
    }

    pub fn tag_list(&self) -> Option<&TagListController<A>> {
        self.tags.as_ref()
    }

    /// Show `screen`: first visits mount it, returning refreshes it
    ///
    /// Tag screens are not kept once left.
    pub fn navigate(&mut self, screen: Screen) {
        if matches!(self.screen, Screen::Tagged(_)) && self.screen != screen {
            if let Some(mut tagged) = self.screen.source().and_then(|s| self.lists.remove(&s)) {
                tagged.unmount();
            }
        }
        match screen.source() {
            Some(source) => match self.lists.get_mut(&source) {
                Some(controller) => {
                    controller.focus();
                }
                None => {
                    let mut controller =
                        BookmarkListController::new(self.api.clone(), source.clone());
                    with_spinner(&format!("Loading {}", source), || controller.mount());
                    self.lists.insert(source, controller);
                }
            },
            None => match self.tags.as_mut() {
                Some(tags) => {
                    tags.focus();
                }
                None => {
                    let mut tags = TagListController::new(self.api.clone());
                    with_spinner("Loading tags", || tags.load());
                    self.tags = Some(tags);
                }
            },
        }
        self.screen = screen;
    }

    fn current(&mut self) -> Option<&mut BookmarkListController<A>> {
        let source = self.screen.source()?;
        self.lists.get_mut(&source)
    }

    fn current_list(&mut self) -> Result<&mut BookmarkListController<A>> {
        self.current()
            .ok_or_else(|| FirehoseError::InvalidInput("not available on the tag list".to_string()))
    }

    /// Id of the record shown at 1-based position `arg`
    fn record_id(&mut self, arg: Option<&str>) -> Result<String> {
        let position: usize = arg
            .and_then(|a| a.parse().ok())
            .filter(|n| *n > 0)
            .ok_or_else(|| FirehoseError::InvalidInput("expected a row number".to_string()))?;
        let controller = self.current_list()?;
        controller
            .state()
            .records()
            .nth(position - 1)
            .map(|b| b.id.clone())
            .ok_or_else(|| FirehoseError::InvalidInput(format!("no row {}", position)))
    }

    fn report(outcome: ActionOutcome, skipped: &str) {
        if outcome == ActionOutcome::Skipped {
            println!("{}", skipped);
        }
    }

    pub fn handle_command(&mut self, line: &str) -> Result<()> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&cmd, args)) = parts.split_first() else {
            return Ok(());
        };

        match cmd {
            "a" => {
                let url = args.join(" ");
                let controller = self.current_list()?;
                if !controller.source().accepts_new_links() {
                    println!("Links can only be added on the unread list.");
                    return Ok(());
                }
                controller.set_input(&url);
                Self::report(controller.submit_input(), "Usage: a <url>");
            }
            "r" | "u" => {
                let id = self.record_id(args.first().copied())?;
                let controller = self.current_list()?;
                let outcome = if cmd == "r" {
                    controller.mark_read(&id)
                } else {
                    controller.mark_unread(&id)
                };
                Self::report(outcome, "That link is busy.");
            }
            "d" => {
                let id = self.record_id(args.first().copied())?;
                let force = args.contains(&"-f");
                let confirm_delete = &self.confirm_delete;
                let source = self.screen.source();
                if let Some(controller) = source.and_then(|s| self.lists.get_mut(&s)) {
                    let outcome = controller.delete(&id, |b| force || confirm_delete(b));
                    Self::report(outcome, "Deletion cancelled.");
                }
            }
            "reload" => {
                let controller = self.current_list()?;
                with_spinner("Reloading", || controller.refresh(LoadingIndicator::Standalone));
            }
            "pull" => {
                self.current_list()?.refresh(LoadingIndicator::List);
            }
            "s" => {
                let text = args.join(" ");
                if self.current_list()?.search(&text).is_none() {
                    println!("Search isn't available on tag lists.");
                }
            }
            "n" => {
                if self.current_list()?.increment_page().is_none() {
                    println!("Already on the last page.");
                }
            }
            "p" => {
                if self.current_list()?.decrement_page().is_none() {
                    println!("Already on the first page.");
                }
            }
            "o" => {
                let id = self.record_id(args.first().copied())?;
                let controller = self.current_list()?;
                if let Some(bookmark) = controller.state().records().get(&id) {
                    println!("Opening: {}", bookmark.attributes.url);
                    browser::open_bookmark(bookmark)?;
                }
                return Ok(());
            }
            "t" => {
                let name = self.tag_name(args.first().copied())?;
                self.navigate(Screen::Tagged(name));
            }
            "go" => {
                let screen = match args.first().copied() {
                    Some("unread") => Screen::Unread,
                    Some("read") => Screen::Read,
                    Some("tags") => Screen::Tags,
                    _ => {
                        println!("Usage: go unread|read|tags");
                        return Ok(());
                    }
                };
                self.navigate(screen);
            }
            "ls" => {}
            _ => {
                println!("Unknown command: {}. Type '?' for help.", cmd);
                return Ok(());
            }
        }

        print!("{}", self.render());
        Ok(())
    }

    /// `t 3` on the tag list picks the third tag; anything else is a tag name
    fn tag_name(&self, arg: Option<&str>) -> Result<String> {
        let arg = arg.ok_or_else(|| FirehoseError::InvalidInput("Usage: t <tag>".to_string()))?;
        if self.screen == Screen::Tags {
            if let (Ok(position), Some(tags)) = (arg.parse::<usize>(), &self.tags) {
                return position
                    .checked_sub(1)
                    .and_then(|i| tags.tags().get(i))
                    .map(|t| t.name().to_string())
                    .ok_or_else(|| FirehoseError::InvalidInput(format!("no tag {}", position)));
            }
        }
        Ok(arg.to_string())
    }

    pub fn render(&self) -> String {
        let mut out = format!("== {} ==\n", self.screen);

        let Some(source) = self.screen.source() else {
            if let Some(tags) = self.tag_list() {
                if let Some(err) = tags.error() {
                    out.push_str(&format!("{}\n", err));
                }
                if tags.shows_empty_message() {
                    out.push_str("No tags.\n");
                }
                out.push_str(&self.format.render_tags(tags.tags()));
            }
            return out;
        };

        let Some(controller) = self.list(&source) else {
            return out;
        };
        let state = controller.state();

        if let Some(err) = state.error() {
            out.push_str(&format!("{}\n", err));
        }
        if !state.search_text().is_empty() {
            out.push_str(&format!("Search: {}\n", state.search_text()));
        }
        if state.shows_empty_message() {
            out.push_str("No links.\n");
        }
        out.push_str(&self.format.render_bookmarks(state.records().iter(), 1));

        let pagination = state.pagination();
        if let (true, Some(max)) = (source.paginates(), pagination.max_page_number()) {
            out.push_str(&format!("Page {} of {}\n", pagination.page_number(), max));
        }
        out
    }
}

pub fn run_with_context(ctx: &AppContext, screen: Screen) -> Result<()> {
    let mut shell = Shell::new(ctx.api()?, ctx.format);
    let mut rl = DefaultEditor::new().map_err(|e| FirehoseError::Other(e.to_string()))?;

    println!("firehose interactive mode - type '?' for help");
    shell.navigate(screen);
    print!("{}", shell.render());

    loop {
        let readline = rl.readline(&format!("firehose:{}> ", shell.screen()));
        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                rl.add_history_entry(line)
                    .map_err(|e| FirehoseError::Other(e.to_string()))?;

                match line {
                    "q" | "quit" | "exit" => break,
                    "?" | "help" => print_help(),
                    _ => {
                        if let Err(e) = shell.handle_command(line) {
                            eprintln!("Error: {}", e);
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("^D");
                break;
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}

fn print_help() {
    println!(
        "
INTERACTIVE MODE COMMANDS:

SCREENS:
    go unread|read|tags    Switch screen (returning to a screen refreshes it)
    t <tag>                Show the links tagged <tag> (on the tag list: t <n>)
    ls                     Show the current screen again

LIST ACTIONS (n = row number):
    a <url>                Add a link (unread list only)
    r <n>                  Mark read
    u <n>                  Mark unread
    d <n> [-f]             Delete (-f: no confirmation)
    o <n>                  Open in browser

LOADING:
    reload                 Reload with a full-screen indicator
    pull                   Pull-to-refresh

UNREAD AND READ LISTS:
    s [text]               Search titles (empty text clears the search)
    n                      Next page
    p                      Previous page

HELP & EXIT:
    ?  or help             Show this help
    q  or quit or exit     Exit interactive mode
    ^D or ^C               Exit interactive mode
"
    );
}
