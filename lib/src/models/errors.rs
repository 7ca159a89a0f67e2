/// User-facing failures of list, tag and detail screens
///
/// `Display` is the exact message shown inline next to the affected list or
/// control. None of these are fatal; the user re-triggers the action.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    #[error("An error occurred while loading links.")]
    Load,

    #[error("An error occurred while adding URL.")]
    Create,

    #[error("An error occurred while marking link read.")]
    MarkRead,

    #[error("An error occurred while marking link unread.")]
    MarkUnread,

    #[error("An error occurred while deleting link.")]
    Delete,

    #[error("An error occurred while saving link.")]
    Save,

    #[error("An error occurred while loading link.")]
    LoadLink,

    #[error("An error occurred while loading tags.")]
    LoadTags,
}
