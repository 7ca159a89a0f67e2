/// One record rendered in a machine- or human-readable format
pub trait BookmarkFormat {
    fn to_string(&self) -> String;
}
