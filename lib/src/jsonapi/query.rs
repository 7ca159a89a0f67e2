use url::form_urlencoded::byte_serialize;

/// Filter and option parameters of a JSON:API collection request
///
/// Rendered in insertion order as `filter[key]=value&...&option=value`. Keys are
/// written verbatim so brackets stay readable on the wire; values are
/// form-encoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    filter: Vec<(String, String)>,
    options: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `filter[key]=value`, replacing an earlier value for the same key
    pub fn filter(mut self, key: &str, value: impl ToString) -> Self {
        set(&mut self.filter, key, value.to_string());
        self
    }

    /// Add a raw option such as `page[number]` or `include`
    pub fn option(mut self, key: &str, value: impl ToString) -> Self {
        set(&mut self.options, key, value.to_string());
        self
    }

    pub fn filter_value(&self, key: &str) -> Option<&str> {
        get(&self.filter, key)
    }

    pub fn option_value(&self, key: &str) -> Option<&str> {
        get(&self.options, key)
    }

    pub fn is_empty(&self) -> bool {
        self.filter.is_empty() && self.options.is_empty()
    }

    pub fn to_query_string(&self) -> String {
        let filters = self
            .filter
            .iter()
            .map(|(k, v)| format!("filter[{}]={}", k, encode(v)));
        let options = self
            .options
            .iter()
            .map(|(k, v)| format!("{}={}", k, encode(v)));
        filters.chain(options).collect::<Vec<_>>().join("&")
    }

    /// `path?query`, or just `path` when there is nothing to send
    pub fn apply_to(&self, path: &str) -> String {
        if self.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, self.to_query_string())
        }
    }
}

fn set(pairs: &mut Vec<(String, String)>, key: &str, value: String) {
    match pairs.iter_mut().find(|(k, _)| k == key) {
        Some(pair) => pair.1 = value,
        None => pairs.push((key.to_string(), value)),
    }
}

fn get<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

fn encode(value: &str) -> String {
    byte_serialize(value.as_bytes()).collect()
}
