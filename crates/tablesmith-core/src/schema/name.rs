use std_util::str;

/// A model, field or enum name split into lowercase words.
///
/// `LastName`, `lastName` and `last_name` all produce the same `Name`, so
/// every identifier derived from it is independent of how the source name
/// was cased.
#[derive(Debug, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Name {
    pub parts: Vec<String>,
}

impl Name {
    pub fn new(src: &str) -> Self {
        let snake = str::snake_case(src);
        let parts = snake
            .split('_')
            .filter(|part| !part.is_empty())
            .map(String::from)
            .collect();
        Self { parts }
    }

    pub fn snake_case(&self) -> String {
        self.parts.join("_")
    }

    /// Snake case with the last word pluralized (`person` → `people`,
    /// `order_item` → `order_items`).
    pub fn plural_snake_case(&self) -> String {
        match self.parts.split_last() {
            Some((last, rest)) => {
                let mut parts = rest.to_vec();
                parts.push(str::pluralize(last));
                parts.join("_")
            }
            None => String::new(),
        }
    }
}
