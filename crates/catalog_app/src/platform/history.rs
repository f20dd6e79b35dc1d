/// Address bar with a back/forward stack of query strings (without `?`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    index: usize,
}

impl History {
    pub fn new(location: &str) -> Self {
        Self {
            entries: vec![location.strip_prefix('?').unwrap_or(location).to_string()],
            index: 0,
        }
    }

    pub fn current(&self) -> &str {
        &self.entries[self.index]
    }

    /// Address bar text as the user sees it.
    pub fn address(&self) -> String {
        match self.current() {
            "" => String::new(),
            query => format!("?{query}"),
        }
    }

    /// New entry after the current one; forward entries are dropped.
    pub fn push(&mut self, query: String) {
        self.entries.truncate(self.index + 1);
        self.entries.push(query);
        self.index += 1;
    }

    pub fn back(&mut self) -> Option<&str> {
        self.index = self.index.checked_sub(1)?;
        Some(self.current())
    }

    pub fn forward(&mut self) -> Option<&str> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        Some(self.current())
    }

    /// Every entry, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::History;

    #[test]
    fn push_after_back_drops_forward_entries() {
        let mut history = History::new("?tag=excel");
        history.push("tag=excel&page=2".into());
        history.push("tag=charts".into());
        assert_eq!(history.back(), Some("tag=excel&page=2"));
        history.push("tag=m-code".into());
        assert_eq!(history.forward(), None);
        assert_eq!(
            history.entries(),
            ["tag=excel", "tag=excel&page=2", "tag=m-code"]
        );
        assert_eq!(history.back(), Some("tag=excel&page=2"));
        assert_eq!(history.back(), Some("tag=excel"));
        assert_eq!(history.back(), None);
        assert_eq!(history.address(), "?tag=excel");
    }
}
