/// Search box contents: what is typed versus what was last sent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchBuffer {
    draft: String,
    committed: String,
}

impl SearchBuffer {
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn committed(&self) -> &str {
        &self.committed
    }

    /// Keystroke. Emptying the box commits the empty term immediately;
    /// any other edit stays local until `submit`.
    pub fn edit(&mut self, text: impl Into<String>) -> Option<String> {
        let was_empty = self.draft.is_empty();
        self.draft = text.into();
        if self.draft.is_empty() && !was_empty {
            self.committed.clear();
            return Some(String::new());
        }
        None
    }

    /// Enter. Always yields the draft as the term to search for.
    pub fn submit(&mut self) -> String {
        self.committed = self.draft.clone();
        self.committed.clone()
    }
}
