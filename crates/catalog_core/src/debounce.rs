/// Ticketed debounce: scheduling a new ticket cancels the pending one, and only
/// the pending ticket is allowed to fire.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Debouncer {
    last_ticket: u64,
    pending: Option<u64>,
}

impl Debouncer {
    pub fn schedule(&mut self) -> u64 {
        self.last_ticket += 1;
        self.pending = Some(self.last_ticket);
        self.last_ticket
    }

    /// Consumes `ticket` if it is the pending one.
    pub fn fire(&mut self, ticket: u64) -> bool {
        if self.pending == Some(ticket) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::Debouncer;

    #[test]
    fn only_latest_ticket_fires() {
        let mut debounce = Debouncer::default();
        let first = debounce.schedule();
        let second = debounce.schedule();
        assert!(!debounce.fire(first));
        assert!(debounce.fire(second));
        assert!(!debounce.fire(second));
    }

    #[test]
    fn cancel_discards_pending_ticket() {
        let mut debounce = Debouncer::default();
        let ticket = debounce.schedule();
        debounce.cancel();
        assert!(!debounce.is_pending());
        assert!(!debounce.fire(ticket));
    }
}
