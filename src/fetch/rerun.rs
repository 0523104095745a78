/// Reactive rerun primitive
///
/// Watches a tuple of inputs. Each time the inputs change a new run is
/// issued with a fresh ticket; only the most recent ticket is current, so
/// results of superseded runs can be recognised and dropped no matter in
/// which order they resolve.

/// Identifies one issued run. Tickets increase monotonically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct Rerun<K> {
    inputs: Option<K>,
    issued: u64,
}

impl<K> Default for Rerun<K> {
    fn default() -> Self {
        Self {
            inputs: None,
            issued: 0,
        }
    }
}

impl<K: PartialEq> Rerun<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current inputs.
    ///
    /// Returns a ticket for a new run on the first call and whenever the
    /// inputs differ from the previous call; `None` when nothing changed.
    pub fn observe(&mut self, inputs: K) -> Option<Ticket> {
        if self.inputs.as_ref() == Some(&inputs) {
            return None;
        }

        self.inputs = Some(inputs);
        self.issued += 1;
        Some(Ticket(self.issued))
    }

    /// Whether `ticket` belongs to the latest issued run
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.issued != 0 && ticket.0 == self.issued
    }

    /// Inputs of the latest run
    pub fn inputs(&self) -> Option<&K> {
        self.inputs.as_ref()
    }

    pub fn latest(&self) -> Option<Ticket> {
        (self.issued != 0).then_some(Ticket(self.issued))
    }
}
