/// Role assigned to an event by its chronological position within a
/// user-day: positions 0, 2, 4, … are entries, 1, 3, 5, … are exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTag {
    Entry,
    Exit,
}

impl EventTag {
    pub fn from_ordinal(ordinal: usize) -> Self {
        if ordinal % 2 == 0 {
            EventTag::Entry
        } else {
            EventTag::Exit
        }
    }

    pub fn is_entry(&self) -> bool {
        matches!(self, EventTag::Entry)
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, EventTag::Exit)
    }
}
