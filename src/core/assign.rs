//! Entry/exit assigner: alternating tags by chronological position within
//! each user-day.

use crate::models::event::{Event, LabeledEvent};
use crate::models::tag::EventTag;
use chrono::NaiveDate;

/// Tag each event by the parity of its 0-based ordinal within its
/// user-day: even positions are entries, odd positions are exits.
///
/// The first row of every group is forced to Entry afterwards. For
/// ordinal 0 the parity rule already yields Entry, but the override is
/// kept as an explicit invariant rather than relying on the grouping
/// order matching the global sort.
pub fn assign_tags(events: Vec<Event>) -> Vec<LabeledEvent> {
    let mut labeled: Vec<LabeledEvent> = Vec::with_capacity(events.len());
    let mut prev_key: Option<(String, Option<NaiveDate>)> = None;
    let mut ordinal = 0usize;

    for event in events {
        let key = (event.user.clone(), event.date);
        let first_in_group = prev_key.as_ref() != Some(&key);

        if first_in_group {
            ordinal = 0;
        } else {
            ordinal += 1;
        }

        let mut tag = EventTag::from_ordinal(ordinal);
        if first_in_group {
            tag = EventTag::Entry;
        }

        prev_key = Some(key);
        labeled.push(LabeledEvent { event, tag });
    }

    labeled
}
