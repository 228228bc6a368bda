use crate::core::normalize::NormalizedRow;
use crate::models::{EventKey, PaycodeEvent, PaycodeRef};
use std::collections::HashMap;

/// Merges normalized rows into one event per key.
///
/// The first row seen for a key fixes the event's name, description and
/// paycode; later rows only append schedules. Events keep first-seen order
/// and schedules keep row order, duplicates included.
#[derive(Debug, Default)]
pub struct Consolidator {
    events: Vec<PaycodeEvent>,
    index: HashMap<EventKey, usize>,
}

impl Consolidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: NormalizedRow) {
        let NormalizedRow {
            key,
            id,
            fields,
            entry,
        } = row;

        match self.index.get(&key) {
            Some(&pos) => self.events[pos].schedules.push(entry),
            None => {
                self.index.insert(key, self.events.len());
                self.events.push(PaycodeEvent {
                    id,
                    name: fields.name,
                    description: fields.description,
                    paycode: PaycodeRef {
                        id: fields.paycode_id,
                    },
                    schedules: vec![entry],
                });
            }
        }
    }

    pub fn finish(self) -> Vec<PaycodeEvent> {
        self.events
    }
}

/// Consolidate a stream of normalized rows in one go.
pub fn consolidate<I>(rows: I) -> Vec<PaycodeEvent>
where
    I: IntoIterator<Item = NormalizedRow>,
{
    let mut c = Consolidator::new();
    for row in rows {
        c.push(row);
    }
    c.finish()
}
