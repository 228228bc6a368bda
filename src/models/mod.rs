pub mod event;
pub mod outcome;
pub mod paycode;
pub mod row;

pub use event::{EventKey, PaycodeEvent, PaycodeRef, ScheduleEntry};
pub use outcome::{Action, DeleteOutcome, SubmissionOutcome};
pub use paycode::Paycode;
pub use row::{CellValue, RawRow};
