mod intent;
mod reducer;
mod state;

pub use intent::EntryIntent;
pub use reducer::{EntryReducer, MAX_AMOUNT_DIGITS};
pub use state::{AmountEntryState, EntryMode};
