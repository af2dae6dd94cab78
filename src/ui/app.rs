use crate::ui::entry::{AmountEntryState, EntryIntent, EntryMode, EntryReducer};
use crate::ui::input::parse_amount;
use crate::ui::mvi::{Reducer, Store, Subscription};
use crate::ui::scoreboard::{MatchId, ScoreboardIntent, ScoreboardReducer, ScoreboardState};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub type ScoreboardStore = Store<ScoreboardReducer>;

/// Local MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// View-side owner of the scoreboard store.
///
/// Scores live in the shared [`ScoreboardStore`]; selection and the amount
/// form are view state and stay here. The app subscribes to the store on
/// construction and uses the notification to schedule a full redraw.
pub struct App {
    should_quit: bool,
    store: ScoreboardStore,
    subscription: Option<Subscription>,
    redraw: Arc<AtomicBool>,
    /// Selected match, by id so it survives renumbering.
    selected: Option<MatchId>,
    /// Amount form state (MVI pattern).
    entry: AmountEntryState,
}

impl App {
    pub fn new(store: ScoreboardStore) -> Self {
        let redraw = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&redraw);
        let subscription = store.subscribe(move || flag.store(true, Ordering::Release));
        let selected = store.get_state().matches.first().map(|m| m.id);
        Self {
            should_quit: false,
            store,
            subscription: Some(subscription),
            redraw,
            selected,
            entry: AmountEntryState::default(),
        }
    }

    pub fn store(&self) -> &ScoreboardStore {
        &self.store
    }

    pub fn state(&self) -> Arc<ScoreboardState> {
        self.store.get_state()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn request_redraw(&self) {
        self.redraw.store(true, Ordering::Release);
    }

    /// True if something changed since the last call.
    pub fn take_redraw(&self) -> bool {
        self.redraw.swap(false, Ordering::AcqRel)
    }

    pub fn selected_index(&self) -> Option<usize> {
        let id = self.selected?;
        self.state().position_of(id)
    }

    pub fn move_selection(&mut self, direction: i32) {
        let state = self.state();
        if state.is_empty() {
            self.selected = None;
            return;
        }

        let len = state.len();
        let current = self
            .selected
            .and_then(|id| state.position_of(id))
            .unwrap_or(0);
        let next = if direction.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };

        self.selected = Some(state.matches[next].id);
        self.request_redraw();
    }

    pub fn add_match(&mut self) {
        self.store.dispatch(ScoreboardIntent::add_match());
        self.selected = self.state().matches.last().map(|m| m.id);
    }

    /// Delete the selected match and move the selection to the match that
    /// took its place (or the new last one).
    pub fn delete_selected(&mut self) {
        let Some(index) = self.selected_index() else {
            return;
        };
        self.store.dispatch(ScoreboardIntent::delete_match(index));
        let state = self.state();
        self.selected = state
            .matches
            .get(index)
            .or_else(|| state.matches.last())
            .map(|m| m.id);
    }

    pub fn reset_scores(&mut self) {
        self.store.dispatch(ScoreboardIntent::reset_all());
    }

    // ========================================================================
    // Amount form (MVI pattern)
    // ========================================================================

    pub fn entry(&self) -> &AmountEntryState {
        &self.entry
    }

    pub fn dispatch_entry(&mut self, intent: EntryIntent) {
        dispatch_mvi!(self, entry, EntryReducer, intent);
        self.request_redraw();
    }

    pub fn open_entry(&mut self, mode: EntryMode) {
        let Some(target) = self.selected else {
            return;
        };
        self.dispatch_entry(EntryIntent::Open { mode, target });
    }

    /// Validate the typed amount and dispatch it to the target match.
    ///
    /// Invalid amounts are dropped and the form stays open. A target that no
    /// longer exists closes the form. Returns true if an intent was dispatched.
    pub fn submit_entry(&mut self) -> bool {
        let AmountEntryState::Editing {
            mode,
            target,
            buffer,
        } = &self.entry
        else {
            return false;
        };
        let Some(value) = parse_amount(buffer) else {
            tracing::debug!(input = %buffer, "Ignoring invalid amount");
            return false;
        };
        let (mode, target) = (*mode, *target);

        let Some(index) = self.state().position_of(target) else {
            tracing::debug!("Amount target no longer exists");
            self.dispatch_entry(EntryIntent::Close);
            return false;
        };

        let intent = match mode {
            EntryMode::Increment => ScoreboardIntent::increment(index, value),
            EntryMode::Decrement => ScoreboardIntent::decrement(index, value),
        };
        self.store.dispatch(intent);
        self.dispatch_entry(EntryIntent::Close);
        true
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }
}
