//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::{DataResource, DispatchResult};

use crate::action::Action;
use crate::effect::Effect;
use crate::state::AppState;

/// Error shown when submit fires with a whitespace-only id. No request is made.
pub const EMPTY_ID_ERROR: &str = "Please enter a weather ID";

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Lookup actions =====
        Action::LookupIdChange(value) => {
            state.lookup_id = value;
            DispatchResult::changed()
        }

        Action::LookupSubmit(value) => {
            // One request in flight at a time; the submit row is rendered
            // disabled while Loading, this guard backs that up.
            if state.record.is_loading() {
                return DispatchResult::unchanged();
            }
            state.lookup_id = value;
            let id = state.trimmed_id().to_string();
            if id.is_empty() {
                state.record = DataResource::Failed(EMPTY_ID_ERROR.to_string());
                return DispatchResult::changed();
            }
            // Replacing the resource discards any prior record or error
            // before the request settles.
            state.record = DataResource::Loading;
            state.tick_count = 0;
            DispatchResult::changed_with(Effect::FetchRecord { id })
        }

        Action::LookupDidLoad(record) => {
            state.record = DataResource::Loaded(record);
            DispatchResult::changed()
        }

        Action::LookupDidError(msg) => {
            state.record = DataResource::Failed(msg);
            DispatchResult::changed()
        }

        // ===== UI actions =====
        Action::Render => DispatchResult::changed(),

        // ===== Global actions =====
        Action::Tick => {
            if state.record.is_loading() {
                state.tick_count = state.tick_count.wrapping_add(1);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}
