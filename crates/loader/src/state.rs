//! Run state machine.
//!
//! ```text
//! Init -> Loading(users) -> ... -> Loading(todos) -> Done
//!            \__________________________/
//!                        | any failure
//!                   RollingBack -> Closed
//! ```

use std::fmt;

use jph_core::resource::Resource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Init,
    Loading(Resource),
    Done,
    RollingBack,
    Closed,
}

impl LoadState {
    /// The state after the current step succeeds.
    pub fn advance(self) -> LoadState {
        match self {
            LoadState::Init => LoadState::Loading(Resource::LOAD_ORDER[0]),
            LoadState::Loading(resource) => resource
                .next()
                .map_or(LoadState::Done, LoadState::Loading),
            LoadState::RollingBack => LoadState::Closed,
            terminal => terminal,
        }
    }

    /// The state after the current step fails.
    pub fn fail(self) -> LoadState {
        match self {
            LoadState::Done | LoadState::Closed => self,
            _ => LoadState::RollingBack,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, LoadState::Done | LoadState::Closed)
    }
}

impl fmt::Display for LoadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadState::Init => f.write_str("init"),
            LoadState::Loading(resource) => write!(f, "loading_{resource}"),
            LoadState::Done => f.write_str("done"),
            LoadState::RollingBack => f.write_str("rollback"),
            LoadState::Closed => f.write_str("closed"),
        }
    }
}
