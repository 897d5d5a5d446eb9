//!  Storage is organized through [state_store::FileStateStore].
//!  The basic idea is:
//!   - There is an application directory holding all the state.
//!   - Each of the three values (tasks, unmet streak, experience) lives in its own text file.
//!   - Values are read and written independently; a missing file means the default value.

pub mod entities;
pub mod slot;
pub mod state_store;
