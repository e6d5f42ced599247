pub mod controller;
pub mod invalidation;
pub mod state;

pub use controller::{CallbackError, ProgressController, ToggleCallback};
pub use invalidation::{ChangeFlags, RootInputs};
pub use state::{Phase, ProgressState, LIKED, UNLIKED};
