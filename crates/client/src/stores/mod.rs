//! App-wide state shared between screens.

pub mod app_state;

pub use app_state::{AlertSlot, AppState, AppStateProvider, RouteNavigator};
