//! Toolkit-agnostic presentation adapter.
//! Translates user intents into core calls and core output into view data.

pub mod app;
pub mod clock;
pub mod event_dialog;

pub use app::{CalendarApp, ConfirmAction, MonthView, UiIntent};
pub use clock::{Clock, ManualClock, SystemClock};
pub use event_dialog::EventDialogState;
