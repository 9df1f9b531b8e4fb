use super::CalendarApp;
use crate::services::calendar::{render_month, CalendarError, MonthGrid, WEEKDAY_HEADERS};
use crate::services::notification::Toast;
use crate::services::storage::KeyValueStore;
use crate::ui::clock::Clock;

/// Everything the presentation surface needs to draw one frame.
#[derive(Debug, Clone)]
pub struct MonthView<'a> {
    /// Header such as "October 2026"
    pub label: String,
    pub weekday_headers: [&'static str; 7],
    pub grid: MonthGrid<'a>,
    pub toast: Option<&'a Toast>,
}

impl<S: KeyValueStore, C: Clock> CalendarApp<S, C> {
    /// Render the displayed month against the current store contents.
    pub fn view(&self) -> Result<MonthView<'_>, CalendarError> {
        let grid = render_month(
            self.displayed.year(),
            self.displayed.month(),
            &self.store,
            self.clock.today(),
        )?;

        Ok(MonthView {
            label: self.displayed.label(),
            weekday_headers: WEEKDAY_HEADERS,
            grid,
            toast: self.toast(),
        })
    }
}
