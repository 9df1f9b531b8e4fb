use super::CalendarApp;
use crate::services::calendar::DisplayedMonth;
use crate::services::storage::KeyValueStore;
use crate::ui::clock::Clock;

impl<S: KeyValueStore, C: Clock> CalendarApp<S, C> {
    pub(super) fn navigate(&mut self, delta_months: i32) {
        match self.displayed.shift(delta_months) {
            Ok(displayed) => {
                self.displayed = displayed;
                log::debug!("Showing {}", self.displayed.label());
            }
            Err(err) => log::warn!("Staying on {}: {}", self.displayed.label(), err),
        }
    }

    pub(super) fn jump_to_today(&mut self) {
        self.displayed = DisplayedMonth::containing(self.clock.today());
    }
}
