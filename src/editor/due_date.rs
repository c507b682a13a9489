//! Due-date editing session.

use std::sync::Arc;

use chrono::{DateTime, FixedOffset, NaiveDate};
use chrono_tz::Tz;
use tracing::{debug, warn};

use super::selection::add_day_to_range;
use crate::domain::property::display_range;
use crate::domain::{
    local_datetime, to_local_display, to_stored_utc, BoardId, Card, DateRange, LocalRange,
    TemplateId,
};
use crate::error::Result;
use crate::port::{DateFormatter, PropertyMutator};

/// Button text for an unset date when a placeholder is requested.
pub const EMPTY_PLACEHOLDER: &str = "Empty";

/// Hour typed and clicked dates are anchored at, away from any midnight
/// DST transition.
const ANCHOR_HOUR: u32 = 12;

/// Which input of the dialog an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    From,
    To,
}

/// State of one due-date field while it is being edited.
///
/// Created from the card's current value; every change is written through
/// the mutator immediately and the session keeps the new value as its own.
pub struct DueDateEditor {
    board_id: BoardId,
    card: Card,
    template_id: TemplateId,
    tz: Tz,
    formatter: Arc<dyn DateFormatter>,
    mutator: Arc<dyn PropertyMutator>,
    value: String,
    range: DateRange,
    from_input: String,
    to_input: String,
    range_mode: bool,
    dialog_open: bool,
    read_only: bool,
}

impl DueDateEditor {
    pub fn new(
        card: Card,
        template_id: TemplateId,
        tz: Tz,
        formatter: Arc<dyn DateFormatter>,
        mutator: Arc<dyn PropertyMutator>,
    ) -> Self {
        let value = card.property_text(&template_id).to_string();
        let mut editor = Self {
            board_id: card.board_id.clone(),
            card,
            template_id,
            tz,
            formatter,
            mutator,
            value: String::new(),
            range: DateRange::default(),
            from_input: String::new(),
            to_input: String::new(),
            range_mode: false,
            dialog_open: false,
            read_only: false,
        };
        editor.load(value);
        editor
    }

    #[must_use]
    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// The stored value as last written or loaded.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    /// The value as shown to the viewer.
    pub fn local(&self) -> LocalRange {
        to_local_display(&self.range, self.range.includes_time(), &self.tz)
    }

    /// True when a start date is set.
    pub fn is_range(&self) -> bool {
        self.local().is_range()
    }

    /// Months the calendar shows: two while picking a span.
    pub fn months(&self) -> u8 {
        if self.range_mode {
            2
        } else {
            1
        }
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn from_input(&self) -> &str {
        &self.from_input
    }

    pub fn to_input(&self) -> &str {
        &self.to_input
    }

    /// Placeholder for the date inputs.
    pub fn placeholder(&self) -> String {
        self.formatter.input_placeholder()
    }

    pub fn card(&self) -> &Card {
        &self.card
    }

    /// Read-only rendering of the value.
    pub fn display_value(&self) -> String {
        display_range(&self.local(), self.formatter.as_ref())
    }

    /// Text on the field button.
    pub fn button_text(&self, show_empty_placeholder: bool) -> String {
        let display = self.display_value();
        if display.is_empty() && show_empty_placeholder {
            return EMPTY_PLACEHOLDER.to_string();
        }
        display
    }

    /// Month the calendar opens on.
    pub fn initial_month(&self, today: NaiveDate) -> NaiveDate {
        let local = self.local();
        local
            .from
            .or(local.to)
            .map_or(today, |d| d.date_naive())
    }

    pub fn open(&mut self) {
        if self.read_only {
            debug!(card_id = %self.card.id, "Ignoring open on read-only due date");
            return;
        }
        self.dialog_open = true;
    }

    /// Close the dialog. Changes were already written as they were made.
    pub fn close(&mut self) {
        self.dialog_open = false;
    }

    /// The property changed outside this session.
    pub fn external_change(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.card.set_property(self.template_id.clone(), value.as_str());
        self.load(value);
    }

    /// A day was clicked on the calendar.
    pub fn click_day(&mut self, day: NaiveDate) -> Result<()> {
        if self.read_only {
            return Ok(());
        }
        let Some(clicked) = self.anchor(day) else {
            warn!(%day, "Clicked day cannot be placed in viewer timezone");
            return Ok(());
        };

        let local = self.local();
        let next = if self.range_mode {
            add_day_to_range(clicked, &local)
        } else {
            LocalRange {
                from: None,
                to: Some(clicked),
                include_time: local.include_time,
            }
        };
        let range_mode = self.range_mode && next.from.is_some();
        self.save_range(next, range_mode)
    }

    /// Switch between single-date and span selection.
    ///
    /// Entering span mode starts a one-day span on the current date;
    /// leaving it keeps only the end date.
    pub fn toggle_range(&mut self) -> Result<()> {
        if self.read_only {
            return Ok(());
        }
        let local = self.local();
        let end = local.to.or(local.from);

        if self.range_mode {
            return self.save_range(
                LocalRange {
                    from: None,
                    to: end,
                    include_time: local.include_time,
                },
                false,
            );
        }

        if end.is_none() {
            self.range_mode = true;
            return Ok(());
        }
        self.save_range(
            LocalRange {
                from: end,
                to: end,
                include_time: local.include_time,
            },
            true,
        )
    }

    /// The start input gained focus: switch it to input format.
    pub fn focus_from(&mut self) {
        if let Some(from) = self.local().from {
            self.from_input = self.formatter.input_date(&from);
        }
    }

    /// The end input gained focus: switch it to input format.
    pub fn focus_to(&mut self) {
        if let Some(to) = self.local().to {
            self.to_input = self.formatter.input_date(&to);
        }
    }

    pub fn set_from_input(&mut self, text: impl Into<String>) {
        self.from_input = text.into();
    }

    pub fn set_to_input(&mut self, text: impl Into<String>) {
        self.to_input = text.into();
    }

    /// Commit the typed start date, or revert the input if it is not a date.
    pub fn save_from_input(&mut self) -> Result<()> {
        self.save_input(Bound::From)
    }

    /// Commit the typed end date, or revert the input if it is not a date.
    pub fn save_to_input(&mut self) -> Result<()> {
        self.save_input(Bound::To)
    }

    pub fn cancel_from_input(&mut self) {
        self.from_input = self.display_bound(self.local().from);
    }

    pub fn cancel_to_input(&mut self) {
        self.to_input = self.display_bound(self.local().to);
    }

    fn save_input(&mut self, bound: Bound) -> Result<()> {
        if self.read_only {
            return Ok(());
        }
        let text = match bound {
            Bound::From => &self.from_input,
            Bound::To => &self.to_input,
        };
        let parsed = self
            .formatter
            .parse_input(text)
            .and_then(|day| self.anchor(day));

        let local = self.local();
        let Some(date) = parsed else {
            debug!(input = %text, ?bound, "Typed date not understood, reverting");
            match bound {
                Bound::From => self.from_input = self.display_bound(local.from),
                Bound::To => self.to_input = self.display_bound(local.to),
            }
            return Ok(());
        };

        let next = match bound {
            Bound::From => LocalRange {
                from: Some(date),
                ..local
            },
            Bound::To => LocalRange {
                to: Some(date),
                ..local
            },
        };
        let range_mode = self.range_mode;
        self.save_range(next, range_mode)
    }

    /// Store a displayed range: convert to UTC, encode and dispatch.
    ///
    /// Session state, `range_mode` included, changes only once the
    /// mutator accepted the value.
    fn save_range(&mut self, mut local: LocalRange, range_mode: bool) -> Result<()> {
        local.include_time = self.range.include_time;
        let stored = to_stored_utc(&local, self.range.includes_time());
        let encoded = stored.encode();

        if encoded != self.value {
            self.mutator.change_property_value(
                &self.board_id,
                &self.card,
                &self.template_id,
                &encoded,
            )?;
            debug!(card_id = %self.card.id, value = %encoded, "Due date saved");
            self.card
                .set_property(self.template_id.clone(), encoded.as_str());
            self.value = encoded;
        }
        self.range = stored;
        self.range_mode = range_mode || local.from.is_some();
        self.from_input = self.display_bound(local.from);
        self.to_input = self.display_bound(local.to);
        Ok(())
    }

    fn load(&mut self, value: String) {
        self.range = DateRange::decode(&value);
        self.value = value;
        let local = self.local();
        self.range_mode = local.from.is_some();
        self.from_input = self.display_bound(local.from);
        self.to_input = self.display_bound(local.to);
    }

    fn anchor(&self, day: NaiveDate) -> Option<DateTime<FixedOffset>> {
        day.and_hms_opt(ANCHOR_HOUR, 0, 0)
            .and_then(|wall| local_datetime(wall, &self.tz))
    }

    fn display_bound(&self, bound: Option<DateTime<FixedOffset>>) -> String {
        bound
            .map(|date| self.formatter.display_date(&date))
            .unwrap_or_default()
    }
}
