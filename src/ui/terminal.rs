//! Text rendition of the map, the form, the session list and notices.
//!
//! Every surface keeps what it has drawn, so a command can inspect the
//! result after the controller is done. Printing can be switched off per
//! surface: one-shot commands only echo what they change.

use crate::core::ports::{FormWidget, MapWidget, Notifier, SessionListWidget};
use crate::core::render::{ListEntry, MarkerSpec, Notice};
use crate::models::location::Location;
use crate::models::variant::SessionVariant;
use crate::ui::messages::{line, Level};
use crate::utils::colors::{color_for_variant, paint, CYAN};
use crate::utils::formatting::{bold, pad_right, truncate};
use crate::utils::table::Table;
use std::io::{self, Write};
use std::time::Duration;

const POPUP_MAX_WIDTH: usize = 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Echo {
    pub map: bool,
    pub list: bool,
}

impl Echo {
    pub const ALL: Echo = Echo {
        map: true,
        list: true,
    };
    pub const NONE: Echo = Echo {
        map: false,
        list: false,
    };
}

pub struct TerminalUi<W: Write> {
    out: W,
    echo: Echo,
    color: bool,
    view: Option<(Location, u8)>,
    markers: Vec<MarkerSpec>,
    entries: Vec<ListEntry>,
    reset_visible: bool,
    form_visible: bool,
    form_field: SessionVariant,
    notices: Vec<Notice>,
}

impl TerminalUi<io::Stdout> {
    pub fn stdout(echo: Echo) -> Self {
        Self::new(io::stdout(), echo, true)
    }
}

impl<W: Write> TerminalUi<W> {
    pub fn new(out: W, echo: Echo, color: bool) -> Self {
        Self {
            out,
            echo,
            color,
            view: None,
            markers: Vec::new(),
            entries: Vec::new(),
            reset_visible: false,
            form_visible: false,
            form_field: SessionVariant::Cadence,
            notices: Vec::new(),
        }
    }

    pub fn set_echo(&mut self, echo: Echo) {
        self.echo = echo;
    }

    pub fn view(&self) -> Option<(Location, u8)> {
        self.view
    }

    pub fn markers(&self) -> &[MarkerSpec] {
        &self.markers
    }

    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn reset_visible(&self) -> bool {
        self.reset_visible
    }

    pub fn form_visible(&self) -> bool {
        self.form_visible
    }

    pub fn form_field(&self) -> SessionVariant {
        self.form_field
    }

    /// Summary table of every marker on the map, for `list`.
    pub fn marker_table(&self) -> Table {
        let mut table = Table::new(["id", "location", "popup"]);
        for marker in &self.markers {
            let id = marker
                .session_id
                .as_ref()
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string());
            table.add_row(vec![
                id,
                marker.location.to_string(),
                truncate(&marker.popup, POPUP_MAX_WIDTH),
            ]);
        }
        table
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{text}") {
            tracing::debug!(error = %e, "terminal write failed");
        }
    }

    fn format_entry(&self, entry: &ListEntry) -> String {
        let color = color_for_variant(entry.variant);
        let title = if self.color {
            bold(&entry.title)
        } else {
            entry.title.clone()
        };
        let head = format!(
            "{} {}",
            paint(&format!("[{}]", entry.session_id), color, self.color),
            title
        );

        let details: Vec<String> = entry
            .details
            .iter()
            .map(|d| pad_right(&format!("{} {} {}", d.icon, d.value, d.unit), 16))
            .collect();

        format!("{head}\n    {}", details.join(" ").trim_end())
    }
}

impl<W: Write> MapWidget for TerminalUi<W> {
    fn set_view(&mut self, center: Location, zoom: u8) {
        self.view = Some((center, zoom));
        if self.echo.map {
            let text = format!("🗺️  Map centered on {center} (zoom {zoom})");
            let text = paint(&text, CYAN, self.color);
            self.emit(&text);
        }
    }

    fn place_marker(&mut self, marker: &MarkerSpec) {
        self.markers.push(marker.clone());
        if self.echo.map {
            let text = format!("📍 {} @ {}", marker.popup, marker.location);
            self.emit(&text);
        }
    }

    fn clear_markers(&mut self) {
        self.markers.clear();
        self.view = None;
    }
}

impl<W: Write> FormWidget for TerminalUi<W> {
    fn show(&mut self) {
        self.form_visible = true;
    }

    fn focus_distance(&mut self) {}

    fn show_variant_field(&mut self, variant: SessionVariant) {
        self.form_field = variant;
    }

    fn hide_and_clear(&mut self, reenable_after: Duration) {
        self.form_visible = false;
        tracing::trace!(?reenable_after, "form hidden");
    }
}

impl<W: Write> SessionListWidget for TerminalUi<W> {
    fn render_entry(&mut self, entry: &ListEntry) {
        self.entries.push(entry.clone());
        if self.echo.list {
            let text = self.format_entry(entry);
            self.emit(&text);
        }
    }

    fn clear_entries(&mut self) {
        self.entries.clear();
    }

    fn set_reset_visible(&mut self, visible: bool) {
        self.reset_visible = visible;
    }
}

impl<W: Write> Notifier for TerminalUi<W> {
    fn notify(&mut self, notice: &Notice) {
        self.notices.push(notice.clone());
        let text = line(Level::Warning, notice, self.color);
        self.emit(&text);
    }
}
