use std::fmt;
use std::sync::Arc;

use crate::filter::ColumnFilter;
use crate::model::CellValue;
use crate::model::Row;

/// Chrono format string used by date columns unless overridden.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Custom cell formatter, receiving the cell value and the whole row.
///
/// Date columns pre-format the value to a `CellValue::String` before the
/// formatter sees it.
pub type CellFormatter = Arc<dyn Fn(&CellValue, &Row) -> String + Send + Sync>;

/// How a column interprets its cells for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnKind {
    /// Cells render through `CellValue`'s display form.
    Text,
    /// Cells are dates, rendered with a chrono format string.
    Date { format: String },
}

/// A single grid column: display metadata plus optional formatting,
/// filtering and sorting capabilities.
///
/// The name doubles as the field key into fetched rows and is immutable
/// after construction.
#[derive(Clone)]
pub struct Column {
    name: String,
    label: String,
    kind: ColumnKind,
    sortable: bool,
    natural_sort: bool,
    formatter: Option<CellFormatter>,
    filter: Option<ColumnFilter>,
}

impl Column {
    /// Creates a text column.
    pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::with_kind(name, label, ColumnKind::Text)
    }

    /// Creates a date column with the default `%Y-%m-%d` format.
    pub fn date(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::with_kind(
            name,
            label,
            ColumnKind::Date {
                format: DEFAULT_DATE_FORMAT.into(),
            },
        )
    }

    fn with_kind(name: impl Into<String>, label: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            sortable: false,
            natural_sort: false,
            formatter: None,
            filter: None,
        }
    }

    /// Marks the column as sortable through header clicks.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Requests numeric-substring ordering when this column is sorted,
    /// with lexicographic fallback if the source cannot provide it.
    pub fn natural_sort(mut self) -> Self {
        self.natural_sort = true;
        self
    }

    /// Overrides the chrono format of a date column. No effect on text
    /// columns.
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        if let ColumnKind::Date { format: current } = &mut self.kind {
            *current = format.into();
        }
        self
    }

    /// Sets a custom formatter producing the final cell string.
    pub fn with_formatter(
        mut self,
        formatter: impl Fn(&CellValue, &Row) -> String + Send + Sync + 'static,
    ) -> Self {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    /// Attaches a filter capability to the column.
    pub fn with_filter(mut self, filter: ColumnFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> &ColumnKind {
        &self.kind
    }

    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    pub fn is_natural_sort(&self) -> bool {
        self.natural_sort
    }

    pub fn filter(&self) -> Option<&ColumnFilter> {
        self.filter.as_ref()
    }

    /// Renders the display string for this column's cell in `row`.
    ///
    /// Missing fields render empty. Date columns format `Date` and
    /// `DateTime` cells and render anything else empty; the custom
    /// formatter then receives the pre-formatted string. Escaping for any
    /// output surface is the template's concern, not handled here.
    pub fn render_cell(&self, row: &Row) -> String {
        match &self.kind {
            ColumnKind::Text => {
                let value = row.get(&self.name).cloned().unwrap_or_default();
                match &self.formatter {
                    Some(formatter) => formatter(&value, row),
                    None => value.to_string(),
                }
            }
            ColumnKind::Date { format } => {
                let Some(formatted) = format_date_cell(row.get(&self.name), format) else {
                    return String::new();
                };
                match &self.formatter {
                    Some(formatter) => formatter(&CellValue::String(formatted), row),
                    None => formatted,
                }
            }
        }
    }
}

fn format_date_cell(value: Option<&CellValue>, format: &str) -> Option<String> {
    match value? {
        CellValue::Date(date) => Some(date.format(format).to_string()),
        CellValue::DateTime(datetime) => Some(datetime.format(format).to_string()),
        _ => None,
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("kind", &self.kind)
            .field("sortable", &self.sortable)
            .field("natural_sort", &self.natural_sort)
            .field("formatter", &self.formatter.is_some())
            .field("filter", &self.filter)
            .finish()
    }
}
