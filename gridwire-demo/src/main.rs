//! Scripted demo: drives a grid over the in-memory source through a
//! session of signals and prints each rendered view.

use std::collections::BTreeMap;
use std::fs::File;

use chrono::NaiveDate;
use gridwire_lib::Grid;
use gridwire_lib::GridSignal;
use gridwire_lib::GridView;
use gridwire_lib::column::Column;
use gridwire_lib::error::GridError;
use gridwire_lib::filter::ColumnFilter;
use gridwire_lib::grid::Action;
use gridwire_lib::grid::RowActionRequest;
use gridwire_lib::model::CellValue;
use gridwire_lib::model::Row;
use gridwire_lib::query::Direction;
use gridwire_lib::query::MemoryQuery;
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() {
    let log_file = File::create("gridwire-demo.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
    }
}

fn run() -> Result<(), GridError> {
    let mut grid = Grid::new()
        .with_source(MemoryQuery::new(sample_rows()))
        .with_primary_key("id");

    grid.add_column(
        Column::text("customer", "Customer")
            .sortable()
            .with_filter(ColumnFilter::Text),
    )?;
    grid.add_column(Column::text("invoice", "Invoice").sortable().natural_sort())?;
    grid.add_column(
        Column::date("created", "Created")
            .with_date_format("%d.%m.%Y")
            .with_filter(ColumnFilter::Date),
    )?;
    grid.add_column(
        Column::text("amount", "Amount").with_formatter(|value, _| match value {
            CellValue::Float(amount) => format!("{amount:.2} EUR"),
            other => other.to_string(),
        }),
    )?;

    grid.add_action(
        Action::new("Archive", "archive")
            .with_css_class("btn-danger")
            .on_execute(|id| {
                info!("Archiving invoice {id}");
                Ok(())
            }),
    );

    println!("=== Initial view ===");
    print_view(&grid.render()?);

    println!("=== Next page ===");
    let next = grid.paginator().next_page();
    print_view(&grid.handle(next)?);

    println!("=== Sorted by invoice number (natural) ===");
    let view = grid.handle(GridSignal::Sort {
        column: "invoice".into(),
        page: 1,
    })?;
    print_view(&view);

    println!("=== Filtered to customers matching \"smith\" ===");
    let submit = grid
        .filter_form()
        .submit(BTreeMap::from([("customer".to_string(), "smith".to_string())]));
    print_view(&grid.handle(submit)?);

    println!("=== Row action: archive invoice 12 ===");
    let request = RowActionRequest::new("archive", 12)
        .with_filters(BTreeMap::from([("customer".to_string(), "smith".to_string())]))
        .with_page(1)
        .with_items_per_page(20)
        .with_sort("invoice", "asc");
    print_view(&grid.handle(GridSignal::RowAction(request))?);

    println!("=== Page size switched to \"All\" ===");
    let select_all = grid.page_size_control().select_size(0);
    print_view(&grid.handle(select_all)?);

    println!("=== Filters reset ===");
    let reset = grid.filter_form().reset();
    print_view(&grid.handle(reset)?);

    let state_json = serde_json::to_string_pretty(grid.state()).expect("state serializes");
    println!("Round-trip state for the next request:\n{state_json}");

    Ok(())
}

fn sample_rows() -> Vec<Row> {
    let customers = [
        "Alice Smith",
        "Bob Novak",
        "Carol Jones",
        "Dan Smith",
        "Eva Brown",
        "Frank Dvorak",
        "Grace Lee",
        "Hana Novak",
    ];
    (1i64..=24)
        .map(|n| {
            let month = (n as u32 - 1) % 12 + 1;
            let day = (n as u32 * 5) % 28 + 1;
            Row::new()
                .set("id", n)
                .set("customer", customers[(n as usize - 1) % customers.len()])
                .set("invoice", format!("INV-{}", (n * 7) % 24 + 1))
                .set(
                    "created",
                    NaiveDate::from_ymd_opt(2024, month, day).expect("valid demo date"),
                )
                .set("amount", n as f64 * 125.5)
        })
        .collect()
}

fn print_view(view: &GridView) {
    let sort = view.sort();
    let mut header = String::new();
    for column in view.columns() {
        let marker = if sort.column.as_deref() == Some(column.name()) {
            match sort.order {
                Direction::Asc => " ^",
                Direction::Desc => " v",
            }
        } else {
            ""
        };
        header.push_str(&format!("{:<18}", format!("{}{marker}", column.label())));
    }
    println!("{header}");

    for row in view.rows() {
        let mut line = String::new();
        for column in view.columns() {
            line.push_str(&format!("{:<18}", column.render_cell(row)));
        }
        println!("{line}");
    }

    let per_page = if view.items_per_page() == 0 {
        "all".to_string()
    } else {
        view.items_per_page().to_string()
    };
    println!(
        "page {} | {} items | {} per page\n",
        view.page(),
        view.total_items(),
        per_page
    );
}
