use color_eyre::Result;
use rollcall_service::{filter_records, load_or_empty, BrowserView, FileSource, Record};

use crate::args::{GlobalOptions, SearchArgs};
use crate::{logging, output};

pub async fn execute(options: &GlobalOptions, args: SearchArgs) -> Result<()> {
    logging::init_stderr();

    let records = load_or_empty(&FileSource::new(&options.data)).await;
    let view = BrowserView::derive(&records, &args.query, false);
    let rows = matching_rows(&records, &view, &args);

    if let Some(line) = view.results_line() {
        output::header(&line);
    }
    match view {
        BrowserView::Prompt => output::dim("Type a name or ID to search"),
        BrowserView::NoMatches { query } => {
            output::dim(&format!("No customers found matching \"{}\"", query))
        }
        BrowserView::Loading | BrowserView::Results { .. } => {}
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for record in rows {
            println!("{}", tsv_line(record));
        }
    }
    Ok(())
}

/// The first 50 matches, or all of them with `--all`
fn matching_rows<'a>(
    records: &'a [Record],
    view: &BrowserView<'a, '_>,
    args: &SearchArgs,
) -> Vec<&'a Record> {
    if args.all {
        filter_records(records, &args.query)
    } else {
        view.shown().to_vec()
    }
}

/// One record per line. Tabs and line breaks inside fields become spaces;
/// `--json` keeps them.
fn tsv_line(record: &Record) -> String {
    [&record.id, &record.name, &record.nic, &record.address]
        .iter()
        .map(|field| field.display_text().replace(['\t', '\n', '\r'], " "))
        .collect::<Vec<_>>()
        .join("\t")
}
