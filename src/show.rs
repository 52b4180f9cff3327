use anyhow::{Context, Result};
use tracing::{debug, info_span};

use dimdate_calendar::{attributes_for, check_key_year};

use crate::cli::ShowArgs;

/// Print the dimension row of a single date as pretty JSON on stdout.
pub fn run(args: ShowArgs) -> Result<()> {
    let _cmd = info_span!("show", date = %args.date).entered();

    check_key_year(args.date)?;
    let row = attributes_for(args.date);
    debug!(date_key = row.date_key, "computed attributes");

    let json = serde_json::to_string_pretty(&row).context("failed to serialize row")?;
    println!("{json}");
    Ok(())
}
