//! Command implementations for HR CLI.
//!
//! Provides subcommands for fetching dashboard chart endpoints, printing
//! click-to-filter URLs, and replaying column visibility reconciliation
//! without a browser.

use clap::Subcommand;

pub mod chart;
pub mod columns;

/// Local development server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Subcommand)]
pub enum Command {
    /// Fetch a widget's endpoint and print the Chart.js config it would render
    Chart {
        /// Widget name (see `widgets`)
        widget: String,

        /// Server the endpoint is fetched from
        #[arg(short = 'b', long, default_value = DEFAULT_BASE_URL)]
        base_url: String,

        /// Period for widgets that take one (today, week, month, year)
        #[arg(short = 'p', long, default_value = "today")]
        period: String,
    },

    /// Print the list URL a click on `label` navigates to
    FilterUrl {
        /// Widget name (see `widgets`)
        widget: String,

        /// Clicked category label
        label: String,

        #[arg(short = 'p', long, default_value = "today")]
        period: String,
    },

    /// Replay column reconciliation for a table and print the outcome
    Columns {
        /// Table name (`data-table-name`)
        #[arg(short = 't', long)]
        table: String,

        /// Columns as `index` or `index:title`, in table order
        #[arg(short = 'c', long = "column", required = true)]
        columns: Vec<String>,

        /// Stored selection, as it would be in localStorage
        #[arg(short = 's', long)]
        stored: Option<String>,

        /// Toggles applied after load, as `index=on` or `index=off`
        #[arg(long = "toggle")]
        toggles: Vec<String>,
    },

    /// List registered chart widgets
    Widgets,
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Chart {
            widget,
            base_url,
            period,
        } => chart::run_chart(&widget, &base_url, &period).await,
        Command::FilterUrl {
            widget,
            label,
            period,
        } => {
            println!("{}", chart::filter_url(&widget, &label, &period)?);
            Ok(())
        }
        Command::Columns {
            table,
            columns,
            stored,
            toggles,
        } => {
            let outcome = columns::simulate(&table, &columns, stored.as_deref(), &toggles)?;
            println!("visible: {}", outcome.visible.join(","));
            println!("stored:  {}", outcome.stored.as_deref().unwrap_or("<none>"));
            Ok(())
        }
        Command::Widgets => {
            for spec in hr_core::widgets::ALL {
                println!(
                    "{:<14} {:<9} #{:<16} {}",
                    spec.name,
                    spec.kind.as_str(),
                    spec.element_id,
                    spec.endpoint
                );
            }
            Ok(())
        }
    }
}
