use clap::{Parser, Subcommand};
use uf_app::{AppResult, convert_input, list_categories, list_units};
use uf_catalog::Category;
use uf_core::format_sig;

#[derive(Parser)]
#[command(name = "uf-cli")]
#[command(about = "Unitflow CLI - Interactive unit conversion tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List measurement categories
    Categories,
    /// List units in a category
    Units {
        /// Category name (e.g., length, "weight/mass", temperature)
        category: Category,
    },
    /// Convert one or more values between two units
    Convert {
        /// Category name
        category: Category,
        /// Value, or comma-separated values (e.g., "1, 2.5, 3")
        values: String,
        /// Source unit name
        from: String,
        /// Target unit name
        to: String,
        /// Emit the outcome as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Categories => cmd_categories(),
        Commands::Units { category } => cmd_units(category),
        Commands::Convert {
            category,
            values,
            from,
            to,
            json,
        } => cmd_convert(category, &values, &from, &to, json),
    }
}

fn cmd_categories() -> AppResult<()> {
    for category in list_categories() {
        println!("{category}");
    }
    Ok(())
}

fn cmd_units(category: Category) -> AppResult<()> {
    for unit in list_units(category) {
        println!("{unit}");
    }
    Ok(())
}

fn cmd_convert(
    category: Category,
    values: &str,
    from: &str,
    to: &str,
    json: bool,
) -> AppResult<()> {
    let outcome = convert_input(category, values, from, to)?;
    tracing::debug!(
        %category,
        from,
        to,
        count = outcome.results.len(),
        "converted input"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        for result in &outcome.results {
            println!(
                "{} {} = {} {}",
                format_sig(result.original, 6),
                from,
                format_sig(result.converted, 6),
                to
            );
        }
        println!("Formula: {}", outcome.formula);
    }

    Ok(())
}
