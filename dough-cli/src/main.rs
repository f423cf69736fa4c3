mod commands;
mod i18n;
mod logger;
mod profile;
mod render;

use clap::{Parser, Subcommand};

use commands::{Output, flours::FloursArgs, recipe::RecipeArgs, water::WaterArgs};
use i18n::Language;

#[derive(Parser, Debug)]
#[command(
    name = "dough",
    about = "Pizza dough calculator: baker's percentages, yeast from the fermentation schedule, kneading water temperature.",
    version
)]
struct Cli {
    /// Label language
    #[arg(long, value_enum, global = true, default_value_t = Language::En)]
    lang: Language,

    /// Print the computed records as JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    /// Debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ingredient masses, fermentation timeline and flour recommendation
    Recipe(RecipeArgs),
    /// Water temperature needed to hit a target dough temperature
    WaterTemp(WaterArgs),
    /// List the flour catalog, optionally filtered by style
    Flours(FloursArgs),
}

fn main() {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let out = Output {
        lang: cli.lang,
        json: cli.json,
    };
    let res = match cli.command {
        Commands::Recipe(args) => commands::recipe::run(args, out),
        Commands::WaterTemp(args) => commands::water::run(args, out),
        Commands::Flours(args) => commands::flours::run(args, out),
    };

    if let Err(e) = res {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_stages_and_globals() {
        let cli = Cli::try_parse_from([
            "dough", "recipe", "--stage", "2@25", "--stage", "24@4", "--balls", "6", "--lang",
            "ja", "--json",
        ])
        .unwrap();
        assert_eq!(cli.lang, Language::Ja);
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Recipe(_)));
    }

    #[test]
    fn test_rejects_too_many_balls() {
        assert!(Cli::try_parse_from(["dough", "recipe", "--balls", "51"]).is_err());
    }

    #[test]
    fn test_water_temp_subcommand() {
        let cli = Cli::try_parse_from(["dough", "water-temp", "--unit", "f", "--target", "77"]);
        assert!(matches!(cli.unwrap().command, Commands::WaterTemp(_)));
    }
}
