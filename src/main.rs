use clap::Parser;
use exam_seating::app::search_then_export;
use exam_seating::core::render;
use exam_seating::utils::{logger, validation::Validate};
use exam_seating::{CliConfig, LocalStorage, SeatingEngine};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI flags: {:?}", cli);

    let config = match cli.resolve().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration failed: {} (Category: {:?})", e, e.category());
            eprintln!("{}", e.user_friendly_message());
            eprintln!("{}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    let engine = SeatingEngine::new(LocalStorage::current_dir(), config);

    let plan = match engine.build_plan() {
        Ok(plan) => plan,
        Err(e) => {
            tracing::error!(
                "Could not build seating plan: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            println!("{}", e.user_friendly_message());
            println!("{}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    print!("{}", render::render_console(&plan.grid));

    let exported = if cli.no_search {
        engine.export(&plan)
    } else {
        search_then_export(&engine, &plan, std::io::stdin().lock(), std::io::stdout())
    };

    match exported {
        Ok(path) => println!("Success: Seating plan exported to '{}'", path),
        Err(e) if !e.is_fatal() => {
            tracing::warn!("{}", e);
            println!("{}", e.user_friendly_message());
        }
        Err(e) => {
            tracing::error!("Export failed: {}", e);
            eprintln!("{}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
