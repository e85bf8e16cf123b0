use std::sync::Arc;

use clap::Parser;

use tarakan::application::ports::ConfigValidator;
use tarakan::application::services::ExtractionService;
use tarakan::domain::{MediaType, SourceDocument};
use tarakan::infrastructure::extraction::{TikaExtractor, TikaPathValidator};
use tarakan::infrastructure::messaging::ConsoleMessenger;
use tarakan::infrastructure::observability::init_tracing;
use tarakan::presentation::{load_settings, Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = load_settings()?;

    init_tracing(&settings.logging);

    let messenger = Arc::new(ConsoleMessenger);
    let validator = Arc::new(TikaPathValidator::new(
        &settings.tika.java_path,
        &settings.tika.tika_path,
        settings.tika.clear_dyld_library_path,
        messenger,
    ));

    match cli.command {
        Commands::Extract { file, media_type } => {
            let extractor = Arc::new(TikaExtractor::new(
                &settings.tika.java_path,
                &settings.tika.tika_path,
                settings.tika.extraction_timeout(),
                settings.tika.clear_dyld_library_path,
            ));
            let service = ExtractionService::new(extractor, validator);

            let document = SourceDocument::new(file, MediaType::new(media_type));
            let text = service.extract(&document).await?;

            // Verbatim; no trailing newline is added.
            print!("{text}");
        }
        Commands::Validate => {
            if let Err(invalid) = validator.validate().await {
                for field in &invalid.fields {
                    eprintln!("{field}");
                }
                std::process::exit(1);
            }
            println!("Tika configuration is valid.");
        }
    }

    Ok(())
}
