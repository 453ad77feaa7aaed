use blog_linker::utils::{logger, validation::Validate};
use blog_linker::{
    extract, AppConfig, CliArgs, ConfigProvider, LinkEngine, LinkerError, LocalStorage, Storage,
};
use clap::Parser;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("Starting blog-linker CLI");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    if let Err(e) = args.validate() {
        tracing::error!("❌ Argument validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    match run(&args).await {
        Ok(Some(output_path)) => {
            tracing::info!("✅ Blog post processed successfully!");
            println!("✅ Blog post processed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Ok(None) => {
            tracing::info!("No accommodation properties found");
            println!("No accommodation properties found in the blog post.");
        }
        Err(e) => {
            tracing::error!("❌ Processing failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Returns the output path, or `None` when the post mentions no accommodations
/// (in which case nothing is written).
async fn run(args: &CliArgs) -> blog_linker::Result<Option<String>> {
    let config = AppConfig::load(args.config.as_deref())?.apply(args.overlay());
    config.validate()?;

    let input_path = args.blog_post.to_string_lossy().to_string();
    tracing::info!("Reading in: {}", input_path);
    let storage = LocalStorage::new(".".to_string());
    let bytes = storage.read_file(&input_path).await?;
    let document = String::from_utf8(bytes).map_err(|e| LinkerError::InputError {
        message: format!("blog post is not valid UTF-8: {}", e),
    })?;

    let extractor = extract::for_config(&config)?;
    let engine = LinkEngine::new(extractor, config.affiliate_id());
    let report = engine.run(&document).await?;

    if report.accommodations.is_empty() {
        return Ok(None);
    }

    for accommodation in &report.accommodations {
        println!(
            "  - {} ({})",
            accommodation.name,
            if accommodation.location.is_empty() {
                "unknown location"
            } else {
                &accommodation.location
            }
        );
    }

    let stem = args
        .blog_post
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| LinkerError::InputError {
            message: format!("cannot derive a file stem from {}", args.blog_post.display()),
        })?;
    let output_dir = args
        .output_dir
        .clone()
        .or_else(|| args.blog_post.parent().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."));
    let output_filename = format!("{}{}.md", stem, config.output_suffix());

    let output_storage = LocalStorage::new(output_dir.to_string_lossy().to_string());
    output_storage
        .write_file(&output_filename, report.content.as_bytes())
        .await?;

    Ok(Some(output_dir.join(output_filename).display().to_string()))
}
