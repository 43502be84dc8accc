use clap::Parser;
use student_info::utils::logger;
use student_info::{config, Application, CliConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match config::resolve(&cli) {
        Ok(config) => config,
        Err(e) => {
            // the subscriber is not installed yet
            eprintln!("❌ Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    logger::init_logger(config.log_format(), cli.verbose);
    tracing::info!("Starting student-info");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let app = Application::build(&*config).await?;
    app.run().await?;

    Ok(())
}
