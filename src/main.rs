use api_digest::core::pipeline::FOLLOW_UP_QUESTION;
use api_digest::core::{ConfigProvider, Confirm};
use api_digest::utils::{logger, validation::Validate};
use api_digest::{
    CliConfig, ConsoleConfirm, DigestError, DigestPipeline, FixedConfirm, FollowUpMode,
    HttpFetcher,
};
use clap::Parser;
use std::time::Duration;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting api-digest");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::debug!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    if let Err(e) = run(config).await {
        tracing::debug!("Run failed: {} (Category: {:?})", e, e.category());
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    Ok(())
}

async fn run(config: CliConfig) -> Result<(), DigestError> {
    let mode = config.follow_up;
    let fetcher = HttpFetcher::new(Duration::from_secs(config.timeout_secs()))?;
    let pipeline = DigestPipeline::new(fetcher, config);

    let mut stdout = std::io::stdout();
    pipeline.run_primary(&mut stdout).await?;

    // 詢問只發生在核心流程之外
    let follow_up = match mode {
        FollowUpMode::Ask => ConsoleConfirm::stdio().confirm(FOLLOW_UP_QUESTION)?,
        FollowUpMode::Yes => FixedConfirm(true).confirm(FOLLOW_UP_QUESTION)?,
        FollowUpMode::No => FixedConfirm(false).confirm(FOLLOW_UP_QUESTION)?,
    };
    tracing::debug!("Follow-up fetch requested: {}", follow_up);

    if follow_up {
        pipeline.run_follow_up(&mut stdout).await?;
    }
    pipeline.finish(&mut stdout)?;

    Ok(())
}
