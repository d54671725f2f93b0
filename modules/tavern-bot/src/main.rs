use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use ai_client::OpenAi;
use tavern_bot::traits::ChannelClient;
use tavern_bot::{ContentGenerator, ImageAcquirer, Pipeline, Publisher, Scheduler};
use tavern_common::Config;
use telegram::TelegramClient;

/// Unattended publishing bot for the Developer's Tavern channel.
#[derive(Parser, Debug)]
#[command(name = "tavern-bot")]
struct Args {
    /// Fire the pipeline once immediately and exit.
    #[arg(long)]
    once: bool,

    /// Run the connectivity self-check and exit.
    #[arg(long)]
    self_check: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("tavern_bot=info".parse()?)
                .add_directive("tavern_common=info".parse()?)
                .add_directive("ai_client=info".parse()?)
                .add_directive("telegram=info".parse()?),
        )
        .init();

    let args = Args::parse();

    info!("Developer's Tavern bot starting...");

    let config = Config::from_env();
    config.log_redacted();

    let mut agent = OpenAi::new(&config.openai_api_key, &config.text_model)
        .with_image_model(&config.image_model)
        .with_timeout(Duration::from_secs(config.openai_timeout_secs));
    if let Some(ref url) = config.openai_base_url {
        agent = agent.with_base_url(url);
    }
    let agent = Arc::new(agent);

    let transport = Arc::new(ChannelClient::new(
        TelegramClient::new(
            &config.bot_token,
            Duration::from_secs(config.telegram_timeout_secs),
        ),
        &config.channel_id,
    ));

    let acquirer = ImageAcquirer::new(agent.clone(), &config.image_size, &config.image_quality);
    let generator = ContentGenerator::new(agent, acquirer, config.image_posts_enabled);
    let publisher = Publisher::new(transport);
    let pipeline = Pipeline::new(generator, publisher, config.timezone, config.slots);

    if !pipeline.self_check().await {
        error!("Channel connectivity check failed, refusing to start");
        std::process::exit(1);
    }

    if args.self_check {
        info!("Self-check passed");
        return Ok(());
    }

    if args.once {
        pipeline.run_scheduled_firing(chrono::Utc::now()).await;
        return Ok(());
    }

    let scheduler = Scheduler::new(
        config.schedule.clone(),
        config.timezone,
        Duration::from_secs(config.misfire_grace_secs),
    );
    scheduler.run(&pipeline).await;

    info!("Bot stopped");
    Ok(())
}
