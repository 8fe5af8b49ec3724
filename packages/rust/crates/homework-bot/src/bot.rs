//! Startup wiring: configuration guard first, then the poll loop.

use std::sync::Arc;

use crate::api::{HomeworkApi, PracticumClient};
use crate::channels::{Channel, TelegramChannel};
use crate::config::{BotConfig, BotSettings, check_tokens};
use crate::error::ConfigurationError;
use crate::notifier::Notifier;
use crate::poller::{HomeworkPoller, PollState, PollSummary, PollerConfig};

/// Run-time knobs that do not come from the environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    /// Stop after this many cycles; `None` polls forever.
    pub max_cycles: Option<u64>,
    /// Initial cursor; `None` starts from now.
    pub from_date: Option<i64>,
}

/// Validate `settings`, build collaborators and run the poll loop.
///
/// The factories are only called once the configuration guard has passed,
/// so a configuration failure never reaches the network.
pub async fn launch<FA, FC>(
    settings: &BotSettings,
    options: LaunchOptions,
    make_api: FA,
    make_channel: FC,
) -> Result<PollSummary, ConfigurationError>
where
    FA: FnOnce(&BotConfig) -> Arc<dyn HomeworkApi>,
    FC: FnOnce(&BotConfig) -> Arc<dyn Channel>,
{
    let config = check_tokens(settings)?;

    let api = make_api(&config);
    let notifier = Notifier::new(make_channel(&config), config.telegram_chat_id());
    let state = options
        .from_date
        .map_or_else(PollState::starting_now, PollState::new);
    let poller_config = PollerConfig {
        max_cycles: options.max_cycles,
        ..PollerConfig::from_config(&config)
    };

    tracing::info!(
        event = "homework_bot.started",
        cursor = state.cursor,
        retry_period_secs = poller_config.retry_period.as_secs(),
        max_cycles = ?poller_config.max_cycles,
        "bot started"
    );
    Ok(HomeworkPoller::new(api, notifier, poller_config, state)
        .run()
        .await)
}

/// [`launch`] with the production Practicum client and Telegram channel.
pub async fn launch_default(
    settings: &BotSettings,
    options: LaunchOptions,
) -> Result<PollSummary, ConfigurationError> {
    launch(
        settings,
        options,
        |config| Arc::new(PracticumClient::from_config(config)) as Arc<dyn HomeworkApi>,
        |config| Arc::new(TelegramChannel::from_config(config)) as Arc<dyn Channel>,
    )
    .await
}
