//! Composition root: builds the services from configuration and runs them.

use std::future::Future;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::adapter::inbound::http::{self, WebhookState};
use crate::adapter::inbound::line::SignatureVerifier;
use crate::adapter::outbound::alternative::AlternativeMeClient;
use crate::adapter::outbound::clock::SystemClock;
use crate::adapter::outbound::line::LineClient;
use crate::application::{
    ChangeAlerter, DailyNotifier, InboundDispatcher, MessageResponder, RecipientSlot,
};
use crate::error::Result;
use crate::infrastructure::config::Config;
use crate::infrastructure::scheduler::{ScheduleSpec, Scheduler};
use crate::port::{Clock, IndexSource, Messenger};

/// Everything the webhook path and the scheduler share.
pub struct Services {
    pub recipient: Arc<RecipientSlot>,
    pub dispatcher: Arc<InboundDispatcher>,
    pub alerter: Arc<ChangeAlerter>,
    pub daily: Arc<DailyNotifier>,
    pub clock: Arc<dyn Clock>,
}

impl Services {
    /// Wire the application services around the given ports.
    pub fn new(
        source: Arc<dyn IndexSource>,
        messenger: Arc<dyn Messenger>,
        clock: Arc<dyn Clock>,
        recipient: Arc<RecipientSlot>,
    ) -> Self {
        let dispatcher = InboundDispatcher::new(
            MessageResponder::new(Arc::clone(&source)),
            Arc::clone(&messenger),
            Arc::clone(&recipient),
        );
        let alerter = ChangeAlerter::new(
            Arc::clone(&source),
            Arc::clone(&messenger),
            Arc::clone(&recipient),
            Arc::clone(&clock),
        );
        let daily = DailyNotifier::new(source, messenger, Arc::clone(&recipient), Arc::clone(&clock));

        Self {
            recipient,
            dispatcher: Arc::new(dispatcher),
            alerter: Arc::new(alerter),
            daily: Arc::new(daily),
            clock,
        }
    }
}

/// Build the index source from configuration.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
pub fn build_index_source(config: &Config) -> Result<Arc<dyn IndexSource>> {
    let client = AlternativeMeClient::new(
        config.index.url.clone(),
        config.index.timeout(),
        config.schedule.offset(),
    )?;
    Ok(Arc::new(client))
}

/// Run the bot: webhook server plus scheduled jobs, until `shutdown` resolves.
///
/// # Errors
///
/// Returns an error for missing credentials, an unbindable address, or a
/// server failure. Nothing after startup is fatal.
pub async fn run(config: Config, shutdown: impl Future<Output = ()> + Send + 'static) -> Result<()> {
    let credentials = config.line.credentials()?;
    let preset = config.line.recipient()?;
    if preset.is_none() {
        warn!("LINE_USER_ID not set; pushes start after the first inbound message");
    }

    let source = build_index_source(&config)?;
    let messenger: Arc<dyn Messenger> = Arc::new(LineClient::new(
        config.line.api_base.clone(),
        credentials.access_token,
        config.line.timeout(),
    )?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::new(config.schedule.offset()));
    let services = Services::new(
        source,
        messenger,
        clock,
        Arc::new(RecipientSlot::new(preset)),
    );

    let listener = TcpListener::bind(config.server.bind_addr()).await?;

    let spec = ScheduleSpec {
        daily_times: config.schedule.parsed_daily_times()?,
        change_check_interval: config.schedule.change_check_interval(),
    };
    let scheduler = Scheduler::new(
        spec,
        Arc::clone(&services.daily),
        Arc::clone(&services.alerter),
        Arc::clone(&services.clock),
    )
    .start();

    let router = http::router(WebhookState {
        verifier: Arc::new(SignatureVerifier::new(credentials.channel_secret)),
        dispatcher: Arc::clone(&services.dispatcher),
    });
    let result = http::serve(listener, router, shutdown).await;
    scheduler.shutdown();
    info!("Webhook server stopped");

    result.map_err(Into::into)
}
