use homescreen::adapters::mock::{ListenerEvent, MockSection, RecordingListener};
use homescreen::config::HomepageConfig;
use homescreen::coordinator::HomepageCoordinator;
use homescreen::models::SectionKind;
use homescreen::telemetry::ChannelTelemetry;
use homescreen::traits::Section;

use color_eyre::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// How long to wait for section refreshes before giving up.
const REFRESH_TIMEOUT: Duration = Duration::from_secs(2);

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("homescreen=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Demo sections. Pocket starts disabled and asks to appear later.
fn demo_sections() -> (Arc<MockSection>, Vec<Arc<dyn Section>>) {
    let pocket = Arc::new(MockSection::new(SectionKind::Pocket).with_enabled(false));
    let sections: Vec<Arc<dyn Section>> = vec![
        Arc::new(MockSection::new(SectionKind::LogoHeader)),
        Arc::new(MockSection::new(SectionKind::TopSites)),
        Arc::new(MockSection::new(SectionKind::JumpBackIn)),
        Arc::new(MockSection::new(SectionKind::MessageCard).with_enabled(false)),
        pocket.clone(),
        Arc::new(MockSection::new(SectionKind::CustomizeHome)),
    ];
    (pocket, sections)
}

fn print_shown(coordinator: &HomepageCoordinator) {
    let names: Vec<&str> = coordinator
        .shown_sections()
        .iter()
        .map(|kind| kind.as_str())
        .collect();
    println!("shown: [{}]", names.join(", "));
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let config = HomepageConfig::from_env()?;
    let (telemetry, mut telemetry_rx) = ChannelTelemetry::new(config.telemetry_channel_capacity)?;
    let (pocket, sections) = demo_sections();

    let mut coordinator = HomepageCoordinator::builder(sections)
        .with_config(config)
        .with_telemetry(Arc::new(telemetry))
        .build()?;

    let surface = Arc::new(RecordingListener::new());
    coordinator.set_listener(surface.clone());
    print_shown(&coordinator);

    coordinator.on_appear();
    coordinator.on_appear();

    let dispatched = coordinator.refresh_all();
    if !surface.wait_for_events(dispatched, REFRESH_TIMEOUT).await {
        tracing::warn!("Timed out waiting for section refreshes");
    }

    // Pocket finished loading stories elsewhere and wants to be shown.
    pocket.set_enabled(true);
    coordinator
        .visibility_requester()
        .request_show(SectionKind::Pocket);
    coordinator.process_visibility_requests();
    print_shown(&coordinator);

    for event in surface.events() {
        match event {
            ListenerEvent::SectionReload(kind) => println!("reload section: {}", kind),
            ListenerEvent::AllReload => println!("reload all sections"),
        }
    }

    while let Ok(event) = telemetry_rx.try_recv() {
        println!("telemetry: {}", serde_json::to_string(&event)?);
    }

    coordinator.on_disappear();
    Ok(())
}
