//! Nebula Odyssey: promotional page for the 2185 mission.
//!
//! Boots GPUI, opens the single page window, and hands everything else to
//! `ui_page::NebulaPage`.

use gpui::{App, Application};
use ui_page::NebulaPage;

mod args;
mod logging;

fn main() {
    let parsed = args::parse_args();
    let _log_guard = logging::init(parsed.verbose);

    tracing::info!(
        "[Odyssey] starting nebula-odyssey v{}",
        env!("CARGO_PKG_VERSION")
    );

    Application::new().run(|cx: &mut App| {
        cx.activate(true);
        match NebulaPage::open(cx) {
            Ok(_) => tracing::info!("[Odyssey] page window open"),
            Err(e) => {
                tracing::error!("[Odyssey] failed to open window: {e}");
                cx.quit();
            }
        }
    });
}
