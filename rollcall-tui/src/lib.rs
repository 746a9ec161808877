mod app;
mod config;
mod events;
mod ui;

use std::sync::Arc;

use app::App;
use color_eyre::Result;
use rollcall_service::RecordSource;

pub use config::TuiConfig;

/// Open the record browser and block until the user quits.
///
/// The record load starts immediately and settles in the background while
/// the view is already accepting input.
pub async fn run(config: TuiConfig, source: Arc<dyn RecordSource>) -> Result<()> {
    let terminal = ratatui::init();
    let mut app = App::new(config);
    app.start_load(source);
    let result = app.run(terminal).await;
    ratatui::restore();
    result
}
