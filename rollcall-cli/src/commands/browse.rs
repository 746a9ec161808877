use std::sync::Arc;

use color_eyre::Result;
use rollcall_service::FileSource;
use tracing::info;

use crate::args::GlobalOptions;
use crate::logging;

pub async fn execute(options: &GlobalOptions) -> Result<()> {
    logging::init_file(&options.log_path())?;
    info!(data = %options.data.display(), "starting browser");

    let source = Arc::new(FileSource::new(&options.data));
    rollcall_tui::run(options.tui_config(), source).await
}
