//! WhaleWatch desktop entry point.

use std::process::ExitCode;

use whalewatch::app::App;
use whalewatch::config::{default_config_path, AppConfig};
use whalewatch::debug::init_logger;
use whalewatch::ui::theme::Theme;
use whalewatch::ui::DashboardWindow;

const WINDOW_TITLE: &str = "WHALEWATCH — REAL-TIME SURVEILLANCE SYSTEM";

fn main() -> ExitCode {
    // Guard flushes the file appender on exit
    let _log_guard = init_logger();

    let config = match AppConfig::load(&default_config_path()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load configuration");
            eprintln!("whalewatch: {}", e);
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(?config, "Configuration loaded");

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("whalewatch-worker")
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!(error = %e, "Failed to start async runtime");
            eprintln!("whalewatch: failed to start async runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let _enter = runtime.enter();

    let app = App::new(config, runtime.handle().clone());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        "WhaleWatch",
        options,
        Box::new(|cc| {
            let theme = Theme::default();
            theme.apply(&cc.egui_ctx);
            Ok(Box::new(DashboardWindow::new(app, theme)))
        }),
    );

    match result {
        Ok(()) => {
            tracing::info!("WhaleWatch closed");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Window terminated with an error");
            eprintln!("whalewatch: {}", e);
            ExitCode::FAILURE
        }
    }
}
