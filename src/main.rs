use agri_assist::{browse, cli, config, error, report, scan};
use agri_assist_common::Screen;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Screen { id, field, season, metric, period, json } => {
            let config = Config::load()?;
            let screen = match id {
                Some(id) => Screen::from_id(&id),
                None => config.default_screen(),
            };
            let options = report::ScreenOptions { field, season, metric, period };

            if json {
                println!("{}", report::render_json(screen, &options)?);
            } else {
                println!("{}", report::render_text(screen, &options));
            }
        }

        Commands::Scan { image, delay_ms, timeout_secs, json } => {
            let config = Config::load()?;
            let mut settings = config.scan_settings();
            if let Some(ms) = delay_ms {
                settings.delay_ms = ms;
            }
            if let Some(secs) = timeout_secs {
                settings.timeout_ms = secs.saturating_mul(1000);
            }

            let progress = if json {
                indicatif::ProgressBar::hidden()
            } else {
                scan::spinner()
            };
            let cancel = async {
                if tokio::signal::ctrl_c().await.is_err() {
                    std::future::pending::<()>().await;
                }
            };

            let report = match scan::scan_file(&image, settings, &progress, cancel).await {
                Ok(report) => report,
                Err(error::AgriError::Scan(e)) if e.is_silent() => {
                    eprintln!("解析を中止しました");
                    return Ok(());
                }
                Err(e) => return Err(e),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("🍃 agri-assist - 病害スキャン\n");
                println!("{}", scan::render_report(&report));
            }
        }

        Commands::Browse => {
            let config = Config::load()?;
            browse::run_browse(config.default_screen())?;
        }

        Commands::Config { show, set_scan_delay, set_default_screen } => {
            let mut config = Config::load_stored()?;
            let mut changed = false;

            if let Some(ms) = set_scan_delay {
                config.set_scan_delay(ms);
                changed = true;
                println!("✔ 解析の待ち時間を {}ms に設定しました", ms);
            }

            if let Some(id) = set_default_screen {
                let screen = config.set_default_screen(&id)?;
                changed = true;
                println!("✔ 既定の画面を {} に設定しました", screen.label());
            }

            if changed {
                config.save()?;
            }

            if show || !changed {
                println!("設定: {}", Config::config_path()?.display());
                println!("  解析の待ち時間: {}ms", config.scan_delay_ms);
                println!("  タイムアウト: {}秒", config.analysis_timeout_secs);
                println!("  既定の画面: {}", config.default_screen());
            }
        }
    }

    Ok(())
}
