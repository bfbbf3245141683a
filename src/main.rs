// SPDX-License-Identifier: MPL-2.0
use chrono::Datelike;
use frontkit::config;
use frontkit::dates::{self, DateStyle, TimeStyle, TimeUnit};
use frontkit::i18n::I18n;
use frontkit::logging;
use frontkit::notifications::{Category, Lifetime, Notification, NotificationManager};
use frontkit::{Error, Result};
use std::process::ExitCode;
use std::time::Duration;
use tracing::warn;

const HELP: &str = "\
frontkit - date utilities and toast notification demo

USAGE:
  frontkit [--lang <LANG>] [--config-dir <DIR>] <COMMAND> [ARGS]

COMMANDS:
  parse <DATE>                      Print DATE as an ISO 8601 UTC timestamp
  format <DATE> [--style <STYLE>] [--time <TIME>] [--pattern <PATTERN>]
                                    Print DATE in the current language
                                    STYLE: short, medium, long, full
                                    TIME: short, medium
  relative <DATE> [--now <DATE>]    Describe DATE relative to now
  add <DATE> <AMOUNT> <UNIT>        Shift DATE by AMOUNT units
  diff <A> <B> <UNIT>               Whole UNITs from B to A
  calendar <DATE>                   Show week/month boundaries of DATE
  toast <CATEGORY> <MESSAGE> [--lifetime <MS>]
                                    Show one notification until it expires
                                    CATEGORY: success, info, warning, error
  toast-demo                        Run the notification manager briefly

OPTIONS:
  --lang <LANG>        Language (e.g. en-US, fr)
  --config-dir <DIR>   Directory holding settings.toml
  -h, --help           Print this help

ENVIRONMENT:
  FRONTKIT_CONFIG_DIR  Config directory when --config-dir is absent
  FRONTKIT_LOG         Log filter (default: frontkit=info)
";

fn main() -> ExitCode {
    logging::init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(mut args: pico_args::Arguments) -> Result<()> {
    let lang: Option<String> = args.opt_value_from_str("--lang")?;
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir")?;
    config::paths::init_cli_override(config_dir);

    let (config, warning) = config::load();
    if let Some(message) = warning {
        eprintln!("warning: {message}");
    }
    let i18n = I18n::new(lang.as_deref(), &config);

    let Some(command) = args.subcommand()? else {
        print!("{HELP}");
        return Ok(());
    };

    match command.as_str() {
        "parse" => {
            let input: String = args.free_from_str()?;
            finish(args)?;
            println!("{}", dates::to_iso_string(&input)?);
        }
        "format" => {
            let style: DateStyle = args.opt_value_from_str("--style")?.unwrap_or_default();
            let time: Option<TimeStyle> = args.opt_value_from_str("--time")?;
            let pattern: Option<String> = args.opt_value_from_str("--pattern")?;
            let input: String = args.free_from_str()?;
            finish(args)?;
            let text = match pattern {
                Some(pattern) => i18n.format_pattern(&input, &pattern)?,
                None => i18n.format_date(&input, style, time)?,
            };
            println!("{text}");
        }
        "relative" => {
            let now: Option<String> = args.opt_value_from_str("--now")?;
            let input: String = args.free_from_str()?;
            finish(args)?;
            let text = match now {
                Some(now) => i18n.format_relative(&input, &now)?,
                None => i18n.format_relative(&input, dates::now())?,
            };
            println!("{text}");
        }
        "add" => {
            let input: String = args.free_from_str()?;
            let amount: i64 = args.free_from_str()?;
            let unit: TimeUnit = args.free_from_str()?;
            finish(args)?;
            println!("{}", dates::to_iso_string(dates::add_time(&input, amount, unit)?)?);
        }
        "diff" => {
            let a: String = args.free_from_str()?;
            let b: String = args.free_from_str()?;
            let unit: TimeUnit = args.free_from_str()?;
            finish(args)?;
            let diff = dates::diff_time(&a, &b, unit)?;
            if unit.is_approximate() {
                println!("{diff} {unit} (approximate)");
            } else {
                println!("{diff} {unit}");
            }
        }
        "calendar" => {
            let input: String = args.free_from_str()?;
            finish(args)?;
            print_calendar(&i18n, &input)?;
        }
        "toast" => {
            let lifetime: Option<i64> = args.opt_value_from_str("--lifetime")?;
            let category: Category = args.free_from_str()?;
            let message: String = args.free_from_str()?;
            finish(args)?;
            let lifetime = lifetime.map(Lifetime::from_millis).transpose()?;
            toast(
                NotificationManager::with_config(config.notifications),
                category,
                message,
                lifetime,
            )?;
        }
        "toast-demo" => {
            finish(args)?;
            toast_demo(NotificationManager::with_config(config.notifications))?;
        }
        other => {
            return Err(Error::Usage(format!(
                "unknown command '{other}' (see --help)"
            )))
        }
    }
    Ok(())
}

fn finish(args: pico_args::Arguments) -> Result<()> {
    let rest = args.finish();
    if rest.is_empty() {
        Ok(())
    } else {
        Err(Error::Usage(format!("unexpected arguments: {rest:?}")))
    }
}

fn print_calendar(i18n: &I18n, input: &str) -> Result<()> {
    let date = dates::parse_date(input)?;
    let (iso_year, week) = dates::iso_week(date)?;
    let (year, month) = (date.year(), date.month());

    println!("date:           {}", i18n.format_date(date, DateStyle::Full, None)?);
    println!("iso week:       {iso_year}-W{week:02}");
    println!("weekend:        {}", dates::is_weekend(date)?);
    println!(
        "week:           {} .. {}",
        dates::to_iso_string(dates::start_of_week(date)?)?,
        dates::to_iso_string(dates::end_of_week(date)?)?,
    );
    println!(
        "month:          {} .. {}",
        dates::to_iso_string(dates::start_of_month(date)?)?,
        dates::to_iso_string(dates::end_of_month(date)?)?,
    );
    println!("days in month:  {}", dates::days_in_month(year, month)?);
    println!("leap year:      {}", dates::is_leap_year(year));
    Ok(())
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    Ok(runtime)
}

fn toast(
    manager: NotificationManager,
    category: Category,
    message: String,
    lifetime: Option<Lifetime>,
) -> Result<()> {
    runtime()?.block_on(async {
        let _subscription = manager.subscribe(print_snapshot);
        let id = manager.show(message, category, lifetime)?;
        let lifetime = manager.get(id).map(|n| n.lifetime()).unwrap_or_default();
        match lifetime.expiry_delay() {
            Some(delay) => tokio::time::sleep(delay + Duration::from_millis(50)).await,
            None => println!("{id} is persistent; exiting without waiting"),
        }
        manager.shutdown();
        Ok::<(), Error>(())
    })
}

fn toast_demo(manager: NotificationManager) -> Result<()> {
    let runtime = runtime()?;

    runtime.block_on(async {
        let subscription = manager.subscribe(print_snapshot);

        manager.success("Settings saved")?;
        manager.info("3 files synced")?;
        manager.show(
            "Disk almost full",
            Category::Warning,
            Some(Lifetime::from_duration(Duration::from_millis(500))),
        )?;
        let error = manager.show(
            "Upload failed",
            Category::Error,
            Some(Lifetime::PERSISTENT),
        )?;

        tokio::time::sleep(Duration::from_millis(750)).await;
        if !manager.dismiss(error) {
            warn!(%error, "demo notification already gone");
        }

        let longest = manager.config().success_ms.max(manager.config().info_ms);
        tokio::time::sleep(Duration::from_millis(longest + 100)).await;

        subscription.unsubscribe();
        manager.shutdown();
        Ok::<(), Error>(())
    })
}

fn print_snapshot(active: &[Notification]) {
    if active.is_empty() {
        println!("[no notifications]");
        return;
    }
    let line: Vec<String> = active
        .iter()
        .map(|n| format!("{} {}: {}", n.id(), n.category(), n.message()))
        .collect();
    println!("[{}]", line.join(" | "));
}
