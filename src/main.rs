use std::fs::File;
use std::io::{stderr, stdout, BufReader};
use std::process::exit;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;
use tokio::task::spawn_blocking;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use conta_service::models::AccountDto;
use conta_service::service::AccountService;
use conta_service::storage::{AccountStorage, StatusStorage};
use conta_service::types::{AccountId, PageRequest};

type Service = AccountService<AccountStorage, StatusStorage>;

const OUTPUT_PAGE_SIZE: usize = 100;

#[derive(Serialize)]
struct AccountOutRow {
    id: Option<AccountId>,
    description: Option<String>,
    value: Option<String>,
    due_date: Option<String>,
    payment_date: Option<String>,
    status: Option<String>
}

impl From<AccountDto> for AccountOutRow {
    fn from(dto: AccountDto) -> Self {
        Self {
            id: dto.id,
            description: dto.description,
            value: dto.value.map(|value| value.to_string()),
            due_date: dto.due_date.map(|date| date.format("%Y-%m-%d").to_string()),
            payment_date: dto.payment_date.map(|date| date.format("%Y-%m-%d").to_string()),
            status: dto.status.and_then(|status| status.description)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: conta-service [input].csv [log_level:optional] > [output].csv");
        eprintln!("Input rows: description,value,due_date[,payment_date[,status_id]]");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        exit(1);
    }

    let path = args[1].clone();
    let log_level = args.get(2)
        .map(|s| parse_log_level(s)).unwrap_or_else(|| LevelFilter::ERROR);

    setup_logging(log_level);

    let service: Service = AccountService::new(Arc::new(AccountStorage::new()), Arc::new(StatusStorage::new()));

    let timer = Instant::now();
    let imported = import_file(service.clone(), path).await?;
    let duration = timer.elapsed();

    info!("Imported [{}] accounts in: {duration:?}", imported.len());

    report_imported_span(&service, &imported)?;

    write_results_to_stdout(&service)?;

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    // Account rows own stdout; every log line is routed to stderr.
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

async fn import_file(service: Service, path: String) -> Result<Vec<AccountDto>> {
    spawn_blocking(move || -> Result<Vec<AccountDto>> {
        let file = File::open(&path).with_context(|| format!("Error opening CSV at path: {path}"))?;
        let imported = service.import_from_csv(BufReader::new(file))?;
        Ok(imported)
    })
    .await?
}

fn report_imported_span(service: &Service, imported: &[AccountDto]) -> Result<()> {
    let due_dates = imported.iter().filter_map(|dto| dto.due_date);

    let (Some(start), Some(end)) = (due_dates.clone().min(), due_dates.max()) else {
        return Ok(());
    };

    let report = service.report_total_by_date_range(start, end)?;

    info!("Total due between [{start}] and [{end}]: {}", report.total);

    Ok(())
}

fn write_results_to_stdout(service: &Service) -> Result<()> {
    let mut writer = csv::Writer::from_writer(stdout().lock());
    let mut request = PageRequest::new(0, OUTPUT_PAGE_SIZE)?;

    loop {
        let page = service.list_all(&request);
        let total_pages = page.total_pages();

        for dto in page.content {
            writer.serialize(AccountOutRow::from(dto))?;
        }

        if request.page() + 1 >= total_pages {
            break;
        }

        request = PageRequest::new(request.page() + 1, OUTPUT_PAGE_SIZE)?;
    }

    writer.flush()?;

    Ok(())
}
