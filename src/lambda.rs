#[cfg(feature = "lambda")]
use chrono::{Local, NaiveDate};
#[cfg(feature = "lambda")]
use jerk_chicken_alert::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use jerk_chicken_alert::{
    AppConfig, Checker, DateWindow, DiningClient, FileErrorSink, MenuSourceKind, PageMenuScan,
    RestMenuScan, StatusPublisher,
};
#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "lambda")]
#[derive(Deserialize)]
pub struct Request {
    /// Day to check as YYYY-MM-DD; defaults to today when absent.
    pub target_date: Option<String>,
}

#[cfg(feature = "lambda")]
#[derive(Serialize)]
pub struct Response {
    pub message: String,
    pub target_date: String,
}

#[cfg(feature = "lambda")]
async fn function_handler(event: LambdaEvent<Request>) -> Result<Response, Error> {
    tracing::info!("Starting menu check Lambda function");

    // 載入並驗證配置
    let config = AppConfig::from_env()?;
    config.validate()?;

    let target = match &event.payload.target_date {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")?,
        None => config
            .target_date
            .unwrap_or_else(|| Local::now().date_naive()),
    };
    let window = DateWindow::new(target);

    // 創建客戶端、發布器與錯誤記錄
    let client = DiningClient::new(&config)?;
    let publisher = StatusPublisher::new(&config);
    let errors = FileErrorSink::new(config.error_log.clone());

    // 運行檢查
    let message = match config.menu_source {
        MenuSourceKind::Rest => {
            Checker::new(RestMenuScan::new(client), publisher, errors)
                .run(&window)
                .await?
        }
        MenuSourceKind::Pages => {
            Checker::new(PageMenuScan::new(client), publisher, errors)
                .run(&window)
                .await?
        }
    };

    tracing::info!("Menu check Lambda function completed successfully");
    Ok(Response {
        message,
        target_date: window.the_date(),
    })
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    run(service_fn(function_handler)).await
}
