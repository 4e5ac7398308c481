use chrono::Local;
use jerk_chicken_alert::utils::{logger, validation::Validate};
use jerk_chicken_alert::{
    AppConfig, Checker, DateWindow, DiningClient, FileErrorSink, MenuSourceKind, PageMenuScan,
    RestMenuScan, StatusPublisher,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日誌
    logger::init_cli_logger();

    tracing::info!("Starting jerk-chicken-alert");

    // 載入並驗證配置
    let config = match AppConfig::from_env().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let target = config
        .target_date
        .unwrap_or_else(|| Local::now().date_naive());
    let window = DateWindow::new(target);
    tracing::info!("Checking menus for {}", window.the_date());

    // 創建客戶端、發布器與錯誤記錄
    let client = DiningClient::new(&config)?;
    let publisher = StatusPublisher::new(&config);
    let errors = FileErrorSink::new(config.error_log.clone());

    // 運行檢查
    let result = match config.menu_source {
        MenuSourceKind::Rest => {
            Checker::new(RestMenuScan::new(client), publisher, errors)
                .run(&window)
                .await
        }
        MenuSourceKind::Pages => {
            Checker::new(PageMenuScan::new(client), publisher, errors)
                .run(&window)
                .await
        }
    };

    match result {
        Ok(message) => {
            tracing::info!("✅ Menu check completed successfully!");
            println!("✅ Published update:\n{}", message);
        }
        Err(e) => {
            tracing::error!("❌ Menu check failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
