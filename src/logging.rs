//! ログ出力の初期化

use tracing_subscriber::EnvFilter;

/// ログレベルを指定する環境変数（EnvFilter 構文）
pub const LOG_ENV: &str = "VFM_LOG";

/// `-v` の回数に応じた既定レベル
fn default_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// stderr へのログ出力を設定（VFM_LOG が優先）
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbosity)));

    // 二重初期化は無視する
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
