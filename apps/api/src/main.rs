//! # RestDemo API サーバー
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run -p restdemo-api
//! ```
//!
//! `DATABASE_URL` が設定されていれば PostgreSQL を使い、起動時にマイグレーションを適用する。
//! 未設定の場合はインメモリリポジトリで動作する（プロセス終了でデータは消える）。

use std::sync::Arc;

use anyhow::Context as _;
use restdemo_api::{
    app_builder::{build_app, build_user_state},
    config::ApiConfig,
};
use restdemo_domain::clock::SystemClock;
use restdemo_infra::{
    db,
    repository::{InMemoryUserRepository, PostgresUserRepository, UserRepository},
};
use restdemo_shared::observability::{TracingConfig, init_tracing};
use tokio::{net::TcpListener, signal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    let tracing_config = TracingConfig::from_env("api");
    init_tracing(tracing_config);
    let _tracing_guard = tracing::info_span!("app", service = "api").entered();

    let config = ApiConfig::from_env().context("設定の読み込みに失敗しました")?;

    let user_repository: Arc<dyn UserRepository> = match &config.database_url {
        Some(url) => {
            let pool = db::create_pool(url)
                .await
                .context("データベースへの接続に失敗しました")?;
            db::run_migrations(&pool)
                .await
                .context("マイグレーションの適用に失敗しました")?;
            tracing::info!("PostgreSQL リポジトリを使用します");
            Arc::new(PostgresUserRepository::new(pool))
        }
        None => {
            tracing::info!("DATABASE_URL が未設定のため、インメモリリポジトリを使用します");
            Arc::new(InMemoryUserRepository::new())
        }
    };

    let app = build_app(build_user_state(user_repository, Arc::new(SystemClock)));

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("{addr} へのバインドに失敗しました"))?;
    tracing::info!("API サーバーを起動しました: {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("サーバーが異常終了しました")?;

    tracing::info!("API サーバーを停止しました");
    Ok(())
}

/// Ctrl-C または SIGTERM を待つ
///
/// シグナルハンドラを登録できなかった場合、そのシグナルは待たない。
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Ctrl-C ハンドラの登録に失敗しました: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("SIGTERM ハンドラの登録に失敗しました: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("SIGINT を受信しました。シャットダウンします"),
        _ = terminate => tracing::info!("SIGTERM を受信しました。シャットダウンします"),
    }
}
