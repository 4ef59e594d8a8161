use std::sync::Once;

static INIT: Once = Once::new();

/// ログ設定の初期化
///
/// `RUST_LOG` が未設定の場合は `devhub_feed=debug,feed=debug,info` を使う (`feed::*` ターゲットを含む)。
/// 二回目以降の呼び出しは何もしない。
pub fn init_logging() {
    INIT.call_once(|| {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "devhub_feed=debug,feed=debug,info".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .try_init();
    });
}
