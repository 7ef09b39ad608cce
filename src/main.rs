use std::process::ExitCode;

use log_alert::utils::init_logging;

fn main() -> ExitCode {
    // 1. 환경변수 로드
    dotenvy::dotenv().ok();

    // 2. 로깅 초기화
    init_logging();

    // 3. 로그 검사 1회 실행
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match log_alert::run(&mut out) {
        Ok(outcome) => {
            tracing::debug!(?outcome, "Check finished");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error_code = err.error_code(), "{}", err);
            ExitCode::FAILURE
        }
    }
}
