mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::process;

use cli::{parse_args, Config};
use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};
use ports::inbound::UseCaseRunner;
use wiring::{wire_openprofile, App};

/// 起動 1 回分を実行する Runner
struct Runner {
    app: App,
}

impl UseCaseRunner for Runner {
    fn run(&self, parsed: Result<Config, Error>) -> Result<(), Error> {
        let mut record = LogRecord::new(LogLevel::Debug, "run started")
            .layer("cli")
            .kind("lifecycle");
        if let Ok(config) = &parsed {
            record = record.field("query", config.query.as_str());
        }
        let _ = self.app.logger.log(&record);

        self.app
            .workflow_use_case
            .run(parsed.map(|config| config.query))
    }
}

fn main() {
    let runner = Runner {
        app: wire_openprofile(),
    };
    // 失敗も応答文書の中で伝えるので、終了コードは常に 0
    if let Err(e) = runner.run(parse_args()) {
        eprintln!("openprofile: {}", e);
    }
    process::exit(0);
}
