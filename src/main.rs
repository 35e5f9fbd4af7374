use std::ffi::OsString;
use std::io;

use anyhow::Result;
use clap::Parser;

use chapter_fetch::cli::Args;
use chapter_fetch::config::Settings;
use chapter_fetch::{app, logger};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    logger::init();

    let argv: Vec<OsString> = std::env::args_os().collect();

    let args = match Args::try_parse_from(&argv) {
        Ok(args) => args,
        Err(e) => {
            // 用法说明输出到 stdout
            println!("{}", e.render());
            std::process::exit(e.exit_code());
        }
    };

    let settings = Settings::load()?;
    app::run(args, &argv, &settings, &mut io::stdout()).await?;
    Ok(())
}
