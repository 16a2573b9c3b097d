use std::io::Write;

use anyhow::Result;
use clap::Parser;
use env_logger::Builder;
use log::debug;

use letterpool::LetterPool;

mod app;
mod args;
mod tui;

fn main() -> Result<()> {
    let args = args::Args::parse();

    Builder::new()
        .filter_level(args.log_level())
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let mut pool = LetterPool::new();
    args.apply(&mut pool);

    if args.tui {
        tui::initialize_panic_handler();
        let mut terminal = tui::init()?;
        let app_result = app::App::init(pool).run(&mut terminal);
        tui::restore()?;
        pool = app_result?;
    }
    debug!("Pool: {pool}");

    println!("{}", args.render(&pool)?);
    Ok(())
}
