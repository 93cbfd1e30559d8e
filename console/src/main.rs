mod cli;
mod console;
mod render;
mod transport;

use clap::Parser;
use tracing::info;
use users_core::{UserListView, UsersApi};

use crate::cli::{init_tracing, Args};
use crate::console::Console;
use crate::transport::UreqTransport;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level, args.log_format);
    info!(base_url = %args.base_url, "starting");

    let api = UsersApi::new(&args.base_url, UreqTransport::new());
    let mut console = Console::new(UserListView::new(api))?;
    console.run()
}
