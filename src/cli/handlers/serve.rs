use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};
use colored::Colorize;

use super::CommandContext;
use crate::server::{AppState, run_server};

pub fn handle_serve(ctx: CommandContext, host: Option<String>, port: Option<u16>) -> Result<()> {
    let host = host.unwrap_or_else(|| ctx.config.server.host.clone());
    let port = port.unwrap_or(ctx.config.server.port);
    let ip: IpAddr = host
        .parse()
        .with_context(|| format!("Invalid host address: {}", host))?;
    let addr = SocketAddr::new(ip, port);

    let state = AppState::from_config(&ctx.config, &ctx.root)?;

    println!(
        "{} http://{}",
        "Serving portfolio on".green(),
        addr.to_string().cyan()
    );

    tokio::runtime::Runtime::new()?.block_on(run_server(state, addr))?;
    Ok(())
}
