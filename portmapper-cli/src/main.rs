use std::process::ExitCode;

use tracing::Level;

use portmapper_agent::{MapperConfig, PortMapper};
use portmapper_cli::{Cli, Commands};
use portmapper_core::{list_interfaces, InterfaceIdentity, Result};
use portmapper_protocols::lldp::TlvLookup;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).init();
}

async fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Interfaces => {
            for iface in list_interfaces()? {
                let capture = if iface.is_capture_capable() {
                    ""
                } else {
                    "  (not capture-capable)"
                };
                println!("{iface}{capture}");
                for ip in &iface.ips {
                    println!("    {ip}");
                }
            }
            Ok(ExitCode::SUCCESS)
        }

        Commands::Status { interface } => {
            let identity = InterfaceIdentity::new(&interface)?;
            println!("interface: {}", identity.name());
            println!("status:    {}", identity.operational_status());
            println!("mac:       {}", identity.canonical_mac());
            println!("ipv4:      {}", identity.refresh_ip());
            Ok(ExitCode::SUCCESS)
        }

        Commands::Register {
            interface,
            server,
            room,
            jack,
            user,
            pass,
            positional_tlvs,
            timeout_ms,
        } => {
            let mut config = MapperConfig::new(&server);
            if positional_tlvs {
                config.lookup = TlvLookup::Positional;
            }
            if let Some(ms) = timeout_ms {
                config.capture.timeout_ms = ms;
            }

            let mapper = PortMapper::new(&interface, config)?;
            let outcome = mapper.report(&room, &jack, &user, &pass).await;
            let success = outcome.is_success();
            println!("{}", outcome.render());

            Ok(if success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}
