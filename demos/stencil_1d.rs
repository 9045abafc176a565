use stencil_march::args::Args;
use stencil_march::build_info;
use stencil_march::simulation;
use tracing_subscriber::EnvFilter;

#[cfg(feature = "profile-with-puffin")]
fn start_puffin_server() -> anyhow::Result<puffin_http::Server> {
    let server_addr = format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
    println!("Run this to view profiling data:  puffin_viewer {server_addr}");
    let server = puffin_http::Server::new(&server_addr)?;
    profiling::puffin::set_scopes_on(true);
    Ok(server)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::cli_parse("stencil_1d");
    build_info::print_report("stencil_1d");

    #[cfg(feature = "profile-with-puffin")]
    let _puffin_server = start_puffin_server()?;

    let params = args.to_config()?.validate()?;
    let report = simulation::run_in_pool(&params)?;

    #[cfg(feature = "profile-with-puffin")]
    profiling::finish_frame!();

    println!(
        "Total simulation time: {:.3} seconds",
        report.elapsed.as_secs_f64()
    );
    report.print_report("stencil_1d");
    if args.print_field {
        report.print_field();
    }
    Ok(())
}
