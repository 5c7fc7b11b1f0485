use anyhow::Result;
use my_agent_server::{LaunchConfig, ServerConfig, server, telemetry};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init("my-agent-server");

    let launch = LaunchConfig::from_env()?;
    launch.export_agent_dir();

    let config = ServerConfig::new(launch.agent_dir.as_str());
    server::run(config, &launch.host, launch.port).await
}
