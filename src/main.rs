//! Publishes one static transform from `world` to the frame named on the
//! command line, then keeps the node alive until Ctrl-C.

use log::debug;
use static_turtle_tf2_r2r::{
    cli::Cli, R2rHost, StaticTransformArgs, StaticTransformPublisher, TfStaticBroadcaster,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (cli, ros_args) = Cli::parse_with_ros_args(std::env::args_os());
    if !ros_args.is_empty() {
        debug!("middleware arguments: {ros_args:?}");
    }

    let Some(args) = StaticTransformArgs::from_args_or_usage(&cli.pose)? else {
        return Ok(());
    };

    let mut host = R2rHost::init(&cli.node_name, &cli.namespace)?;
    let broadcaster = TfStaticBroadcaster::new(host.node_mut())?;
    let mut publisher = StaticTransformPublisher::new(broadcaster);
    publisher.make_transforms(&args, &mut host)?;

    host.spin_until_interrupted().await?;
    Ok(())
}
