use std::ffi::OsString;

use clap::Parser;

pub const DEFAULT_NODE_NAME: &str = "static_turtle_tf2_broadcaster";

/// Token `ros2 run` and launch files put in front of middleware arguments.
pub const ROS_ARGS_FLAG: &str = "--ros-args";

/// Publish a static transform from `world` to CHILD_FRAME_NAME once at startup
///
/// Options go before the pose; everything from the first pose value on is
/// taken verbatim. A frame name that collides with an option needs `--`.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Node name used on the ROS graph
    #[arg(long, env = "STATIC_TF_NODE_NAME", default_value = DEFAULT_NODE_NAME)]
    pub node_name: String,

    /// Node namespace
    #[arg(long, env = "STATIC_TF_NAMESPACE", default_value = "")]
    pub namespace: String,

    /// child_frame_name x y z roll pitch yaw
    #[arg(value_name = "POSE", allow_hyphen_values = true, trailing_var_arg = true)]
    pub pose: Vec<String>,
}

impl Cli {
    /// Parses `argv`, leaving everything from `--ros-args` on to the middleware.
    /// Exits the process on a clap error, as `Parser::parse_from` does.
    pub fn parse_with_ros_args<I, T>(argv: I) -> (Self, Vec<OsString>)
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_with_ros_args(argv).unwrap_or_else(|err| err.exit())
    }

    pub fn try_parse_with_ros_args<I, T>(argv: I) -> Result<(Self, Vec<OsString>), clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let (own, ros_args) = split_ros_args(argv);
        Ok((Self::try_parse_from(own)?, ros_args))
    }
}

/// Splits `argv` at the first `--ros-args` token.
pub fn split_ros_args<I, T>(argv: I) -> (Vec<OsString>, Vec<OsString>)
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut own: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    let ros_args = match own.iter().position(|arg| arg == ROS_ARGS_FLAG) {
        Some(index) => own.split_off(index),
        None => Vec::new(),
    };
    (own, ros_args)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_split_ros_args() {
        let (own, ros) = split_ros_args(["bin", "turtle1", "--ros-args", "-r", "__ns:=/a"]);
        assert_eq!(own, vec!["bin", "turtle1"]);
        assert_eq!(ros, vec!["--ros-args", "-r", "__ns:=/a"]);

        let (own, ros) = split_ros_args(["bin"]);
        assert_eq!(own, vec!["bin"]);
        assert!(ros.is_empty());
    }

    #[test]
    fn test_pose_with_negative_numbers() {
        let cli = Cli::try_parse_from([
            "bin", "turtle1", "-1.5", "2", "0", "-0.3", "0", "3.14",
        ])
        .unwrap();
        assert_eq!(
            cli.pose,
            vec!["turtle1", "-1.5", "2", "0", "-0.3", "0", "3.14"]
        );
    }

    #[test]
    fn test_frame_name_starting_with_hyphen() {
        let cli = Cli::try_parse_from(["bin", "-base", "0", "2", "0", "0", "0", "0"]).unwrap();
        assert_eq!(cli.pose, vec!["-base", "0", "2", "0", "0", "0", "0"]);

        let cli =
            Cli::try_parse_from(["bin", "--", "--version", "0", "2", "0", "0", "0", "0"]).unwrap();
        assert_eq!(cli.pose[0], "--version");
    }

    #[test]
    fn test_options_after_pose_are_pose_values() {
        let cli = Cli::try_parse_from([
            "bin", "--node-name", "a", "turtle1", "0", "2", "0", "0", "0", "0", "--node-name", "b",
        ])
        .unwrap();
        assert_eq!(cli.node_name, "a");
        assert_eq!(cli.pose.len(), 9);
    }

    #[test]
    fn test_missing_pose_is_not_a_clap_error() {
        let cli = Cli::try_parse_from(["bin", "--node-name", "my_broadcaster"]).unwrap();
        assert!(cli.pose.is_empty());
        assert_eq!(cli.node_name, "my_broadcaster");
    }

    #[test]
    fn test_parse_with_ros_args() {
        let (cli, ros) = Cli::try_parse_with_ros_args([
            "bin", "turtle1", "0", "2", "0", "0", "0", "0", "--ros-args", "--log-level", "debug",
        ])
        .unwrap();
        assert_eq!(cli.pose.len(), 7);
        assert_eq!(ros.len(), 3);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_argument_is_a_clap_error() {
        use std::os::unix::ffi::OsStringExt;

        let argv = vec![
            OsString::from("bin"),
            OsString::from_vec(vec![0x66, 0xff, 0x6f]),
            OsString::from("0"),
        ];
        let err = Cli::try_parse_with_ros_args(argv).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidUtf8);
    }
}
