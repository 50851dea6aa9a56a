use env_logger::{Builder, Env, Target};

/// Sets up `env_logger` for the binary.
///
/// Records go to stderr so they never mix with the status lines on stdout.
/// `RUST_LOG` overrides the default `warn` filter.
pub fn init_logger() {
    Builder::from_env(Env::default().default_filter_or("warn"))
        .target(Target::Stderr)
        .format_timestamp(None)
        .try_init()
        .ok();
}
