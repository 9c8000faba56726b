//! gitup entrypoint

fn main() -> anyhow::Result<()> {
    gitup::initialize_command_line()
}
