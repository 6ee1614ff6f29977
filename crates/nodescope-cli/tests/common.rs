#![allow(dead_code)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use nodescope_testing::TestWorld;
use nodescope_testing::world::CliResult;

pub fn command(world: &TestWorld) -> Command {
    let mut cmd = cargo_bin_cmd!("nodescope");
    world.configure_command(&mut cmd);
    cmd
}

pub fn run(world: &TestWorld, args: &[&str]) -> CliResult {
    world
        .run(cargo_bin_cmd!("nodescope"), args)
        .expect("Failed to run nodescope")
}
