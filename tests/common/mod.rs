use assert_cmd::Command;

pub fn taglist_cmd() -> Command {
    let mut cmd = Command::cargo_bin("taglist").unwrap();
    cmd.env_remove("TAGLIST_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}
