use assert_cmd::Command;
use std::path::Path;

pub fn photonotes_cmd() -> Command {
    let mut cmd = Command::cargo_bin("photonotes").unwrap();
    cmd.env_remove("PHOTONOTES_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Run `photonotes init` in `dir`
#[allow(dead_code)]
pub fn init_collection(dir: &Path) {
    photonotes_cmd().arg("init").arg(dir).assert().success();
}

/// Path of the file holding the serialized notes
#[allow(dead_code)]
pub fn notes_file(dir: &Path) -> std::path::PathBuf {
    dir.join(".photonotes").join("store").join("%40PhotoNotes.value")
}
