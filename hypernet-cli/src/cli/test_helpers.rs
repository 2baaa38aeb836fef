//! Small helpers shared across CLI tests.
//!
//! The CLI unit tests write record files into a temporary directory and
//! assert error handling behaviour. These helpers keep the cases concise.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use tempfile::TempDir;

use super::{Cli, CliError, Command, run_cli};

pub(super) const SYNSETS: &str = "\
0,entity,that which is perceived to have its own distinct existence
1,organism being,a living thing
2,animal beast,a living organism characterized by voluntary movement
3,equine equid,hoofed mammals
4,horse Equus_caballus,solid-hoofed herbivorous quadruped
5,zebra,striped African equine
6,feline felid,cats
7,cat true_cat,feline mammal usually having thick soft fur
8,artifact artefact,a man-made object
9,table,a piece of furniture having a smooth flat top
";

pub(super) const HYPERNYMS: &str = "\
1,0
2,1
3,2
4,3
5,3
6,2
7,6
8,0
9,8
";

/// Record files written into a temporary directory.
pub(super) struct Inputs {
    pub(super) dir: TempDir,
    pub(super) synsets: PathBuf,
    pub(super) hypernyms: PathBuf,
}

impl Inputs {
    pub(super) fn cli(&self, command: Command) -> Cli {
        Cli {
            synsets: self.synsets.clone(),
            hypernyms: self.hypernyms.clone(),
            command,
        }
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> io::Result<PathBuf> {
        create_text_file(&self.dir, name, contents)
    }
}

pub(super) fn inputs(synsets: &str, hypernyms: &str) -> io::Result<Inputs> {
    let dir = temp_dir();
    let synsets = create_text_file(&dir, "synsets.txt", synsets)?;
    let hypernyms = create_text_file(&dir, "hypernyms.txt", hypernyms)?;
    Ok(Inputs {
        dir,
        synsets,
        hypernyms,
    })
}

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_text_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
