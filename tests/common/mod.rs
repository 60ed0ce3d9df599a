#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::{TempDir, tempdir};

/// Scratch directory helper that cleans up files automatically on drop.
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            temp_dir: tempdir().expect("temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Writes `contents` into a file under the workspace and returns the path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        let mut file = File::create(&path).expect("create temp file");
        file.write_all(contents.as_bytes())
            .expect("write temp file contents");
        path
    }
}

/// A 12-row league season with every column the report consumes, including
/// mixed price encodings and the `*` / dash average placeholders.
pub const SEASON_CSV: &str = "\
Player,TEAM,Runs,Wkts,SR,Avg,SOLD_PRICE
Virat Kohli,RCB,973,0,152.03,81.08*,1.5 Cr
DA Warner,SRH,848,0,151.42,60.57,2.5 Cr
AB de Villiers,RCB,687,0,168.79,52.84,not disclosed
MS Dhoni,CSK,455,0,135.92,40.12,12 Cr
Rohit Sharma,MI,489,1,142.12,44.45,95 Lakh
B Kumar,SRH,49,23,118.00,9.80,850
YS Chahal,RCB,34,21,101.00,8.50,\"\u{20b9}6,00,000\"
JJ Bumrah,MI,22,20,95.00,7.33,unsold
SP Narine,KKR,357,17,172.46,29.75,80 Lakh
AD Russell,KKR,510,13,184.78,56.66,70 Lakh
HH Pandya,MI,250,10,133.00,27.77,\"\u{20b9}11,00,000\"
S Gopal,RR,100,9,110.00,\u{2013},20 Lakh
";
