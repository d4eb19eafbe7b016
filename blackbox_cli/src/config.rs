use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use blackbox::{Grid, Position};
use serde::{Deserialize, Serialize};

/// Where the atoms are, as read from a JSON file.
///
/// ```json
/// { "atoms": [{ "row": 3, "column": 3 }, { "row": 6, "column": 2 }] }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub atoms: Vec<Position>,
}

impl LayoutConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Could not open layout file '{}'", path.display()))?;
        let config = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Could not parse layout file '{}'", path.display()))?;
        Ok(config)
    }

    pub fn into_grid(self) -> anyhow::Result<Grid> {
        Ok(Grid::new(&self.atoms)?)
    }
}
