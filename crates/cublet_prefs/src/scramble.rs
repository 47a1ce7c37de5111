use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ScramblePreferences {
    /// Number of moves in a generated scramble.
    pub length: usize,
}
impl Default for ScramblePreferences {
    fn default() -> Self {
        Self { length: 20 }
    }
}
