//! Accepted assignments in voice-and-flag form.

use serde::{Deserialize, Serialize};

/// One accepted assignment: four pitch sequences and the three structure
/// flag sequences, all of the problem's event length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub soprano: Vec<i32>,
    pub alto: Vec<i32>,
    pub tenor: Vec<i32>,
    pub bass: Vec<i32>,
    pub close: Vec<bool>,
    pub open: Vec<bool>,
    pub neutral: Vec<bool>,
}

impl Assignment {
    /// Number of chord events.
    pub fn len(&self) -> usize {
        self.soprano.len()
    }

    /// Whether the assignment covers zero events.
    pub fn is_empty(&self) -> bool {
        self.soprano.is_empty()
    }

    /// The four-voice pitch tuple at one event, highest voice first.
    pub fn chord(&self, event: usize) -> [i32; 4] {
        [
            self.soprano[event],
            self.alto[event],
            self.tenor[event],
            self.bass[event],
        ]
    }

    /// The soprano-tenor interval at one event.
    pub fn interval(&self, event: usize) -> i32 {
        self.soprano[event] - self.tenor[event]
    }

    /// Serializes the assignment to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the assignment to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
