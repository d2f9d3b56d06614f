//! Graph data produced by a running simulation
//!
//! After every full pass the collection pushes one [`GraphSample`] into its
//! [`GraphSink`]. [`GraphRecorder`] keeps a bounded series that can be saved
//! to and loaded from RON.

use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Serialize, Deserialize};

/// One data point per completed pass
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphSample {
    /// Pass number, starting at 1
    pub pass: u64,
    /// The collection's expected-value accumulator after this pass
    pub expected_value: f32,
    /// Running mean of per-move displacement (dx + dy) over all moves so far
    pub mean_displacement: f32,
    /// Collisions detected so far
    pub collisions: u64,
    /// Walkers alive during this pass
    pub walkers: usize,
}

/// A consumer of graph samples
pub trait GraphSink {
    fn record(&mut self, sample: GraphSample);
}

/// Discards every sample
#[derive(Clone, Copy, Debug, Default)]
pub struct NullGraph;

impl GraphSink for NullGraph {
    fn record(&mut self, _sample: GraphSample) {}
}

impl GraphSink for Vec<GraphSample> {
    fn record(&mut self, sample: GraphSample) {
        self.push(sample);
    }
}

/// A bounded, serializable series of graph samples
///
/// When full, the oldest sample is dropped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphRecorder {
    capacity: usize,
    samples: VecDeque<GraphSample>,
}

impl GraphRecorder {
    /// Create a recorder holding at most `capacity` samples (0 = unbounded)
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            samples: VecDeque::new(),
        }
    }

    /// Recorded samples, oldest first
    pub fn samples(&self) -> &VecDeque<GraphSample> {
        &self.samples
    }

    /// Most recent sample
    pub fn latest(&self) -> Option<&GraphSample> {
        self.samples.back()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Drop every sample
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Load a recorded series from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, GraphLoadError> {
        let contents = fs::read_to_string(path)?;
        let recorder = ron::from_str(&contents)?;
        Ok(recorder)
    }

    /// Save the series to a RON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), GraphSaveError> {
        let pretty = ron::ser::PrettyConfig::new()
            .struct_names(true)
            .enumerate_arrays(false);
        let contents = ron::ser::to_string_pretty(self, pretty)?;
        fs::write(path, contents)?;
        Ok(())
    }
}

impl Default for GraphRecorder {
    fn default() -> Self {
        Self::new(0)
    }
}

impl GraphSink for GraphRecorder {
    fn record(&mut self, sample: GraphSample) {
        if self.capacity > 0 && self.samples.len() >= self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }
}

/// Error loading a graph series
#[derive(Debug)]
pub enum GraphLoadError {
    /// IO error reading file
    Io(io::Error),
    /// RON parse error
    Parse(ron::error::SpannedError),
}

impl From<io::Error> for GraphLoadError {
    fn from(e: io::Error) -> Self {
        GraphLoadError::Io(e)
    }
}

impl From<ron::error::SpannedError> for GraphLoadError {
    fn from(e: ron::error::SpannedError) -> Self {
        GraphLoadError::Parse(e)
    }
}

impl std::fmt::Display for GraphLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphLoadError::Io(e) => write!(f, "IO error: {}", e),
            GraphLoadError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for GraphLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GraphLoadError::Io(e) => Some(e),
            GraphLoadError::Parse(e) => Some(e),
        }
    }
}

/// Error saving a graph series
#[derive(Debug)]
pub enum GraphSaveError {
    /// IO error writing file
    Io(io::Error),
    /// RON serialization error
    Serialize(ron::Error),
}

impl From<io::Error> for GraphSaveError {
    fn from(e: io::Error) -> Self {
        GraphSaveError::Io(e)
    }
}

impl From<ron::Error> for GraphSaveError {
    fn from(e: ron::Error) -> Self {
        GraphSaveError::Serialize(e)
    }
}

impl std::fmt::Display for GraphSaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphSaveError::Io(e) => write!(f, "IO error: {}", e),
            GraphSaveError::Serialize(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for GraphSaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GraphSaveError::Io(e) => Some(e),
            GraphSaveError::Serialize(e) => Some(e),
        }
    }
}
