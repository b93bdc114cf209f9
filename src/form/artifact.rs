use super::definition::FormDefinition;
use crate::error::ArtifactError;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use std::fs;
use std::io::{Read, Write};

impl FormDefinition {
    /// Saves the form definition to a file using the bincode format.
    ///
    /// Hosts that assemble definitions from a slow upstream (a builder
    /// export, a database) can cache the canonical model this way and
    /// reload it without re-running the conversion.
    pub fn save(&self, path: &str) -> Result<(), ArtifactError> {
        let bytes = encode_to_vec(self, standard())
            .map_err(|e| ArtifactError::Generic(format!("Serialization failed: {}", e)))?;
        let mut file = fs::File::create(path).map_err(|e| {
            ArtifactError::Generic(format!("Could not create file '{}': {}", path, e))
        })?;
        file.write_all(&bytes).map_err(|e| {
            ArtifactError::Generic(format!("Could not write to file '{}': {}", path, e))
        })?;
        Ok(())
    }

    /// Loads a stored form definition from a file.
    pub fn from_file(path: &str) -> Result<Self, ArtifactError> {
        let mut file = fs::File::open(path)
            .map_err(|e| ArtifactError::Generic(format!("Could not open file '{}': {}", path, e)))?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| {
            ArtifactError::Generic(format!("Could not read from file '{}': {}", path, e))
        })?;
        Self::from_bytes(&bytes)
    }

    /// Deserializes a stored form definition from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArtifactError> {
        decode_from_slice(bytes, standard())
            .map(|(definition, _)| definition) // bincode 2 returns a tuple (data, bytes_read)
            .map_err(|e| ArtifactError::Generic(format!("Deserialization failed: {}", e)))
    }
}
