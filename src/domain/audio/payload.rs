//! Audio payload value object

/// Opaque audio bytes as downloaded from the audio host.
/// Passed between downloader, cache and player without inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioPayload {
    data: Vec<u8>,
}

impl AudioPayload {
    /// Create a payload from raw bytes
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Get the raw audio data
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get the size in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get human-readable size
    pub fn human_readable_size(&self) -> String {
        let bytes = self.size_bytes();
        if bytes < 1024 {
            format!("{} B", bytes)
        } else if bytes < 1024 * 1024 {
            format!("{:.1} KB", bytes as f64 / 1024.0)
        } else {
            format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
        }
    }
}

impl From<Vec<u8>> for AudioPayload {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_size() {
        let payload = AudioPayload::new(vec![0u8; 1024]);
        assert_eq!(payload.size_bytes(), 1024);
        assert!(!payload.is_empty());
        assert!(AudioPayload::new(Vec::new()).is_empty());
    }

    #[test]
    fn human_readable_size_bytes() {
        assert_eq!(AudioPayload::new(vec![0u8; 500]).human_readable_size(), "500 B");
    }

    #[test]
    fn human_readable_size_kb() {
        assert_eq!(AudioPayload::new(vec![0u8; 2048]).human_readable_size(), "2.0 KB");
    }

    #[test]
    fn human_readable_size_mb() {
        let payload = AudioPayload::new(vec![0u8; 2 * 1024 * 1024]);
        assert_eq!(payload.human_readable_size(), "2.0 MB");
    }

    #[test]
    fn bytes_pass_through_untouched() {
        let payload = AudioPayload::from(vec![0xff, 0xfb, 0x90]);
        assert_eq!(payload.data(), &[0xff, 0xfb, 0x90]);
    }
}
