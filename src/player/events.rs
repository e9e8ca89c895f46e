use thiserror::Error;

/// Callbacks raised by the platform media engine.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    Play,
    Pause,
    TimeUpdate { current_time: f64, duration: f64 },
    LoadedMetadata { duration: f64 },
    Ended,
    Error(MediaError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaError {
    #[error("Playback was aborted before the track loaded.")]
    Aborted,
    #[error("Network error while loading this track.")]
    Network,
    #[error("Audio playback failed due to a decode error.")]
    Decode,
    #[error("Failed to load audio because no supported source was found.")]
    SourceNotSupported,
    #[error("Playback was blocked: {0}")]
    PlayRejected(String),
    #[error("Unable to load this audio source (code {0}).")]
    Unknown(u16),
}

impl MediaError {
    /// Map a `MediaError.code` value from the audio element.
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => Self::Aborted,
            2 => Self::Network,
            3 => Self::Decode,
            4 => Self::SourceNotSupported,
            other => Self::Unknown(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_map_to_variants() {
        assert_eq!(MediaError::from_code(2), MediaError::Network);
        assert_eq!(MediaError::from_code(4), MediaError::SourceNotSupported);
        assert_eq!(MediaError::from_code(9), MediaError::Unknown(9));
    }

    #[test]
    fn rejection_message_is_kept() {
        let err = MediaError::PlayRejected("NotAllowedError".to_string());
        assert_eq!(err.to_string(), "Playback was blocked: NotAllowedError");
    }
}
