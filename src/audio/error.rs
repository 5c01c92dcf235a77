use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum AudioError {
    #[error("Audio input device error: {0}")]
    InputDevice(String),

    #[error("Audio output device error: {0}")]
    OutputDevice(String),

    #[error("Stream error: {0}")]
    Stream(String),
}
